//! State management for the outfit scroller.

use crate::config::THUMBNAIL_CACHE_CAPACITY;
use crate::error::{AppError, Result};
use crate::file_utils::PathExt;
use crate::image_cache::ThumbnailCache;
use crate::outfit::SavedOutfits;
use crate::services::{OutfitStore, navigation_service};
use crate::startup::LaunchPaths;
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub mod navigation;
pub mod page;
pub mod wardrobe;

pub use page::Page;
pub use wardrobe::Wardrobe;

/// Everything the window shows.
///
/// Callbacks mutate this and then re-render; the UI holds no state of its own
/// apart from the text being typed into the save field.
pub struct AppState {
    pub wardrobe: Wardrobe,
    pub store: OutfitStore,
    /// Outfits as last read from the store.
    pub saved: SavedOutfits,
    pub page: Page,
    pub feedback: Feedback,
    pub thumbnails: ThumbnailCache,
}

impl AppState {
    /// Scans the image root and loads saved outfits.
    ///
    /// A malformed outfits file is returned as an error.
    pub fn new(paths: &LaunchPaths) -> Result<Self> {
        let store = OutfitStore::new(&paths.save_file);
        let saved = store.load_all()?;
        info!(
            "Loaded {} saved groups from {}",
            saved.len(),
            store.path().format_for_log()
        );

        Ok(Self {
            wardrobe: Wardrobe::load(&paths.image_root),
            store,
            saved,
            page: Page::default(),
            feedback: Feedback::None,
            thumbnails: ThumbnailCache::new(THUMBNAIL_CACHE_CAPACITY),
        })
    }

    /// Applies a page transition.
    pub fn navigate(&mut self, transition: impl FnOnce(Page, &SavedOutfits) -> Page) {
        let page = std::mem::take(&mut self.page);
        self.page = transition(page, &self.saved);
    }

    /// Saves the current selection under `group` and reloads the outfits.
    ///
    /// Returns whether a record was written.
    pub fn save_outfit(&mut self, group: &str) -> bool {
        let record = self.wardrobe.snapshot();
        match self.store.append(group, record) {
            Ok(appended) => {
                self.feedback = Feedback::Info(format!(
                    "Saved outfit to '{}' ({} total)",
                    appended.group, appended.group_len
                ));
                self.reload_saved();
                true
            }
            Err(AppError::EmptyGroupName) => {
                warn!("No group name entered");
                self.feedback = Feedback::Error(AppError::EmptyGroupName.to_string());
                false
            }
            Err(e) => {
                error!("Failed to save outfit: {}", e);
                self.feedback = Feedback::Error(format!("Failed to save outfit: {}", e));
                false
            }
        }
    }

    /// Re-reads the outfits file, keeping the previous copy on failure.
    pub fn reload_saved(&mut self) {
        match self.store.load_all() {
            Ok(saved) => {
                self.saved = saved;
                self.navigate(navigation_service::clamp_to);
            }
            Err(e) => {
                error!("Failed to reload saved outfits: {}", e);
                self.feedback = Feedback::Error(format!("Failed to reload saved outfits: {}", e));
            }
        }
    }

    /// Switches to another image root and returns to the main page.
    pub fn open_image_root(&mut self, image_root: PathBuf) {
        info!("Switching image root to {}", image_root.format_for_log());
        self.wardrobe.reload(image_root);
        debug!("Dropping {} cached thumbnails", self.thumbnails.len());
        self.thumbnails.clear();
        self.page = Page::Main;
        self.feedback = Feedback::Info(format!(
            "Opened {}",
            self.wardrobe.image_root().display()
        ));
    }
}

/// One-line feedback for the last action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Info(String),
    Error(String),
}

/// Handle shared by the UI callbacks.
pub type SharedState = Rc<RefCell<AppState>>;
