//! Projection of [`AppState`] onto the window.
//!
//! Nothing here mutates the application state apart from the thumbnail
//! cache; every callback ends by calling [`render`].

use super::image_display::try_thumbnail;
use super::state_helpers::{format_position, set_feedback, set_outfit_header};
use crate::category::Category;
use crate::outfit::{groups_of, outfits_of};
use crate::state::{AppState, Page};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

/// Pushes the whole state to the window.
pub fn render(ui: &crate::AppWindow, state: &mut AppState) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_image_root(state.wardrobe.image_root().display().to_string().into());
    set_feedback(ui, &state.feedback);

    let active_page = match state.page {
        Page::Main => crate::ActivePage::Main,
        Page::Groups => crate::ActivePage::Groups,
        Page::Outfits { .. } => crate::ActivePage::Outfits,
    };
    view_state.set_page(active_page);

    match state.page {
        Page::Main => render_main(ui, state),
        Page::Groups => render_groups(ui, state),
        Page::Outfits { .. } => render_outfit(ui, state),
    }
}

fn render_main(ui: &crate::AppWindow, state: &mut AppState) {
    let rows: Vec<crate::CategoryRow> = Category::ALL
        .iter()
        .map(|&category| {
            let (index, total) = state.wardrobe.position(category);
            let current = state.wardrobe.current(category);
            let thumbnail = current.and_then(|path| try_thumbnail(path, &mut state.thumbnails));
            let placeholder = if current.is_some() {
                "Unreadable image"
            } else {
                "No images"
            };

            crate::CategoryRow {
                label: category.label().into(),
                loaded: thumbnail.is_some(),
                thumbnail: thumbnail.unwrap_or_default(),
                placeholder: placeholder.into(),
                file_name: current
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default()
                    .into(),
                position: format_position(index, total).into(),
            }
        })
        .collect();

    ui.global::<crate::ViewState>()
        .set_categories(ModelRc::new(VecModel::from(rows)));
}

fn render_groups(ui: &crate::AppWindow, state: &AppState) {
    let groups: Vec<SharedString> = groups_of(&state.saved).map(SharedString::from).collect();
    ui.global::<crate::ViewState>()
        .set_groups(ModelRc::new(VecModel::from(groups)));
}

fn render_outfit(ui: &crate::AppWindow, state: &mut AppState) {
    let Page::Outfits { group, index } = &state.page else {
        return;
    };

    let outfits = outfits_of(&state.saved, group);
    set_outfit_header(ui, group, *index, outfits.len());

    let slots: Vec<crate::OutfitSlot> = match outfits.get(*index) {
        Some(record) => Category::ALL
            .iter()
            .map(|&category| {
                let file_name = record.get(category);
                let thumbnail = file_name.and_then(|name| {
                    try_thumbnail(
                        &state.wardrobe.resolve(category, name),
                        &mut state.thumbnails,
                    )
                });

                crate::OutfitSlot {
                    label: category.label().into(),
                    loaded: thumbnail.is_some(),
                    thumbnail: thumbnail.unwrap_or_default(),
                    placeholder: "[Missing Image]".into(),
                    file_name: file_name.unwrap_or_default().into(),
                }
            })
            .collect(),
        None => Vec::new(),
    };

    ui.global::<crate::ViewState>()
        .set_outfit(ModelRc::new(VecModel::from(slots)));
}
