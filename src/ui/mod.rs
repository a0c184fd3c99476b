//! UI module for handling user interactions and UI updates.
//!
//! Everything runs on the Slint event loop:
//! - callbacks in `handlers` mutate the shared `AppState`;
//! - `render` then projects that state onto the `ViewState` global;
//! - `slint::spawn_local` is used only for the folder dialog.

pub mod handlers;
pub mod image_display;
pub mod render;
mod state_helpers;

pub use handlers::setup_handlers;
pub use render::render;
