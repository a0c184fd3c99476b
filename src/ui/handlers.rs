//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks. Each one borrows the shared state, applies a
//! change, and re-renders the window from the result.

use super::render::render;
use crate::category::Category;
use crate::services::navigation_service;
use crate::state::navigation::Direction;
use crate::state::{AppState, SharedState};
use log::warn;
use rfd::AsyncFileDialog;
use slint::ComponentHandle;

/// Runs `change` against the state and re-renders.
fn update<F>(ui_handle: &slint::Weak<crate::AppWindow>, state: &SharedState, change: F)
where
    F: FnOnce(&crate::AppWindow, &mut AppState),
{
    let Some(ui) = ui_handle.upgrade() else {
        return;
    };
    let mut state = state.borrow_mut();
    change(&ui, &mut state);
    render(&ui, &mut state);
}

fn step_image(state: &mut AppState, row: i32, direction: Direction) {
    let Some(category) = usize::try_from(row).ok().and_then(Category::from_index) else {
        warn!("Ignoring navigation for unknown category row {}", row);
        return;
    };
    match direction {
        Direction::Next => state.wardrobe.next(category),
        Direction::Previous => state.wardrobe.prev(category),
    };
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and shared state, then registers callbacks for
/// image stepping, saving, and page navigation.
pub fn setup_handlers(ui: &crate::AppWindow, state: SharedState) {
    let logic = ui.global::<crate::Logic>();

    logic.on_next_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |row| update(&ui_handle, &state, |_, s| step_image(s, row, Direction::Next))
    });

    logic.on_prev_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |row| update(&ui_handle, &state, |_, s| step_image(s, row, Direction::Previous))
    });

    logic.on_save_outfit({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |name| {
            update(&ui_handle, &state, |ui, s| {
                if s.save_outfit(&name) {
                    ui.global::<crate::ViewState>().set_save_name("".into());
                }
            })
        }
    });

    // Folder selection handler
    // AsyncFileDialog must run on the main thread, so it goes through spawn_local.
    logic.on_choose_folder({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let spawned = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new().pick_folder().await else {
                    return;
                };
                let image_root = folder.path().to_path_buf();
                update(&ui_handle, &state, |_, s| s.open_image_root(image_root));
            });
            if let Err(e) = spawned {
                warn!("Cannot open folder dialog: {}", e);
            }
        }
    });

    logic.on_show_groups({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            update(&ui_handle, &state, |_, s| {
                s.navigate(|page, _| navigation_service::show_groups(page))
            })
        }
    });

    logic.on_open_group({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |group| {
            update(&ui_handle, &state, |_, s| {
                s.navigate(|page, _| navigation_service::open_group(page, &group))
            })
        }
    });

    logic.on_next_outfit({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || update(&ui_handle, &state, |_, s| s.navigate(navigation_service::next_outfit))
    });

    logic.on_prev_outfit({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || update(&ui_handle, &state, |_, s| s.navigate(navigation_service::prev_outfit))
    });

    logic.on_back_to_main({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            update(&ui_handle, &state, |_, s| {
                s.navigate(|page, _| navigation_service::back_to_main(page))
            })
        }
    });

    logic.on_back_to_groups({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            update(&ui_handle, &state, |_, s| {
                s.navigate(|page, _| navigation_service::back_to_groups(page))
            })
        }
    });
}
