// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod category;
mod config;
mod error;
mod file_utils;
mod image_cache;
mod image_loader;
mod outfit;
mod services;
mod startup;
mod state;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let paths = startup::launch_paths();
    let app_state = Rc::new(RefCell::new(state::AppState::new(&paths)?));

    let app = AppWindow::new()?;

    // Setup all UI event handlers
    ui::setup_handlers(&app, app_state.clone());
    ui::render(&app, &mut app_state.borrow_mut());

    app.run()?;

    Ok(())
}
