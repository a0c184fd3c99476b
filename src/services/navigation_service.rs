//! Page transitions.
//!
//! Each transition takes the current page and the loaded outfits and returns
//! the page to show next. Rendering only ever looks at the result.

use crate::outfit::{SavedOutfits, outfits_of};
use crate::state::Page;
use crate::state::navigation::Direction;
use log::debug;

pub fn show_groups(_page: Page) -> Page {
    Page::Groups
}

pub fn back_to_main(_page: Page) -> Page {
    Page::Main
}

pub fn back_to_groups(_page: Page) -> Page {
    Page::Groups
}

/// Opens the outfit viewer on the first outfit of `group`.
///
/// Unknown or empty groups still open; the viewer reports that nothing is
/// saved there.
pub fn open_group(_page: Page, group: &str) -> Page {
    debug!("Opening group '{}'", group);
    Page::Outfits {
        group: group.to_string(),
        index: 0,
    }
}

pub fn next_outfit(page: Page, saved: &SavedOutfits) -> Page {
    step_outfit(page, saved, Direction::Next)
}

pub fn prev_outfit(page: Page, saved: &SavedOutfits) -> Page {
    step_outfit(page, saved, Direction::Previous)
}

fn step_outfit(page: Page, saved: &SavedOutfits, direction: Direction) -> Page {
    match page {
        Page::Outfits { group, index } => {
            let len = outfits_of(saved, &group).len();
            let index = direction.step(index, len);
            Page::Outfits { group, index }
        }
        other => other,
    }
}

/// Keeps the viewer index inside its group after the outfits were reloaded.
pub fn clamp_to(page: Page, saved: &SavedOutfits) -> Page {
    match page {
        Page::Outfits { group, index } => {
            let len = outfits_of(saved, &group).len();
            let index = if index < len { index } else { 0 };
            Page::Outfits { group, index }
        }
        other => other,
    }
}
