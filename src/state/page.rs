//! Which page the window shows.

/// View state of the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Page {
    /// Category rows with prev/next controls and the save form.
    #[default]
    Main,
    /// List of saved group names.
    Groups,
    /// Saved outfits of one group, showing the one at `index`.
    Outfits { group: String, index: usize },
}
