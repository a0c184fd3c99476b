//! Helper functions to set groups of ViewState properties together.

use crate::state::Feedback;
use slint::ComponentHandle;

/// Sets the status and error lines from the last action's feedback.
///
/// Groups: status-message, error-message
pub fn set_feedback(ui: &crate::AppWindow, feedback: &Feedback) {
    let view_state = ui.global::<crate::ViewState>();
    let (status, error) = match feedback {
        Feedback::None => ("", ""),
        Feedback::Info(message) => (message.as_str(), ""),
        Feedback::Error(message) => ("", message.as_str()),
    };
    view_state.set_status_message(status.into());
    view_state.set_error_message(error.into());
}

/// Sets all outfit viewer header properties at once.
///
/// Groups: group-name, group-empty, outfit-position
pub fn set_outfit_header(ui: &crate::AppWindow, group: &str, index: usize, total: usize) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_group_name(group.into());
    view_state.set_group_empty(total == 0);
    view_state.set_outfit_position(format_position(index, total).into());
}

/// "n / N" with a one-based `n`, or an empty string for an empty list.
pub fn format_position(index: usize, total: usize) -> String {
    if total == 0 {
        String::new()
    } else {
        format!("{} / {}", index + 1, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based() {
        assert_eq!(format_position(0, 3), "1 / 3");
        assert_eq!(format_position(2, 3), "3 / 3");
        assert_eq!(format_position(0, 0), "");
    }
}
