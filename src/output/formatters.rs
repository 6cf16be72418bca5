//! Formatting utilities for terminal output

use crate::core::FeedbackItem;
use serde::Serialize;

/// Format a feedback list as an emoji string, one square per slot
#[must_use]
pub fn feedback_to_emoji(feedback: &[FeedbackItem]) -> String {
    feedback.iter().map(|item| item.result.emoji()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pretty JSON for any result body
///
/// # Errors
///
/// Returns the serializer error if `value` cannot be represented as JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SizeResults;
    use crate::core::score_guess;
    use crate::solver::SolveResult;

    #[test]
    fn feedback_emoji_mixed() {
        let emoji = feedback_to_emoji(&score_guess("robot", "floor"));
        assert_eq!(emoji, "🟨🟨⬜🟩⬜");
    }

    #[test]
    fn feedback_emoji_empty() {
        assert_eq!(feedback_to_emoji(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn batch_json_uses_size_keys() {
        let mut results = SizeResults::new();
        results.insert(9, SolveResult::failed());
        let json: serde_json::Value = serde_json::from_str(&to_json(&results).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "9": {"guesses": [], "success": false, "correctWord": "", "attempts": 0}
            })
        );
    }
}
