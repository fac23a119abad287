//! # Edit Decisions
//!
//! The heart of the app: a pure function that, given the current text and a
//! pending edit, decides whether the edit is allowed and what the screen
//! should look like afterwards.
//!
//! ```text
//! (current text, span, replacement)  →  should_change_text()  →  Decision
//! ```
//!
//! No side effects here. The function never touches the buffer — the caller
//! (`core::action::update`) applies accepted edits, and the TUI layer deals
//! with focus and colors. Calling it twice with the same inputs yields the
//! same `Decision`.

use crate::core::palette::{CHARACTER_LIMIT, Palette, palette_for};

/// A half-open character range `[start, start + len)` being replaced.
///
/// Indices count Unicode scalar values, not bytes — the limit is a
/// *character* budget, and byte offsets would land inside multi-byte
/// sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditSpan {
    pub start: usize,
    pub len: usize,
}

impl EditSpan {
    /// Insertion point with nothing replaced.
    pub fn caret(start: usize) -> Self {
        Self { start, len: 0 }
    }

    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }
}

/// Outcome of [`should_change_text`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Whether the host may apply the edit to the buffer.
    pub accept: bool,
    /// Whether the input field should give up focus (set on every
    /// rejection: line break or over-limit).
    pub resign_focus: bool,
    /// Characters left after the edit. Negative when the edit would
    /// overshoot the limit.
    pub remaining: i32,
    /// `remaining` clamped to zero, for the counter label.
    pub display_remaining: i32,
    /// True iff the text the user will see after this decision is empty.
    pub placeholder_visible: bool,
    /// Colors for the resulting remaining count.
    pub palette: Palette,
}

/// Decide whether `replacement` may replace `span` within `current`.
///
/// The edit is rejected when the replacement is a line break (Enter in the
/// original design dismisses the keyboard) or when the resulting text would
/// exceed [`CHARACTER_LIMIT`]. Rejection is a normal branch, not an error:
/// the returned palette and counter still describe the attempted count, so
/// the UI can flash the out-of-range colors.
pub fn should_change_text(current: &str, span: EditSpan, replacement: &str) -> Decision {
    let current_len = current.chars().count();
    let span_len = span
        .len
        .min(current_len.saturating_sub(span.start.min(current_len)));
    let new_len = current_len + replacement.chars().count() - span_len;
    let remaining = CHARACTER_LIMIT - new_len as i32;

    let is_line_break = replacement == "\n";
    let accept = !is_line_break && new_len as i32 <= CHARACTER_LIMIT;

    // On rejection the buffer never changes, so the placeholder keeps
    // reflecting the current text.
    let placeholder_visible = if accept {
        new_len == 0
    } else {
        current_len == 0
    };

    Decision {
        accept,
        resign_focus: !accept,
        remaining,
        display_remaining: remaining.max(0),
        placeholder_visible,
        palette: palette_for(remaining),
    }
}

/// Apply an edit to `current`, returning the new text. Pure; only called
/// for accepted edits. The span is clamped to the text length so a stale
/// cursor can never cause a panic.
pub fn apply_edit(current: &str, span: EditSpan, replacement: &str) -> String {
    let char_count = current.chars().count();
    let start = span.start.min(char_count);
    let end = (start + span.len).min(char_count);

    let byte_at = |char_idx: usize| {
        current
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(current.len())
    };
    let (start_b, end_b) = (byte_at(start), byte_at(end));

    let mut next = String::with_capacity(current.len() + replacement.len());
    next.push_str(&current[..start_b]);
    next.push_str(replacement);
    next.push_str(&current[end_b..]);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::Rgb;

    #[test]
    fn test_insert_into_empty_buffer() {
        let d = should_change_text("", EditSpan::caret(0), "Hello");
        assert!(d.accept);
        assert!(!d.resign_focus);
        assert_eq!(d.remaining, 195);
        assert!(!d.placeholder_visible);
        assert_eq!(d.palette.field, Rgb::from_u32(0xFFCDD2));
        assert_eq!(d.palette.screen, Rgb::from_u32(0x0D47A1));
        assert_eq!(d.palette.counter, Rgb::from_u32(0x1F1F21));
    }

    #[test]
    fn test_filling_the_budget_exactly_is_accepted() {
        let current = "x".repeat(199);
        let d = should_change_text(&current, EditSpan::caret(199), "y");
        assert!(d.accept);
        assert_eq!(d.remaining, 0);
        assert_eq!(d.palette.field, Rgb::from_u32(0x1F1F21));
        assert_eq!(d.palette.screen, Rgb::from_u32(0xE3F2FD));
        assert_eq!(d.palette.counter, Rgb::from_u32(0xFFFFFF));
    }

    #[test]
    fn test_over_limit_is_rejected_and_resigns_focus() {
        let current = "x".repeat(200);
        let d = should_change_text(&current, EditSpan::caret(200), "y");
        assert!(!d.accept);
        assert!(d.resign_focus);
        assert_eq!(d.remaining, -1);
        assert_eq!(d.display_remaining, 0);
    }

    #[test]
    fn test_line_break_is_rejected_regardless_of_span() {
        for span in [EditSpan::caret(0), EditSpan::caret(3), EditSpan::new(1, 2)] {
            let d = should_change_text("abc", span, "\n");
            assert!(!d.accept, "span {span:?} accepted a line break");
            assert!(d.resign_focus);
        }
    }

    #[test]
    fn test_replacement_that_shrinks_text_near_limit() {
        // 200 chars, replace 5 with 3: new length 198 — accepted.
        let current = "x".repeat(200);
        let d = should_change_text(&current, EditSpan::new(10, 5), "abc");
        assert!(d.accept);
        assert_eq!(d.remaining, 2);
    }

    #[test]
    fn test_deleting_everything_shows_placeholder() {
        let d = should_change_text("hi", EditSpan::new(0, 2), "");
        assert!(d.accept);
        assert!(d.placeholder_visible);
        assert_eq!(d.remaining, 200);
    }

    #[test]
    fn test_rejection_keeps_placeholder_of_current_text() {
        // Buffer is empty and the user hits Enter: rejected, and the
        // placeholder stays up because the buffer stays empty.
        let d = should_change_text("", EditSpan::caret(0), "\n");
        assert!(!d.accept);
        assert!(d.placeholder_visible);

        let d = should_change_text("abc", EditSpan::caret(3), "\n");
        assert!(!d.placeholder_visible);
    }

    #[test]
    fn test_decision_is_pure() {
        let a = should_change_text("hello", EditSpan::new(1, 2), "EY");
        let b = should_change_text("hello", EditSpan::new(1, 2), "EY");
        assert_eq!(a, b);
    }

    #[test]
    fn test_multibyte_characters_count_as_one() {
        let d = should_change_text("héllo", EditSpan::caret(5), "é");
        assert!(d.accept);
        assert_eq!(d.remaining, 194);
    }

    #[test]
    fn test_apply_edit_insert_replace_delete() {
        assert_eq!(apply_edit("", EditSpan::caret(0), "Hello"), "Hello");
        assert_eq!(apply_edit("Hello", EditSpan::new(0, 5), "Bye"), "Bye");
        assert_eq!(apply_edit("Hello", EditSpan::new(4, 1), ""), "Hell");
        assert_eq!(apply_edit("héllo", EditSpan::new(1, 1), "e"), "hello");
    }

    #[test]
    fn test_apply_edit_clamps_out_of_range_span() {
        assert_eq!(apply_edit("ab", EditSpan::new(10, 4), "c"), "abc");
    }
}
