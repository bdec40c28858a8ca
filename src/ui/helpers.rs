//! Shared rendering utilities for search match highlighting.
//!
//! Highlighting works per character: a character is highlighted if any range
//! contains its index. Ranges are inclusive, may overlap, and are never merged
//! beforehand. Indices are character offsets, not byte offsets.

use crate::pipeline::HighlightRange;

/// Flags each character of `text` that falls inside any inclusive range.
///
/// Ranges past the end of `text` are ignored.
///
/// # Examples
///
/// ```
/// use docindex::ui::helpers::highlight_mask;
///
/// let mask = highlight_mask("Apple", &[(0, 1), (1, 2)]);
/// assert_eq!(mask, vec![true, true, true, false, false]);
/// assert_eq!(highlight_mask("Pie", &[]), vec![false, false, false]);
/// ```
#[must_use]
pub fn highlight_mask(text: &str, ranges: &[HighlightRange]) -> Vec<bool> {
    (0..text.chars().count())
        .map(|i| ranges.iter().any(|&(start, end)| i >= start && i <= end))
        .collect()
}

/// Splits `text` into runs of equally flagged characters.
///
/// `mask` entries beyond the text are ignored; characters beyond the mask are
/// not highlighted.
///
/// # Examples
///
/// ```
/// use docindex::ui::helpers::highlight_segments;
///
/// let segments = highlight_segments("Apple Pie", &[true, true, false, false, false, false, true]);
/// assert_eq!(
///     segments,
///     vec![("Ap".to_string(), true), ("ple ".to_string(), false), ("P".to_string(), true), ("ie".to_string(), false)]
/// );
/// ```
#[must_use]
pub fn highlight_segments(text: &str, mask: &[bool]) -> Vec<(String, bool)> {
    let mut segments: Vec<(String, bool)> = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let highlighted = mask.get(i).copied().unwrap_or(false);
        match segments.last_mut() {
            Some((run, flag)) if *flag == highlighted => run.push(c),
            _ => segments.push((c.to_string(), highlighted)),
        }
    }

    segments
}
