//! Locale-insensitive text normalization.
//!
//! Titles and queries are compared in a canonical form: Unicode canonical
//! decomposition (NFD) with the combining diacritical marks block
//! (`U+0300..=U+036F`) removed. The result is used for indexing and matching
//! only and is never shown to the user.

use unicode_normalization::UnicodeNormalization;

/// Returns `true` for characters in the combining diacritical marks block.
const fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Strips diacritics from `text`.
///
/// Idempotent: normalizing an already normalized string returns it unchanged.
/// The stripped block holds U+034F, which blocks canonical reordering, so the
/// remaining marks are put back into canonical order afterwards.
///
/// # Examples
///
/// ```
/// use docindex::pipeline::normalize;
///
/// assert_eq!(normalize("Crème brûlée"), "Creme brulee");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_diacritic(*c)).nfd().collect()
}
