//! Case and accent insensitive label comparison.
//!
//! Scenario titles on the dashboard and `cenario` labels in the metrics
//! dataset are maintained separately and drift in accenting and casing.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Lower-case, decompose (NFD) and drop combining diacritical marks.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

/// True when both labels normalize to the same string.
pub fn same_label(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
