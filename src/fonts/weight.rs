//! Font weight inference from filename keywords.

/// Weight used when no keyword matches.
pub const DEFAULT_WEIGHT: u16 = 400;

/// Keyword table in match priority order.
///
/// Matching is case-sensitive substring containment, first match wins.
/// Longer modifiers are listed before their suffixes (`ExtraLight` before
/// `Light`, `SemiBold` and `ExtraBold` before `Bold`) so that e.g.
/// `Roboto-ExtraBold` resolves to 800 rather than 700.
const WEIGHT_KEYWORDS: [(&str, u16); 9] = [
    ("Thin", 100),
    ("ExtraLight", 200),
    ("Light", 300),
    ("Regular", 400),
    ("Medium", 500),
    ("SemiBold", 600),
    ("ExtraBold", 800),
    ("Bold", 700),
    ("Black", 900),
];

/// Infer the numeric CSS font-weight from a basename-without-extension.
///
/// Returns [`DEFAULT_WEIGHT`] (400) when no keyword is present.
pub fn infer_weight(basename: &str) -> u16 {
    WEIGHT_KEYWORDS
        .iter()
        .find(|(keyword, _)| basename.contains(keyword))
        .map(|&(_, weight)| weight)
        .unwrap_or(DEFAULT_WEIGHT)
}
