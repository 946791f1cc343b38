//! Shout detection.

/// True when strictly more than half of the characters are upper-case.
pub fn is_mostly_upper(raw: &str) -> bool {
    let total = raw.chars().count();
    let upper = raw.chars().filter(|c| c.is_uppercase()).count();
    upper * 2 > total
}
