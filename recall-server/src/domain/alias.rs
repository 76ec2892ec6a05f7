//! Alias normalization.

/// Normalized inputs shorter than this never resolve.
pub const MIN_ALIAS_LEN: usize = 2;

/// Normalize free text for alias lookup: trim surrounding whitespace and
/// lowercase.
///
/// # Examples
///
/// ```
/// use recall_server::domain::normalize;
///
/// assert_eq!(normalize("  Wan Chai "), "wan chai");
/// ```
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize(" Central "), "central");
        assert_eq!(normalize("\tTSIM SHA TSUI\n"), "tsim sha tsui");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(normalize("wan  chai"), "wan  chai");
    }

    #[test]
    fn blank_becomes_empty() {
        assert_eq!(normalize("   "), "");
    }
}
