//! Free-text name splitting
//!
//! Splits single-string names into first- and last-name parts:
//!
//! ```text
//! single-string name                 first                   last
//! "Eric Meyer"                    -> "Eric"                  "Meyer"
//! "Meyer, Anne"                   -> "Anne"                  "Meyer"
//! "Meyer; Anne"                   -> "Anne"                  "Meyer"
//! "Tim Schulz-Mueller"            -> "Tim"                   "Schulz-Mueller"
//! "Nadine Ulla Blumenfeld"        -> "Nadine Ulla"           "Blumenfeld"
//! "Khaled Saad Mohamed Abdelalim" -> "Khaled Saad Mohamed"   "Abdelalim"
//! "Meyer"                         -> ""                      "Meyer"
//! ```
//!
//! Names containing `,` or `;` are read as `"last, first"`. Only the first and
//! the final segment are used: `"Meyer, Anne, Eva"` yields `("Eva", "Meyer")`.
//! Empty segments count, so a dangling separator still selects this form:
//! `"Meyer,"` yields `("", "Meyer")` rather than keeping `"Meyer,"` as a
//! single token.

const SEGMENT_SEPARATORS: [char; 2] = [',', ';'];

/// Splits `raw` into `(first, last)` starting from empty parts
///
/// An empty input yields two empty strings.
///
/// # Examples
///
/// ```rust
/// use domain_customer::name::split_name;
///
/// assert_eq!(split_name("Meyer, Anne"), ("Anne".to_string(), "Meyer".to_string()));
/// assert_eq!(split_name("Nadine Ulla Blumenfeld"), ("Nadine Ulla".to_string(), "Blumenfeld".to_string()));
/// ```
pub fn split_name(raw: &str) -> (String, String) {
    split_name_with(raw, "", "")
}

/// Splits `raw` into `(first, last)`, seeded with the current name parts
///
/// The seed is returned unchanged when `raw` is empty. In the whitespace
/// form the seed acts as the initial carry: a non-empty `last` seed is moved
/// into the first name ahead of the tokens of `raw`, and a `first` seed is
/// kept when `raw` holds a single token.
pub fn split_name_with(raw: &str, first: &str, last: &str) -> (String, String) {
    if raw.is_empty() {
        return (first.to_string(), last.to_string());
    }

    let segments: Vec<&str> = raw.split(SEGMENT_SEPARATORS).collect();
    if let [head, .., tail] = segments.as_slice() {
        return (tail.trim().to_string(), head.trim().to_string());
    }

    let mut first = first.to_string();
    let mut last = last.to_string();
    for token in raw.split_whitespace() {
        if !last.is_empty() {
            if !first.is_empty() {
                first.push(' ');
            }
            first.push_str(&last);
        }
        last = token.to_string();
    }
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(first: &str, last: &str) -> (String, String) {
        (first.to_string(), last.to_string())
    }

    #[test]
    fn test_split_first_last() {
        assert_eq!(split_name("Eric Meyer"), pair("Eric", "Meyer"));
        assert_eq!(split_name("Tim Schulz-Mueller"), pair("Tim", "Schulz-Mueller"));
        assert_eq!(split_name("Nadine-Ulla Blumenfeld"), pair("Nadine-Ulla", "Blumenfeld"));
    }

    #[test]
    fn test_split_multiple_first_names() {
        assert_eq!(split_name("Nadine Ulla Blumenfeld"), pair("Nadine Ulla", "Blumenfeld"));
        assert_eq!(
            split_name("Khaled Saad Mohamed Abdelalim"),
            pair("Khaled Saad Mohamed", "Abdelalim")
        );
    }

    #[test]
    fn test_split_separated() {
        assert_eq!(split_name("Meyer, Anne"), pair("Anne", "Meyer"));
        assert_eq!(split_name("Meyer; Anne"), pair("Anne", "Meyer"));
        assert_eq!(split_name("  Meyer ,Anne  "), pair("Anne", "Meyer"));
    }

    #[test]
    fn test_split_trailing_separator_keeps_empty_segment() {
        // trailing empty segments are not dropped: "Meyer," is never a
        // single-token last name
        assert_eq!(split_name("Meyer,"), pair("", "Meyer"));
        assert_eq!(split_name("Meyer;;"), pair("", "Meyer"));
        assert_eq!(split_name(", Anne"), pair("Anne", ""));
    }

    #[test]
    fn test_split_three_segments_drops_middle() {
        assert_eq!(split_name("Meyer, Anne, Eva"), pair("Eva", "Meyer"));
    }

    #[test]
    fn test_split_single_token() {
        assert_eq!(split_name("Meyer"), pair("", "Meyer"));
    }

    #[test]
    fn test_split_empty_returns_seed() {
        assert_eq!(split_name(""), pair("", ""));
        assert_eq!(split_name_with("", "Eric", "Meyer"), pair("Eric", "Meyer"));
    }

    #[test]
    fn test_split_whitespace_only_returns_seed() {
        assert_eq!(split_name_with("   ", "Eric", "Meyer"), pair("Eric", "Meyer"));
    }

    #[test]
    fn test_split_seeded_carry() {
        assert_eq!(split_name_with("Meyer", "Eric", ""), pair("Eric", "Meyer"));
        assert_eq!(split_name_with("Anne Bayer", "", "Meyer"), pair("Meyer Anne", "Bayer"));
    }

    #[test]
    fn test_split_separator_ignores_seed() {
        assert_eq!(split_name_with("Bayer, Anne", "Eric", "Meyer"), pair("Anne", "Bayer"));
    }
}
