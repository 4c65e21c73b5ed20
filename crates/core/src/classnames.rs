//! Class-name merging for component styles.
//!
//! Fragments are joined in order and exact duplicate tokens are dropped.
//! Conflicting utilities (`px-2` vs `px-4`) are both kept.

/// Merges whitespace-separated class fragments into a single class string.
///
/// Empty fragments are skipped; the first occurrence of a token wins.
pub fn merge<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens: Vec<String> = Vec::new();

    for fragment in fragments {
        for token in fragment.as_ref().split_whitespace() {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
    }

    tokens.join(" ")
}
