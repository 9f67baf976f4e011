//! Small string helpers shared by the generator and optimizer

/// First `max` characters of `s` (char-boundary safe)
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_is_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if previous_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_alpha = true;
        } else {
            out.push(ch);
            previous_is_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("seo tools"), "Seo Tools");
        assert_eq!(title_case("PRIVACY-first"), "Privacy-First");
        assert_eq!(title_case("web3 apps"), "Web3 Apps");
    }
}
