//! Name normalization for agent-identity comparisons.

use unicode_normalization::UnicodeNormalization;

/// Combining marks stripped after NFD decomposition. The basic combining
/// diacritics block covers every accent that occurs in the agent
/// population (Western European names).
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Lookup key for a name: trimmed, inner whitespace collapsed to single
/// spaces, lowercased, diacritics stripped. Never displayed.
///
/// Empty input (or whitespace-only input) yields the empty key, which
/// callers must treat as "no agent".
pub fn normalized_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        for ch in word.nfd() {
            if is_combining_mark(ch) {
                continue;
            }
            for lower in ch.to_lowercase() {
                key.push(lower);
            }
        }
    }
    key
}

/// Display form of a name: trimmed, whitespace collapsed, every word
/// capitalized. Diacritics are preserved; only the key strips them.
///
/// A letter is capitalized when it opens a word or follows a non-alphanumeric
/// character, so "anna-maria d'angelo" becomes "Anna-Maria D'Angelo".
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut prev_alphanumeric = false;
        for ch in word.chars() {
            if ch.is_alphabetic() && !prev_alphanumeric {
                for upper in ch.to_uppercase() {
                    out.push(upper);
                }
            } else {
                for lower in ch.to_lowercase() {
                    out.push(lower);
                }
            }
            prev_alphanumeric = ch.is_alphanumeric();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_collapses_case_and_whitespace() {
        assert_eq!(normalized_key("  Mario   ROSSI "), "mario rossi");
        assert_eq!(normalized_key("mario rossi"), "mario rossi");
    }

    #[test]
    fn key_strips_diacritics() {
        assert_eq!(normalized_key("  Nicolò   ROSSI "), "nicolo rossi");
        assert_eq!(normalized_key("Josè"), "jose");
        // same agent under accented and plain spelling
        assert_eq!(normalized_key("Èlena"), normalized_key("elena"));
    }

    #[test]
    fn key_of_empty_is_empty() {
        assert_eq!(normalized_key(""), "");
        assert_eq!(normalized_key("   "), "");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("MARIO  rossi"), "Mario Rossi");
        assert_eq!(title_case(" giulia bianchi "), "Giulia Bianchi");
    }

    #[test]
    fn title_case_keeps_diacritics() {
        assert_eq!(title_case("nicolò rossi"), "Nicolò Rossi");
    }

    #[test]
    fn title_case_handles_inner_separators() {
        assert_eq!(title_case("anna-maria d'angelo"), "Anna-Maria D'Angelo");
    }

    #[test]
    fn title_case_is_idempotent() {
        assert_eq!(title_case("Mario Rossi"), "Mario Rossi");
    }
}
