use super::consts::MAX_STRING_SIZE;

fn is_legal(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' '
}

/// Reduces a short name to the characters the format accepts.
///
/// Letters are upper-cased; everything other than `A-Z`, `0-9` and space is
/// dropped. The result is at most 255 bytes long.
pub fn sanitize_short_name(name: &str) -> String {
    let legal = || {
        name.chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|&c| is_legal(c))
    };

    // the length byte goes out before the name, so count first
    let count = legal().count().min(MAX_STRING_SIZE);

    let mut out = String::with_capacity(count);
    out.extend(legal().take(count));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn uppercases_and_drops_illegal_characters() {
        assert_eq!(sanitize_short_name("Trailhead"), "TRAILHEAD");
        assert_eq!(sanitize_short_name("Mt. St-Helens #2"), "MT STHELENS 2");
        assert_eq!(sanitize_short_name("Café\tbar"), "CAFBAR");
        assert_eq!(sanitize_short_name(""), "");
    }

    #[test]
    fn truncates_to_255_characters() {
        let long = "x".repeat(400);
        assert_eq!(sanitize_short_name(&long), "X".repeat(255));
    }

    proptest! {
        #[test]
        fn is_idempotent(s in "\\PC{0,300}") {
            let once = sanitize_short_name(&s);
            prop_assert_eq!(sanitize_short_name(&once), once);
        }

        #[test]
        fn emits_only_legal_characters(s in "\\PC{0,300}") {
            let sanitized = sanitize_short_name(&s);
            prop_assert!(sanitized.len() <= MAX_STRING_SIZE);
            prop_assert!(sanitized
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' '));
        }
    }
}
