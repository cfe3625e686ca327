/// street abbreviation expansions, applied as literal substring
/// replacements (not word-boundary aware).
const ABBREVIATIONS: [(&str, &str); 8] = [
    (" St.", " Street"),
    (" Rd.", " Road"),
    (" Ave.", " Avenue"),
    (" Blvd.", " Boulevard"),
    (" Dr.", " Drive"),
    (" Ln.", " Lane"),
    (" Ct.", " Court"),
    (" Pl.", " Place"),
];

/// canonicalizes a free-form address for geocoding: collapses repeated
/// separators, strips "Unit-123 Main St" style prefixes at the first
/// hyphen (replacing slashes with spaces in the remainder), and expands
/// common street abbreviations. total over all inputs; junk in, junk out,
/// never an error.
pub fn normalize_address(raw: &str) -> String {
    let mut address = raw.trim().to_string();
    address = collapse(&address, "  ", " ");
    address = collapse(&address, ",,", ",");
    if let Some((_, after_hyphen)) = address.split_once('-') {
        address = after_hyphen.trim().replace('/', " ");
    }
    for (abbreviation, expansion) in ABBREVIATIONS.iter() {
        address = address.replace(abbreviation, expansion);
    }
    address = collapse(&address, "  ", " ");
    address.trim().to_string()
}

fn collapse(text: &str, pattern: &str, replacement: &str) -> String {
    let mut out = text.to_string();
    while out.contains(pattern) {
        out = out.replace(pattern, replacement);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::normalize_address;

    #[test]
    fn collapses_repeated_spaces_and_commas() {
        let result = normalize_address("12  Oak   Grove,,  Raleigh,,,NC");
        assert_eq!(result, "12 Oak Grove, Raleigh,NC");
        assert!(!result.contains("  "));
        assert!(!result.contains(",,"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_address("  5 Elm Court \t"), "5 Elm Court");
    }

    #[test]
    fn keeps_only_the_text_after_the_first_hyphen() {
        assert_eq!(
            normalize_address("Unit-123 Main St, Durham"),
            normalize_address("123 Main St, Durham")
        );
    }

    #[test]
    fn replaces_slashes_after_a_hyphen_split() {
        assert_eq!(
            normalize_address("Suite 4-100 1/2 Fayetteville St."),
            "100 1 2 Fayetteville Street"
        );
    }

    #[test]
    fn slashes_survive_when_no_hyphen_is_present() {
        assert_eq!(
            normalize_address("100 1/2 Fayetteville St."),
            "100 1/2 Fayetteville Street"
        );
    }

    #[test]
    fn expands_street_abbreviations() {
        assert_eq!(
            normalize_address("21 Birch Rd. near 4 Pine Blvd."),
            "21 Birch Road near 4 Pine Boulevard"
        );
    }

    #[test]
    fn expansion_is_literal_not_word_boundary_aware() {
        // " St." expands wherever it occurs as a substring
        assert_eq!(normalize_address("1 Main St. Apt 2"), "1 Main Street Apt 2");
    }

    #[test]
    fn is_idempotent_on_normalized_output() {
        let inputs = [
            "12  Oak   Grove,,  Raleigh, NC",
            "Unit-123 Main St, Durham",
            "21 Birch Rd.",
            "",
            "   ",
        ];
        for input in inputs {
            let once = normalize_address(input);
            let twice = normalize_address(&once);
            assert_eq!(once, twice, "normalizing '{input}' twice changed it");
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_address(""), "");
        assert_eq!(normalize_address("   "), "");
    }
}
