// src/core/sanitize.rs

/// Collapse whitespace runs (including U+00A0) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Field labels on the site pad with `&nbsp;`. Drop them outright, then trim.
pub fn clean_label(s: &str) -> String {
    s.replace('\u{a0}', "").trim().to_string()
}

/// Word-initial capitals, everything else lower-cased.
/// A "word" starts after any non-letter, so "co-ordinates" → "Co-Ordinates".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_letter { out.extend(ch.to_lowercase()); }
            else { out.extend(ch.to_uppercase()); }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

/// Case-insensitive comparison after trimming.
pub fn same_label(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Short single-line preview of some text, for diagnostics.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    let flat = normalize_ws(s);
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Natural\n\t History\u{a0}Museum "), "Natural History Museum");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn clean_label_drops_nbsp() {
        assert_eq!(clean_label("City:\u{a0}"), "City:");
        assert_eq!(clean_label("\u{a0}Phone\u{a0}number "), "Phonenumber");
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("POSTAL ADDRESS"), "Postal Address");
        assert_eq!(title_case("head of collections"), "Head Of Collections");
        assert_eq!(title_case("co-ordinates 2nd"), "Co-Ordinates 2Nd");
    }

    #[test]
    fn same_label_ignores_case_and_padding() {
        assert!(same_label(" Address ", "ADDRESS"));
        assert!(!same_label("Address", "Postal address"));
    }

    #[test]
    fn excerpt_truncates_on_chars() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("ééééé ééééé", 3), "ééé…");
    }
}
