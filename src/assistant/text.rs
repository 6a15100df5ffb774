//! Text folding for keyword matching

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lowercase and strip accents: "Réformé" -> "reforme"
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Folded words of a sentence, punctuation dropped
pub fn words(text: &str) -> Vec<String> {
    fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether any word starts with one of `stems`
pub fn has_stem(words: &[String], stems: &[&str]) -> bool {
    words
        .iter()
        .any(|w| stems.iter().any(|stem| w.starts_with(stem)))
}

/// Whether `phrase` (already folded) appears as a run of whole words
pub fn contains_phrase(words: &[String], phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() || needle.len() > words.len() {
        return false;
    }
    words.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            // tolerate plurals: "imprimantes mobiles" matches "imprimante mobile"
            .all(|(w, n)| w.as_str() == *n || w.strip_suffix('s') == Some(*n))
    })
}

/// The word following `keyword`, if any
pub fn word_after<'a>(words: &'a [String], keyword: &str) -> Option<&'a str> {
    words
        .iter()
        .position(|w| w == keyword)
        .and_then(|i| words.get(i + 1))
        .map(String::as_str)
}

/// Everything after `keyword`, joined with spaces
pub fn rest_after(words: &[String], keyword: &str) -> Option<String> {
    let i = words.iter().position(|w| w == keyword)?;
    let rest = words[i + 1..].join(" ");
    (!rest.is_empty()).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(fold("Réformé en Stock"), "reforme en stock");
        assert_eq!(fold("Écran"), "ecran");
    }

    #[test]
    fn test_words_and_phrases() {
        let w = words("Combien d'imprimantes mobiles à la DSI ?");
        assert_eq!(w, vec!["combien", "d", "imprimantes", "mobiles", "a", "la", "dsi"]);
        assert!(contains_phrase(&w, "imprimante mobile"));
        assert!(contains_phrase(&w, "dsi"));
        assert!(!contains_phrase(&w, "mini pc"));
        assert!(has_stem(&w, &["imprim"]));
    }

    #[test]
    fn test_keyword_positions() {
        let w = words("numéro de série ab12");
        assert_eq!(word_after(&w, "serie"), Some("ab12"));
        assert_eq!(word_after(&w, "ab12"), None);
        assert_eq!(rest_after(&words("le bureau salle 3"), "bureau").as_deref(), Some("salle 3"));
        assert_eq!(rest_after(&words("bureau"), "bureau"), None);
    }
}
