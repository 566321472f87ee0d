use std::{fmt::Display, ops::Deref, sync::OnceLock};

use regex::Regex;

/// Characters trimmed off both ends of every line.
const EDGE_CHARS: &[char] = &[' ', ',', ';', ':', '-'];

/// A cleaned, non-empty line of menu text. Only [`normalize`] builds one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line(String);

impl Line {
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cleans one raw fragment of page text into a [`Line`], or `None` if nothing is left.
///
/// The cleanup passes are repeated until the text stops changing, so
/// `normalize(&normalize(x)?)` always gives back the same line.
pub fn normalize(raw: &str) -> Option<Line> {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    if current.is_empty() {
        None
    } else {
        Some(Line(current))
    }
}

fn clean_once(s: &str) -> String {
    let s = collapse_whitespace(s);
    let s = tighten_punctuation(&s);
    let s = strip_prices(&s);
    let s = s.trim_matches(EDGE_CHARS);
    let s = s.strip_prefix(". ").unwrap_or(s);
    s.to_string()
}

/// Any run of whitespace, non-breaking spaces included, becomes a single space.
fn collapse_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ").into_owned()
}

/// `"Pasta , sallad"` -> `"Pasta, sallad"`
fn tighten_punctuation(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+([,.:;])").expect("regex should be valid"));
    re.replace_all(s, "$1").into_owned()
}

/// Drops standalone price tokens (`125`, `95:-`, `125kr`), along with a
/// currency word or `:-` that directly follows a number (`145 kr`, `95 :-`).
fn strip_prices(s: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut after_price = false;
    for token in s.split_whitespace() {
        if is_price_token(token) {
            after_price = true;
            continue;
        }
        if after_price && is_currency_token(token) {
            after_price = false;
            continue;
        }
        after_price = false;
        kept.push(token);
    }
    kept.join(" ")
}

fn is_price_token(token: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\d+(?::-|[:\-]|kr\.?|kronor|sek)?$").expect("regex should be valid")
    })
    .is_match(token)
}

fn is_currency_token(token: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?::-|kr\.?|kronor|sek)$").expect("regex should be valid")
    })
    .is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> Option<String> {
        normalize(s).map(Line::into_string)
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            norm("  Köttbullar\u{00A0}\u{00A0}med \n\t potatismos "),
            Some("Köttbullar med potatismos".to_string())
        );
    }

    #[test]
    fn test_trims_edge_punctuation() {
        assert_eq!(norm(" - Laxpaj, ;"), Some("Laxpaj".to_string()));
        assert_eq!(norm(": Fiskgratäng -"), Some("Fiskgratäng".to_string()));
    }

    #[test]
    fn test_strips_prices() {
        assert_eq!(norm("Köttbullar 125kr"), Some("Köttbullar".to_string()));
        assert_eq!(
            norm("Pasta Bolognese 145 kr"),
            Some("Pasta Bolognese".to_string())
        );
        assert_eq!(norm("Dagens soppa 95:-"), Some("Dagens soppa".to_string()));
        assert_eq!(norm("1: Pannbiff med lök"), Some("Pannbiff med lök".to_string()));
        assert_eq!(norm("Schnitzel 169 KRONOR"), Some("Schnitzel".to_string()));
    }

    #[test]
    fn test_keeps_digits_inside_words() {
        assert_eq!(norm("Sallad med 7-up dressing"), Some("Sallad med 7-up dressing".to_string()));
        assert_eq!(norm("Vitamin B12 bowl"), Some("Vitamin B12 bowl".to_string()));
    }

    #[test]
    fn test_bare_dash_after_number_is_kept() {
        assert_eq!(norm("Pasta 2 - 3 pers"), Some("Pasta - pers".to_string()));
        assert_eq!(norm("Lasagne 119 -"), Some("Lasagne".to_string()));
    }

    #[test]
    fn test_currency_word_without_number_is_kept() {
        assert_eq!(norm("Soppa kr"), Some("Soppa kr".to_string()));
    }

    #[test]
    fn test_removes_leading_join_artifact() {
        assert_eq!(norm(". Stekt strömming"), Some("Stekt strömming".to_string()));
        assert_eq!(norm("  . Stekt strömming"), Some("Stekt strömming".to_string()));
    }

    #[test]
    fn test_tightens_space_before_punctuation() {
        assert_eq!(
            norm("Kyckling , ris och sås ."),
            Some("Kyckling, ris och sås.".to_string())
        );
    }

    #[test]
    fn test_discards_empty_and_price_only() {
        assert_eq!(norm(""), None);
        assert_eq!(norm(" \u{00A0} "), None);
        assert_eq!(norm(" , - ; "), None);
        assert_eq!(norm("150 :"), None);
        assert_eq!(norm("125kr"), None);
        assert_eq!(norm("169 kronor"), None);
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "MÅNDAG",
            "Köttbullar 125kr",
            "-5 Soup",
            ". - 12 Pannkakor :-",
            "5 kr kr",
            "  Raggmunk\u{00A0}med fläsk ,  lingon  .",
            "Pizza 4 ostar",
            ". . Ärtsoppa",
            "150 :",
            "Veckans tips: Fisk 129:-",
        ];
        for raw in samples {
            let once = normalize(raw);
            let twice = once.as_ref().and_then(|line| normalize(line));
            assert_eq!(once, twice, "normalize should be idempotent for {raw:?}");
        }
    }
}
