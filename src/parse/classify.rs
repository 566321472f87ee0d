use std::sync::OnceLock;

use regex::Regex;

/// A keyword that marks a section boundary. Matching ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The whole line equals the keyword.
    Exact(&'static str),
    /// The line starts with the keyword.
    Prefix(&'static str),
}

impl Marker {
    pub fn matches(&self, line: &str) -> bool {
        let line = line.to_lowercase();
        match self {
            Self::Exact(word) => line == word.to_lowercase(),
            Self::Prefix(word) => line.starts_with(&word.to_lowercase()),
        }
    }

    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Exact(word) | Self::Prefix(word) => word,
        }
    }
}

/// The fixed day-name vocabulary of one site, in menu order.
#[derive(Debug, Clone, Copy)]
pub struct Weekdays {
    names: &'static [&'static str],
    by_prefix: bool,
}

impl Weekdays {
    /// Days must be the whole line.
    pub const fn exact(names: &'static [&'static str]) -> Self {
        Self {
            names,
            by_prefix: false,
        }
    }

    /// Days may open a line, as in `Måndag 12/5`.
    pub const fn prefixed(names: &'static [&'static str]) -> Self {
        Self {
            names,
            by_prefix: true,
        }
    }

    /// Lower-cased canonical names; these become the record keys.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.names.iter().map(|name| name.to_lowercase())
    }

    pub fn key(&self, day: usize) -> String {
        self.names[day].to_lowercase()
    }

    /// Index of the day `line` names, if any.
    pub fn recognize(&self, line: &str) -> Option<usize> {
        let line = line.to_lowercase();
        self.names.iter().position(|name| {
            let name = name.to_lowercase();
            if self.by_prefix {
                line.strip_prefix(name.as_str())
                    .is_some_and(|rest| !rest.starts_with(char::is_alphanumeric))
            } else {
                line == name
            }
        })
    }
}

/// Everything the day segmenter needs to know about a site.
#[derive(Debug, Clone, Copy)]
pub struct DayRules {
    pub weekdays: Weekdays,
    /// Secondary headers that end the menu early.
    pub terminators: &'static [Marker],
    /// Stubs of dishes whose description failed to render.
    pub placeholders: &'static [&'static str],
    /// List every vocabulary day in the record, even if no dishes were found.
    pub list_every_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Weekday(usize),
    Terminator,
    Noise,
    Dish,
}

/// Classifies one line. Weekdays win over terminators, terminators over noise,
/// and noise over dishes.
pub fn classify(line: &str, rules: &DayRules) -> LineKind {
    if let Some(day) = is_weekday(line, &rules.weekdays) {
        LineKind::Weekday(day)
    } else if is_terminator(line, rules.terminators) {
        LineKind::Terminator
    } else if is_price_line(line) || is_placeholder(line, rules.placeholders) {
        LineKind::Noise
    } else {
        LineKind::Dish
    }
}

/// Index into the vocabulary of the day `line` names, or `None` if it is not a weekday.
pub fn is_weekday(line: &str, weekdays: &Weekdays) -> Option<usize> {
    weekdays.recognize(line)
}

pub fn is_terminator(line: &str, terminators: &[Marker]) -> bool {
    terminators.iter().any(|marker| marker.matches(line))
}

/// A line that is nothing but a price: `125kr`, `169 kronor`, `95:-`.
pub fn is_price_line(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*\d+\s*(?:kr\.?|kronor|sek|:-)\s*$").expect("regex should be valid")
    })
    .is_match(line)
}

pub fn is_placeholder(line: &str, placeholders: &[&str]) -> bool {
    let line = line.to_lowercase();
    placeholders
        .iter()
        .any(|stub| stub.to_lowercase() == line)
}
