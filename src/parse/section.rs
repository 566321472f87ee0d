use super::classify::{Marker, Weekdays};
use super::normalize::Line;
use super::Error;

/// Where the menu section begins.
#[derive(Debug, Clone, Copy)]
pub enum StartMarker {
    /// A header line such as `Veckans meny`; the first match wins.
    Keyword(&'static [Marker]),
    /// The first line that names a weekday.
    FirstWeekday,
}

impl StartMarker {
    fn describe(&self) -> String {
        match self {
            Self::Keyword(markers) => markers
                .iter()
                .map(|m| format!("{:?}", m.keyword()))
                .collect::<Vec<_>>()
                .join(" | "),
            Self::FirstWeekday => "first weekday".to_string(),
        }
    }
}

/// Half-open range of line indices that the day segmenter may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
}

impl SectionBounds {
    pub fn slice<'a>(&self, lines: &'a [Line]) -> &'a [Line] {
        &lines[self.start..self.end]
    }
}

/// Finds the menu section in `lines`.
///
/// A start header stays inside the bounds. End markers are only looked for
/// after the start, and when none is found the section runs to the last line.
pub fn locate(
    lines: &[Line],
    start: &StartMarker,
    end_markers: &[Marker],
    weekdays: &Weekdays,
) -> Result<SectionBounds, Error> {
    let start_idx = match start {
        StartMarker::Keyword(markers) => lines
            .iter()
            .position(|line| markers.iter().any(|m| m.matches(line))),
        StartMarker::FirstWeekday => lines
            .iter()
            .position(|line| weekdays.recognize(line).is_some()),
    }
    .ok_or_else(|| Error::section_not_found(&start.describe()))?;

    let end_idx = lines[start_idx + 1..]
        .iter()
        .position(|line| end_markers.iter().any(|m| m.matches(line)))
        .map_or(lines.len(), |offset| start_idx + 1 + offset);

    log::debug!("menu section spans lines {start_idx}..{end_idx} of {}", lines.len());
    Ok(SectionBounds {
        start: start_idx,
        end: end_idx,
    })
}
