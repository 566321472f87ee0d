use super::classify::{classify, DayRules, LineKind};
use super::normalize::Line;
use super::record::MenuRecord;
use super::section::SectionBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No weekday seen yet; dishes have no owner and are dropped.
    Seeking,
    InDay(usize),
    Done,
}

/// Walks the lines inside `bounds` and files each dish under the weekday above it.
///
/// Never fails: a menu with no dishes comes back as a record of empty days.
pub fn segment(lines: &[Line], bounds: SectionBounds, rules: &DayRules) -> MenuRecord {
    let (record, saw_day) = walk(lines, bounds, rules);
    if !saw_day {
        log::warn!("no weekday found in the menu section");
    }
    record
}

/// The record, and whether any weekday was recognized on the way.
fn walk(lines: &[Line], bounds: SectionBounds, rules: &DayRules) -> (MenuRecord, bool) {
    let mut record = if rules.list_every_day {
        MenuRecord::with_days(rules.weekdays.keys())
    } else {
        MenuRecord::new()
    };
    let mut state = State::Seeking;
    let mut saw_day = false;

    for line in bounds.slice(lines) {
        let kind = classify(line, rules);
        log::trace!("{kind:?}\t{line}");
        state = match (kind, state) {
            (_, State::Done) => break,
            (LineKind::Weekday(day), _) => {
                record.open_day(&rules.weekdays.key(day));
                saw_day = true;
                State::InDay(day)
            }
            (LineKind::Terminator, _) => State::Done,
            (LineKind::Noise, state) | (LineKind::Dish, state @ State::Seeking) => state,
            (LineKind::Dish, State::InDay(day)) => {
                record.push_dish(&rules.weekdays.key(day), line.clone().into_string());
                State::InDay(day)
            }
        };
        if state == State::Done {
            break;
        }
    }

    (record, saw_day)
}
