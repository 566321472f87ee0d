mod classify;
mod error;
mod flatten;
mod normalize;
mod record;
mod section;
mod segment;
mod static_selector;

pub use classify::{DayRules, Marker, Weekdays};
pub use error::{Error, Result};
pub use flatten::Flattening;
pub use record::MenuDocument;
pub use section::StartMarker;
pub use static_selector::StaticSelector;

use scraper::Html;

use crate::config::Site;

/// Reads the weekly lunch menu of `site` out of its page.
pub fn parse_menu(html: &str, site: &Site) -> Result<MenuDocument> {
    let document = Html::parse_document(html);
    let root = match &site.container {
        Some(selector) => selector
            .first(document.root_element())
            .ok_or_else(|| Error::container_not_found(selector.source()))?,
        None => document.root_element(),
    };

    let lines = flatten::into_lines(flatten::flatten(root, site.flattening));
    log::debug!("{}: {} lines of text", site.name, lines.len());

    let bounds = section::locate(&lines, &site.start, site.end_markers, &site.days.weekdays)?;
    let record = segment::segment(&lines, bounds, &site.days);
    log::info!(
        "{}: {} dishes over {} days",
        site.name,
        record.dish_count(),
        record.days().count()
    );
    Ok(record.into_document(site.field))
}
