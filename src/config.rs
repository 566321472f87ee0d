//! The restaurant pages this tool knows how to read, and the run settings
//! taken from the environment.

use std::{env, path::PathBuf};

use crate::parse::{DayRules, Flattening, Marker, StartMarker, StaticSelector, Weekdays};

/// Everything that differs between two restaurant pages.
#[derive(Debug)]
pub struct Site {
    pub name: &'static str,
    pub url: &'static str,
    /// Only text under this element is read; the whole page if `None`.
    pub container: Option<StaticSelector>,
    pub flattening: Flattening,
    pub start: StartMarker,
    /// Headers that close the menu section.
    pub end_markers: &'static [Marker],
    pub days: DayRules,
    /// Name of the single top-level field of the output.
    pub field: &'static str,
    /// Where the record goes when `OUTPUT` is not set; stdout if `None`.
    pub default_output: Option<&'static str>,
}

pub static DANTORP: Site = Site {
    name: "dantorp",
    url: "https://dantorpsrestaurang.kvartersmenyn.se/",
    container: Some(StaticSelector::new("div.meny")),
    flattening: Flattening::TagAware,
    start: StartMarker::FirstWeekday,
    end_markers: &[],
    days: DayRules {
        weekdays: Weekdays::exact(&["MÅNDAG", "TISDAG", "ONSDAG", "TORSDAG", "FREDAG"]),
        terminators: &[Marker::Prefix("VECKANS TIPS")],
        placeholders: &[],
        list_every_day: true,
    },
    field: "lunchmeny",
    default_output: None,
};

pub static GOLFRESTAURANG: Site = Site {
    name: "golfrestaurang",
    url: "https://golfrestaurang.com/our-store.html",
    container: None,
    flattening: Flattening::TextFlow,
    start: StartMarker::FirstWeekday,
    end_markers: &[
        Marker::Prefix("pasta"),
        Marker::Prefix("vegetarisk"),
        Marker::Prefix("husets hamburgare"),
    ],
    days: DayRules {
        weekdays: Weekdays::prefixed(&[
            "Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag", "Söndag",
        ]),
        terminators: &[],
        placeholders: &[],
        list_every_day: false,
    },
    field: "veckans_meny",
    default_output: Some("veckans_meny.json"),
};

pub static TMBAGARSTUGA: Site = Site {
    name: "tmbagarstuga",
    url: "https://www.tmbagarstuga.se/Menus",
    container: None,
    flattening: Flattening::TextFlow,
    start: StartMarker::Keyword(&[Marker::Exact("veckans meny")]),
    end_markers: &[Marker::Exact("veckans salladsmeny")],
    days: DayRules {
        weekdays: Weekdays::exact(&["måndag", "tisdag", "onsdag", "torsdag", "fredag"]),
        terminators: &[],
        placeholders: &[
            "omelett",
            "grillad macka med",
            "stenugnsbakad paj med",
            "stenugnsbakad paj",
            "omelett med",
        ],
        list_every_day: true,
    },
    field: "veckans_meny",
    default_output: None,
};

pub static SITES: [&Site; 3] = [&DANTORP, &GOLFRESTAURANG, &TMBAGARSTUGA];

impl Site {
    pub fn by_name(name: &str) -> Option<&'static Self> {
        SITES
            .iter()
            .copied()
            .find(|site| site.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Where the finished record is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

/// One run: which site, where the page comes from, where the record goes.
#[derive(Debug)]
pub struct Settings {
    pub site: &'static Site,
    /// A saved copy of the page; fetched from `site.url` if `None`.
    pub input: Option<PathBuf>,
    pub output: Output,
}

impl Settings {
    /// Reads `SITE`, `INPUT` and `OUTPUT` from the environment.
    pub fn from_env() -> crate::Result<Self> {
        let site = env::var("SITE").map_err(|_| {
            crate::Error::Config(format!("env var SITE not set, expected one of {}", known()))
        })?;
        Self::new(
            &site,
            env::var_os("INPUT").map(PathBuf::from),
            env::var("OUTPUT").ok().as_deref(),
        )
    }

    pub fn new(site: &str, input: Option<PathBuf>, output: Option<&str>) -> crate::Result<Self> {
        let site = Site::by_name(site).ok_or_else(|| {
            crate::Error::Config(format!("unknown site {site:?}, expected one of {}", known()))
        })?;
        let output = match output.or(site.default_output) {
            None | Some("-") => Output::Stdout,
            Some(path) => Output::File(PathBuf::from(path)),
        };
        Ok(Self {
            site,
            input,
            output,
        })
    }
}

fn known() -> String {
    SITES.map(|site| site.name).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_by_name() {
        assert_eq!(Site::by_name("dantorp").map(|s| s.field), Some("lunchmeny"));
        assert_eq!(
            Site::by_name(" TMBagarstuga ").map(|s| s.name),
            Some("tmbagarstuga")
        );
        assert!(Site::by_name("mcdonalds").is_none());
    }

    #[test]
    fn test_output_defaults() {
        let settings = Settings::new("golfrestaurang", None, None).unwrap();
        assert_eq!(
            settings.output,
            Output::File(PathBuf::from("veckans_meny.json"))
        );

        let settings = Settings::new("golfrestaurang", None, Some("-")).unwrap();
        assert_eq!(settings.output, Output::Stdout);

        let settings = Settings::new("dantorp", None, None).unwrap();
        assert_eq!(settings.output, Output::Stdout);

        let settings = Settings::new("dantorp", None, Some("meny.json")).unwrap();
        assert_eq!(settings.output, Output::File(PathBuf::from("meny.json")));
    }

    #[test]
    fn test_unknown_site() {
        let err = Settings::new("nowhere", None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config error: unknown site \"nowhere\", expected one of dantorp, golfrestaurang, tmbagarstuga"
        );
    }
}
