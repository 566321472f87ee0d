use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

/// A CSS selector kept as a constant in site configuration and compiled on first use.
#[derive(Debug)]
pub struct StaticSelector {
    cell: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub const fn new(source: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }

    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// The first element under `root` that matches.
    pub fn first<'a>(&self, root: ElementRef<'a>) -> Option<ElementRef<'a>> {
        root.select(self).next()
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.cell
            .get_or_init(|| match Selector::parse(self.source) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.source, e),
            })
    }
}
