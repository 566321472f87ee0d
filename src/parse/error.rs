use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The start marker of the menu section is not on the page.
    SectionNotFound(String),
    /// The element that wraps the menu is not on the page.
    ContainerNotFound(String),
}

impl Error {
    pub fn section_not_found(marker: &str) -> Self {
        Self::SectionNotFound(marker.to_string())
    }

    pub fn container_not_found(selector: &str) -> Self {
        Self::ContainerNotFound(selector.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SectionNotFound(marker) => write!(f, "Menu section not found: {marker}"),
            Self::ContainerNotFound(sel) => write!(f, "Menu container not found: {sel}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
