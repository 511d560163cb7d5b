use serde::{Deserialize, Serialize};

/// Top-level screens. Each owns an independent inventory copy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Catalog,
    Dashboard,
    Assistant,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Catalog, Page::Dashboard, Page::Assistant];

    pub fn title(self) -> &'static str {
        match self {
            Page::Catalog => "Inventory",
            Page::Dashboard => "Dashboard",
            Page::Assistant => "Assistant",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps() {
        assert_eq!(Page::Assistant.next(), Page::Catalog);
        assert_eq!(Page::Catalog.prev(), Page::Assistant);
    }

    #[test]
    fn deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            page: Page,
        }
        let parsed: Wrapper = toml::from_str("page = \"dashboard\"").unwrap();
        assert_eq!(parsed.page, Page::Dashboard);
    }
}
