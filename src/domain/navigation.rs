use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct Navigation {
    entries: Vec<NavEntry>,
}

impl Navigation {
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// The three site-wide links shown on every page, in display order.
    pub fn site() -> Self {
        Self {
            entries: vec![
                NavEntry {
                    label: "Início",
                    path: "/",
                },
                NavEntry {
                    label: "Contatos",
                    path: "/contacts",
                },
                NavEntry {
                    label: "Sobre",
                    path: "/about",
                },
            ],
        }
    }
}

static NAVIGATION: OnceLock<Navigation> = OnceLock::new();

pub fn navigation() -> &'static Navigation {
    NAVIGATION.get_or_init(Navigation::site)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}
