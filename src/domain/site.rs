//! Fixed site identity: name, language and shared asset locations.

pub const SITE_NAME: &str = "Meninas.grid";
pub const SITE_LANG: &str = "pt-br";
pub const TITLE_SEPARATOR: &str = " - ";
pub const HOME_HREF: &str = "/";
pub const STYLESHEET_HREF: &str = "/style.css";
pub const FAVICON_HREF: &str = "/img/favicon-32x32.png";
pub const FAVICON_TYPE: &str = "image/x-icon";

/// Title of a single page, placed after the site name in `<title>`.
///
/// No validation is applied; an absent title behaves like an empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full document title: `"Meninas.grid - " + page title`.
    pub fn document_title(&self) -> String {
        format!("{SITE_NAME}{TITLE_SEPARATOR}{}", self.0)
    }
}

impl From<Option<String>> for PageTitle {
    fn from(value: Option<String>) -> Self {
        Self(value.unwrap_or_default())
    }
}

impl From<&str> for PageTitle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_title_prefixes_site_name() {
        assert_eq!(
            PageTitle::new("Sobre").document_title(),
            "Meninas.grid - Sobre"
        );
    }

    #[test]
    fn empty_title_keeps_separator() {
        assert_eq!(PageTitle::default().document_title(), "Meninas.grid - ");
    }

    #[test]
    fn missing_title_is_empty() {
        let title = PageTitle::from(None);
        assert_eq!(title.as_str(), "");
        assert_eq!(title.document_title(), "Meninas.grid - ");
    }

    #[test]
    fn title_is_not_trimmed() {
        assert_eq!(
            PageTitle::from("  Contatos ").document_title(),
            "Meninas.grid -   Contatos "
        );
    }
}
