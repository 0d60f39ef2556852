use crate::domain::navigation::{NavEntry, navigation};
use crate::domain::site::{
    FAVICON_HREF, FAVICON_TYPE, HOME_HREF, PageTitle, SITE_LANG, STYLESHEET_HREF,
};
use crate::presentation::views::{
    BrandView, LayoutChrome, NavigationLinkView, NavigationView, PageMetaView,
};

const BRAND_PRIMARY: &str = "Meninas";
const BRAND_SECONDARY: &str = "grid";

/// Builds the shared layout chrome (brand, navigation, head metadata).
#[derive(Clone, Debug, Default)]
pub struct ChromeService;

impl ChromeService {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, title: &PageTitle) -> LayoutChrome {
        let entries = navigation()
            .entries()
            .iter()
            .map(map_navigation_item)
            .collect();

        LayoutChrome {
            brand: BrandView {
                primary: BRAND_PRIMARY.to_string(),
                secondary: BRAND_SECONDARY.to_string(),
                href: HOME_HREF.to_string(),
            },
            navigation: NavigationView { entries },
            meta: PageMetaView {
                lang: SITE_LANG.to_string(),
                title: title.document_title(),
                stylesheet_href: STYLESHEET_HREF.to_string(),
                favicon_href: FAVICON_HREF.to_string(),
                favicon_type: FAVICON_TYPE.to_string(),
            },
        }
    }
}

fn map_navigation_item(item: &NavEntry) -> NavigationLinkView {
    NavigationLinkView {
        label: item.label.to_string(),
        href: item.path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_carries_fixed_assets() {
        let chrome = ChromeService::new().load(&PageTitle::default());
        assert_eq!(chrome.meta.lang, "pt-br");
        assert_eq!(chrome.meta.stylesheet_href, "/style.css");
        assert_eq!(chrome.meta.favicon_href, "/img/favicon-32x32.png");
        assert_eq!(chrome.brand.href, "/");
        assert_eq!(chrome.meta.title, "Meninas.grid - ");
    }

    #[test]
    fn load_sets_document_title() {
        let chrome = ChromeService::new().load(&PageTitle::new("Contatos"));
        assert_eq!(chrome.meta.title, "Meninas.grid - Contatos");
        assert_eq!(chrome.navigation.entries.len(), 3);
    }
}
