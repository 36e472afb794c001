//! Route table for the site's pages.

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Products,
    ProductsSimple,
    Contact,
}

impl Page {
    /// Pages listed in the header and footer navigation, in display order.
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Products,
        Page::Contact,
    ];

    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Products,
        Page::ProductsSimple,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Products => "/products",
            Page::ProductsSimple => "/products-simple",
            Page::Contact => "/contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Segment under `navigation.` naming this page.
    pub fn nav_key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Products | Page::ProductsSimple => "products",
            Page::Contact => "contact",
        }
    }

    /// Dictionary key of the page name.
    pub fn title_key(self) -> String {
        format!("navigation.{}", self.nav_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Page::from_path("/careers"), None);
        assert_eq!(Page::from_path("/about/"), None);
    }

    #[test]
    fn test_nav_order_matches_header() {
        let keys: Vec<_> = Page::NAV.iter().map(|p| p.nav_key()).collect();
        assert_eq!(keys, vec!["home", "about", "services", "products", "contact"]);
    }

    #[test]
    fn test_simple_products_shares_products_title() {
        assert_eq!(Page::ProductsSimple.title_key(), "navigation.products");
    }
}
