//! Route identity and link classification

use std::fmt;

/// Path plus optional query identifying a route
///
/// Fragments never take part in route identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId {
    path: String,
    query: Option<String>,
}

impl RouteId {
    /// Parse an internal href such as `/en/blog?page=2#top`
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split_once('#').map_or(href, |(head, _)| head);
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, (!query.is_empty()).then(|| query.to_string())),
            None => (without_fragment, None),
        };

        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
        }
    }

    /// Route path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string without the leading `?`
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{query}", self.path),
            None => f.write_str(&self.path),
        }
    }
}

impl From<&str> for RouteId {
    fn from(href: &str) -> Self {
        Self::parse(href)
    }
}

impl From<String> for RouteId {
    fn from(href: String) -> Self {
        Self::parse(&href)
    }
}

/// Whether `href` points inside the site: one leading `/`, not `//`
pub fn is_internal_href(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let route = RouteId::parse("/en/blog?page=2#comments");
        assert_eq!(route.path(), "/en/blog");
        assert_eq!(route.query(), Some("page=2"));
        assert_eq!(route.to_string(), "/en/blog?page=2");
    }

    #[test]
    fn test_fragment_is_ignored() {
        assert_eq!(RouteId::parse("/en#top"), RouteId::parse("/en"));
        assert_eq!(RouteId::parse("/en?#top"), RouteId::parse("/en"));
        assert_ne!(RouteId::parse("/en?a=1"), RouteId::parse("/en?a=2"));
        assert_eq!(RouteId::parse("#top").path(), "/");
    }

    #[test]
    fn test_internal_hrefs() {
        assert!(is_internal_href("/en/blog"));
        assert!(is_internal_href("/"));
        assert!(!is_internal_href("//cdn.example.com/x.js"));
        assert!(!is_internal_href("https://example.com"));
        assert!(!is_internal_href("mailto:hi@example.com"));
        assert!(!is_internal_href("#section"));
        assert!(!is_internal_href("blog"));
    }
}
