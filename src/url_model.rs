//! Request URL model.
//!
//! # Responsibilities
//! - Parse the raw `path?query` wire form into segments and parameters
//! - Serialize a structured Url back to its wire form
//!
//! # Design Decisions
//! - Empty path segments (leading, trailing, doubled slashes) are dropped
//! - A parameter without `=` has an empty value and is written back as its
//!   name alone; the page token relies on this
//! - Parameter order and repeated names are preserved

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A single query parameter. An empty value means "no value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameter {
    pub name: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A parameter carried by name only (`?name`).
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }
}

/// Path segments plus ordered query parameters. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Url {
    segments: Vec<String>,
    query: Vec<QueryParameter>,
}

impl Url {
    pub fn new(segments: Vec<String>, query: Vec<QueryParameter>) -> Self {
        Self { segments, query }
    }

    /// Parse a relative `path?query` string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let query = query
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((name, value)) => QueryParameter::new(name, value),
                        None => QueryParameter::flag(pair),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { segments, query }
    }

    /// Parse a link that may be absolute (`http://host/path?query`); only its
    /// path and query are kept. Anything else goes through [`Url::parse`].
    pub fn parse_link(raw: &str) -> Self {
        match ::url::Url::parse(raw) {
            Ok(absolute) if absolute.has_host() => match absolute.query() {
                Some(query) => Self::parse(&format!("{}?{}", absolute.path(), query)),
                None => Self::parse(absolute.path()),
            },
            _ => Self::parse(raw),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_parameters(&self) -> &[QueryParameter] {
        &self.query
    }

    pub fn first_query_parameter(&self) -> Option<&QueryParameter> {
        self.query.first()
    }

    /// First parameter with the given name.
    pub fn query_parameter(&self, name: &str) -> Option<&QueryParameter> {
        self.query.iter().find(|p| p.name == name)
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn with_query_parameter(mut self, parameter: QueryParameter) -> Self {
        self.query.push(parameter);
        self
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))?;
        for (i, param) in self.query.iter().enumerate() {
            f.write_str(if i == 0 { "?" } else { "&" })?;
            if param.value.is_empty() {
                write!(f, "{}", param.name)?;
            } else {
                write!(f, "{}={}", param.name, param.value)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Url::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_and_query() {
        let url = Url::parse("wicket/page/ignore/me?abc.4.5&a=3&b=3");
        assert_eq!(url.segments(), ["wicket", "page", "ignore", "me"]);
        assert_eq!(url.query_parameters().len(), 3);
        assert_eq!(url.query_parameters()[0], QueryParameter::flag("abc.4.5"));
        assert_eq!(url.query_parameters()[1], QueryParameter::new("a", "3"));
        assert_eq!(url.query_parameter("b").map(|p| p.value.as_str()), Some("3"));
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let url = Url::parse("/wicket//page/");
        assert_eq!(url.segments(), ["wicket", "page"]);
        assert!(url.query_parameters().is_empty());
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let url = Url::parse("x?a=b=c");
        assert_eq!(url.query_parameters()[0], QueryParameter::new("a", "b=c"));
    }

    #[test]
    fn test_repeated_names_keep_order() {
        let url = Url::parse("x?a=1&a=2&&b");
        let values: Vec<_> = url.query_parameters().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, ["1", "2", ""]);
    }

    #[test]
    fn test_display() {
        let url = Url::default()
            .with_segment("wicket")
            .with_segment("page")
            .with_query_parameter(QueryParameter::flag("15-ILinkListener-a-b"))
            .with_query_parameter(QueryParameter::new("a", "3"));
        assert_eq!(url.to_string(), "wicket/page?15-ILinkListener-a-b&a=3");

        assert_eq!(Url::parse("a/b").to_string(), "a/b");
        assert_eq!(Url::parse("a/b?").to_string(), "a/b");
    }

    #[test]
    fn test_parse_link() {
        let url = Url::parse_link("https://example.com:8443/wicket/page?4.5&a=3");
        assert_eq!(url, Url::parse("wicket/page?4.5&a=3"));

        let url = Url::parse_link("http://example.com/wicket/page");
        assert_eq!(url.segments(), ["wicket", "page"]);
        assert!(url.query_parameters().is_empty());

        assert_eq!(Url::parse_link("wicket/page?4"), Url::parse("wicket/page?4"));
    }

    #[test]
    fn test_reparse_is_stable() {
        let raw = "wicket/page?pm1.15.4&x=1&flag";
        let url: Url = raw.parse().unwrap();
        assert_eq!(url.to_string(), raw);
        assert_eq!(Url::parse(&url.to_string()), url);
    }
}
