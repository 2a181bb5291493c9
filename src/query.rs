//! Raw query-parameter multi-map
//!
//! A [`RawQuery`] holds query parameters exactly as they appear in a URL
//! query string after a single decode pass: percent sequences decoded once,
//! `+` decoded to space, and un-decodable percent sequences passed through
//! unchanged. Duplicate keys are retained in order; resolution policy
//! (first occurrence wins) belongs to the filter resolver, not this type.
//!
//! Construction from a query string goes through `url::form_urlencoded`,
//! the standard decoder. Callers that already hold decoded pairs (e.g. from
//! a web framework) can use [`RawQuery::from_pairs`] instead.

use url::form_urlencoded;

/// An ordered multi-map of decoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pairs: Vec<(String, String)>,
}

impl RawQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw query string into an ordered multi-map.
    ///
    /// A leading `?` is tolerated. This performs exactly one decode pass;
    /// double-encoded content (`%2520`) decodes to its once-decoded form
    /// (`%20`), and malformed percent sequences (`%2`, `%ZZ`) come through
    /// as raw text rather than failing.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// Build a query from already-decoded key/value pairs, preserving order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Append a single decoded pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// The first value recorded for `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of recorded pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over all pairs in original order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
