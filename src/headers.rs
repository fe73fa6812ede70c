use indexmap::IndexMap;

/// Response headers in the order they were produced.
pub type Headers = IndexMap<&'static str, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(6)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: String) {
        self.headers.insert(name, value);
    }

    /// Joins `values` and pushes the result, skipping empty lists entirely.
    pub(crate) fn push_list(&mut self, name: &'static str, values: &[String], separator: &str) {
        if values.is_empty() {
            return;
        }
        self.push(name, values.join(separator));
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        self.headers.extend(other.headers);
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
