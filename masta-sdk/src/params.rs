use std::fmt::Display;

/// Ordered key/value parameters for one request.
///
/// Encoded as the query string of `GET` requests and as an
/// `application/x-www-form-urlencoded` body otherwise. Keys may repeat
/// (`media_ids[]`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Params(Vec<(String, String)>);

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally.
    pub(crate) fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.0.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append unless `value` renders as the empty string.
    pub(crate) fn push_non_empty(&mut self, key: &str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.0.push((key.to_owned(), value));
        }
        self
    }

    /// Append `value` when present (and non-empty).
    pub(crate) fn push_opt<T: Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push_non_empty(key, value);
        }
        self
    }

    /// Append `key=true` when the flag is set; omit it otherwise.
    pub(crate) fn push_flag(&mut self, key: &str, flag: bool) -> &mut Self {
        if flag {
            self.push(key, "true");
        }
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of the first pair named `key`.
    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.pairs().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// True if any pair's key starts with `prefix`.
    #[cfg(test)]
    pub(crate) fn has_prefix(&self, prefix: &str) -> bool {
        self.pairs().any(|(k, _)| k.starts_with(prefix))
    }

    /// Urlencoded rendering (`a=1&b=2`).
    pub(crate) fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_are_omitted() {
        let mut p = Params::new();
        p.push_non_empty("type", "")
            .push_opt::<&str>("account_id", None)
            .push_flag("resolve", false)
            .push_flag("following", true)
            .push("q", "a b&c");
        assert_eq!(p.encode(), "following=true&q=a+b%26c");
    }

    #[test]
    fn repeated_keys_keep_order() {
        let p: Params = [("media_ids[]", "1"), ("media_ids[]", "2")].into_iter().collect();
        assert_eq!(p.encode(), "media_ids%5B%5D=1&media_ids%5B%5D=2");
        assert_eq!(p.get("media_ids[]"), Some("1"));
    }
}
