//! Location query string and navigation history
//!
//! The listing keeps its filters, sort and page in a query string the same way a
//! browser page keeps them in its URL. Every mutating action pushes a new entry;
//! back/forward walk the entries without touching the backend.

use std::fmt;

/// Ordered query parameters (`key=value&...`), keys unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string. A leading `?` is ignored, `+` decodes as a space,
    /// and for repeated keys the first occurrence wins.
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::new();
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        for part in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            let key = decode_component(key);
            if key.is_empty() || params.get(&key).is_some() {
                continue;
            }
            params.pairs.push((key, decode_component(value)));
        }

        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a key, keeping its position if it already exists
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.pairs.iter().enumerate() {
            if idx > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Stack of visited query strings with a cursor, like `history.pushState`
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<QueryParams>,
    cursor: usize,
}

impl History {
    pub fn new(initial: QueryParams) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &QueryParams {
        &self.entries[self.cursor]
    }

    /// Push a new entry after the cursor, dropping any forward entries
    pub fn push(&mut self, params: QueryParams) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(params);
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry in place, like `history.replaceState`
    pub fn replace_current(&mut self, params: QueryParams) {
        self.entries[self.cursor] = params;
    }

    /// Step back; `false` when already at the oldest entry
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward; `false` when already at the newest entry
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// 1-based index of the current entry
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
