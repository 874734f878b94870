//! Order-preserving, case-insensitive header store.
//!
//! # Design
//! `HeaderMap` keeps entries in insertion order under their originally
//! supplied casing, alongside a lowercased-name index so lookup is O(1)
//! instead of a linear scan. A name exists under exactly one stored casing at
//! any time: replacing a header through a case-insensitive match keeps the
//! casing already in the map, not the caller's.
//!
//! The map itself applies no name validation; that is the `Validator`'s job
//! and happens in the message constructors and `with_*` methods.

use std::collections::HashMap;

/// One stored header: the original-cased name and its ordered values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    values: Vec<String>,
}

/// Header value(s) for insertion, normalized to a list.
///
/// Accepts a single string or a list of strings, mirroring the
/// "string or string[]" contract of `with_header`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderValues(Vec<String>);

impl HeaderValues {
    fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        HeaderValues(vec![value.to_string()])
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        HeaderValues(vec![value])
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        HeaderValues(values)
    }
}

impl From<&[&str]> for HeaderValues {
    fn from(values: &[&str]) -> Self {
        HeaderValues(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for HeaderValues {
    fn from(values: [&str; N]) -> Self {
        HeaderValues(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Case-insensitive, multi-valued header collection that preserves insertion
/// order and the casing each name was first stored under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<Entry>,
    /// Lowercased name to position in `entries`.
    index: HashMap<String, usize>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(name, value)` pairs, keeping first-seen casing and
    /// appending values for names that repeat.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<HeaderValues>,
    {
        let mut map = Self::new();
        for (name, values) in pairs {
            map.append(name.into(), values.into());
        }
        map
    }

    /// True iff a case-insensitive match for `name` holds at least one
    /// value. An entry stored with an empty value list counts as absent.
    pub fn contains(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Values stored for `name`, matched case-insensitively. Empty slice if
    /// the header is absent.
    pub fn get(&self, name: &str) -> &[String] {
        match self.index.get(&name.to_ascii_lowercase()) {
            Some(&pos) => &self.entries[pos].values,
            None => &[],
        }
    }

    /// Values for `name` joined with `,`, or the empty string if absent.
    pub fn get_line(&self, name: &str) -> String {
        self.get(name).join(",")
    }

    /// Replace the values for `name`. A case-insensitive match keeps its
    /// stored casing; otherwise the entry is created under the caller's
    /// casing at the end of the map.
    pub fn set(&mut self, name: impl Into<String>, values: impl Into<HeaderValues>) {
        let name = name.into();
        let values = values.into().into_vec();
        match self.index.get(&name.to_ascii_lowercase()) {
            Some(&pos) => self.entries[pos].values = values,
            None => self.push(name, values),
        }
    }

    /// Append values to `name`, creating the entry if it does not exist.
    /// Existing values and the stored casing are kept.
    pub fn append(&mut self, name: impl Into<String>, values: impl Into<HeaderValues>) {
        let name = name.into();
        let mut values = values.into().into_vec();
        match self.index.get(&name.to_ascii_lowercase()) {
            Some(&pos) => self.entries[pos].values.append(&mut values),
            None => self.push(name, values),
        }
    }

    /// Remove the case-insensitive match for `name`. Returns whether an
    /// entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.index.remove(&name.to_ascii_lowercase()) {
            Some(pos) => {
                self.entries.remove(pos);
                // Entries after the removed one shifted left by one.
                for slot in self.index.values_mut() {
                    if *slot > pos {
                        *slot -= 1;
                    }
                }
                true
            }
            None => false,
        }
    }

    /// Iterate entries in insertion order under their stored casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.values.as_slice()))
    }

    /// Header names in insertion order under their stored casing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, name: String, values: Vec<String>) {
        self.index.insert(name.to_ascii_lowercase(), self.entries.len());
        self.entries.push(Entry { name, values });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_appends_repeated_names() {
        let map = HeaderMap::from_pairs([("Set-Cookie", "a=1"), ("set-cookie", "b=2")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_line("SET-COOKIE"), "a=1,b=2");
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Set-Cookie"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut map = HeaderMap::new();
        map.set("Content-Type", "application/json");
        assert!(map.contains("content-type"));
        assert!(map.contains("Content-Type"));
        assert!(map.contains("CONTENT-TYPE"));
        assert_eq!(map.get("CONTENT-type"), &["application/json".to_string()]);
    }

    #[test]
    fn get_absent_header_is_empty() {
        let map = HeaderMap::new();
        assert!(map.get("Accept").is_empty());
        assert_eq!(map.get_line("Accept"), "");
        assert!(!map.contains("Accept"));
    }

    #[test]
    fn empty_value_list_counts_as_absent() {
        let mut map = HeaderMap::new();
        map.set("Accept", Vec::<String>::new());
        assert!(!map.contains("Accept"));
        assert!(map.get("accept").is_empty());
        assert_eq!(map.get_line("accept"), "");
        // The entry becomes visible once it gains a value.
        map.append("accept", "text/html");
        assert!(map.contains("ACCEPT"));
    }

    #[test]
    fn set_keeps_first_stored_casing() {
        let mut map = HeaderMap::new();
        map.set("Content-Type", "a");
        map.set("content-type", "b");
        assert_eq!(map.len(), 1);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Content-Type"]);
        assert_eq!(map.get("content-type"), &["b".to_string()]);
    }

    #[test]
    fn append_keeps_existing_values() {
        let mut map = HeaderMap::new();
        map.set("X-Tag", "a");
        map.append("x-tag", "b");
        assert_eq!(map.get("X-Tag"), &["a".to_string(), "b".to_string()]);
        assert_eq!(map.get_line("X-Tag"), "a,b");
    }

    #[test]
    fn append_creates_missing_entry() {
        let mut map = HeaderMap::new();
        map.append("Accept", "text/html");
        assert_eq!(map.get("accept"), &["text/html".to_string()]);
    }

    #[test]
    fn set_accepts_value_lists() {
        let mut map = HeaderMap::new();
        map.set("Accept", ["text/html", "application/json"]);
        assert_eq!(map.get_line("accept"), "text/html,application/json");
    }

    #[test]
    fn remove_shifts_index_for_later_entries() {
        let mut map = HeaderMap::new();
        map.set("Date", "d");
        map.set("Server", "s");
        map.set("Content-Type", "t");
        assert!(map.remove("SERVER"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("content-type"), &["t".to_string()]);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Date", "Content-Type"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut map = HeaderMap::new();
        map.set("Date", "d");
        assert!(!map.remove("Server"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iteration_preserves_insertion_order_and_casing() {
        let mut map = HeaderMap::new();
        map.set("Date", "d");
        map.set("Content-Type", "t");
        map.set("SERVER", "s");
        let names: Vec<_> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Date", "Content-Type", "SERVER"]);
    }
}
