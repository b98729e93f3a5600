//! Ordered dependency accumulation.
//!
//! Names are appended while the question flow resolves, then the builder is
//! finalized once into an immutable [`DependencyList`]. Order is insertion
//! order and duplicates are kept; collapsing happens only when the list is
//! flushed into a manifest.

use std::fmt;

use serde::Serialize;

/// Append-only accumulator for package names.
#[derive(Debug, Default)]
pub struct DependencyListBuilder {
    names: Vec<&'static str>,
}

impl DependencyListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group of names, preserving their order.
    pub fn extend(&mut self, names: &[&'static str]) -> &mut Self {
        self.names.extend_from_slice(names);
        self
    }

    /// Append a group only when `condition` holds.
    pub fn extend_if(&mut self, condition: bool, names: &[&'static str]) -> &mut Self {
        if condition {
            self.extend(names);
        }
        self
    }

    pub fn finish(self) -> DependencyList {
        DependencyList { names: self.names }
    }
}

/// Finalized, ordered list of package names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyList {
    names: Vec<&'static str>,
}

impl DependencyList {
    pub fn as_slice(&self) -> &[&'static str] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }
}

impl fmt::Display for DependencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut builder = DependencyListBuilder::new();
        builder
            .extend(&["b", "a"])
            .extend_if(false, &["skipped"])
            .extend_if(true, &["a"]);
        let list = builder.finish();

        assert_eq!(list.as_slice(), &["b", "a", "a"]);
        assert!(!list.contains("skipped"));
        assert_eq!(list.to_string(), "b, a, a");
    }

    #[test]
    fn empty_by_default() {
        let list = DependencyListBuilder::new().finish();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
