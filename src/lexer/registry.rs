use std::{collections::HashMap, fmt::Display};

use serde::{Serialize, Serializer};

/// Synthetic identifier assigned to a user-defined name, rendered as `id<N>`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct VariableId(pub usize);

impl Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id{}", self.0)
    }
}

impl Serialize for VariableId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Maps identifier spellings to ids in order of first occurrence.
///
/// A registry lives for exactly one parse. Ids start at `id1` and are never
/// reassigned or removed.
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    lookup: HashMap<String, VariableId>,
    order: Vec<String>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, allocating the next one on first sight.
    pub fn resolve(&mut self, name: &str) -> VariableId {
        if let Some(id) = self.lookup.get(name) {
            return *id;
        }

        let id = VariableId(self.order.len() + 1);
        tracing::trace!(name, %id, "allocated variable id");

        self.lookup.insert(name.to_string(), id);
        self.order.push(name.to_string());
        id
    }

    pub fn get(&self, name: &str) -> Option<VariableId> {
        self.lookup.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(spelling, id)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, VariableId)> + '_ {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.lookup[name]))
    }
}
