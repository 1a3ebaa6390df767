//! Normalization of the flat parameter list into a lookup map.

use std::collections::HashMap;

use crate::event::Parameter;

/// Parameters of one invocation, keyed by name.
///
/// Built from the request's parameter list: entries without a name are
/// dropped and a repeated name keeps the value of its last occurrence.
/// A name may map to an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: HashMap<String, Option<String>>,
}

impl ParamMap {
    /// Normalizes a parameter list.
    pub fn from_parameters(parameters: &[Parameter]) -> Self {
        parameters.iter().collect()
    }

    /// Returns the value stored under `name`, if the name is present and
    /// carries a value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|value| value.as_deref())
    }

    /// Returns the entry for `name`: `None` when the name is absent,
    /// `Some(None)` when it is present without a value.
    pub fn entry(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(|value| value.as_deref())
    }

    /// Returns true if a parameter with this name was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the parameter names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a Parameter> for ParamMap {
    fn from_iter<I: IntoIterator<Item = &'a Parameter>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for parameter in iter {
            if let Some(name) = &parameter.name {
                entries.insert(name.clone(), parameter.value.clone());
            }
        }
        Self { entries }
    }
}
