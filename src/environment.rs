use std::collections::BTreeMap;

/// Variable bindings that outlive a single `evaluate` call.
///
/// Assignment is last-write-wins and nothing is ever removed. Iteration is
/// ordered by name so listings come out the same every time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    variables: BTreeMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
