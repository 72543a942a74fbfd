//! Named placeholder values for template substitution

use std::collections::HashMap;

/// Values substituted for `:name` placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    values: HashMap<String, String>,
}

impl Replacements {
    /// Create an empty set of replacements
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming and returning the builder
    pub fn with<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.insert(name, value);
        self
    }

    /// Add or replace a value in place
    pub fn insert<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.values.insert(name.into(), value.to_string());
    }

    /// Value for a placeholder name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a value is present for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Replacements
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Self::new();
        for (name, value) in iter {
            replacements.insert(name, value);
        }
        replacements
    }
}

/// Build [`Replacements`] from `name => value` pairs
#[macro_export]
macro_rules! replacements {
    () => {
        $crate::Replacements::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut replacements = $crate::Replacements::new();
        $(
            replacements.insert($name, $value);
        )+
        replacements
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_macro_agree() {
        let built = Replacements::new().with("name", "Ada").with("count", 3);
        let from_macro = replacements!["name" => "Ada", "count" => 3];
        assert_eq!(built, from_macro);
        assert_eq!(built.get("count"), Some("3"));
        assert_eq!(built.len(), 2);
    }

    #[test]
    fn test_later_values_win() {
        let replacements: Replacements = [("name", "a"), ("name", "b")].into_iter().collect();
        assert_eq!(replacements.get("name"), Some("b"));
    }
}
