//! Build session properties.

use std::collections::BTreeMap;

/// User and system properties of the running build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    properties: BTreeMap<String, String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from `key=value` definitions.
    ///
    /// A definition without `=` sets the key to `"true"`, so `-Dfoo.skip`
    /// works like `-Dfoo.skip=true`.
    pub fn from_definitions<I, S>(definitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let properties = definitions
            .into_iter()
            .map(|definition| match definition.as_ref().split_once('=') {
                Some((key, value)) => (key.trim().to_string(), value.to_string()),
                None => (definition.as_ref().trim().to_string(), "true".to_string()),
            })
            .collect();
        Self { properties }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Boolean value of the first present key, or `default`.
    ///
    /// Only a case-insensitive `true` is true.
    pub fn get_bool<S: AsRef<str>>(&self, default: bool, keys: &[S]) -> bool {
        keys.iter()
            .find_map(|key| self.get(key.as_ref()))
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(default)
    }
}
