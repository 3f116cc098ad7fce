use std::collections::HashMap;

use crate::error::OptionError;

use super::{color::Rgb, declaration::OptionKind, value::OptionValue};

/// Concrete values bound to a filter's options for one invocation.
///
/// Usually produced by [`OptionList::resolve`](super::OptionList::resolve),
/// which fills declared defaults and checks every override. The `require_*`
/// accessors are what a filter's typed options use to read it back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOptions {
    values: HashMap<String, OptionValue>,
}

impl ResolvedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style
    pub fn with<K: Into<String>, V: Into<OptionValue>>(mut self, key: K, value: V) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: OptionValue) -> Option<OptionValue> {
        self.values.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    fn require(&self, key: &str) -> Result<&OptionValue, OptionError> {
        self.get(key).ok_or_else(|| OptionError::Missing { name: key.to_string() })
    }

    fn mismatch(key: &str, expected: OptionKind, value: &OptionValue) -> OptionError {
        OptionError::TypeMismatch {
            name: key.to_string(),
            expected,
            found: value.type_name(),
        }
    }

    /// Read a percentage and normalize it to [0, 1]
    pub fn require_fraction(&self, key: &str) -> Result<f64, OptionError> {
        let value = self.require(key)?;
        value
            .as_f64()
            .map(|p| p / 100.0)
            .ok_or_else(|| Self::mismatch(key, OptionKind::Percentage, value))
    }

    pub fn require_number(&self, key: &str) -> Result<f64, OptionError> {
        let value = self.require(key)?;
        value.as_f64().ok_or_else(|| Self::mismatch(key, OptionKind::Number, value))
    }

    pub fn require_integer(&self, key: &str) -> Result<i64, OptionError> {
        let value = self.require(key)?;
        value.as_i64().ok_or_else(|| Self::mismatch(key, OptionKind::Integer, value))
    }

    pub fn require_bool(&self, key: &str) -> Result<bool, OptionError> {
        let value = self.require(key)?;
        value.as_bool().ok_or_else(|| Self::mismatch(key, OptionKind::Boolean, value))
    }

    pub fn require_color(&self, key: &str) -> Result<Rgb, OptionError> {
        let value = self.require(key)?;
        let hex = value
            .as_str()
            .ok_or_else(|| Self::mismatch(key, OptionKind::Color, value))?;
        hex.parse().map_err(|source| OptionError::InvalidColor {
            name: key.to_string(),
            source,
        })
    }
}

impl FromIterator<(String, OptionValue)> for ResolvedOptions {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
