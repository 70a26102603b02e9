//! Shape-checked access to the constraint property bag.
//!
//! Every generation request may carry a map of named constraints (a date
//! range, a region code). Absence of an optional key is never an error;
//! callers substitute their documented defaults. A key that is present
//! with the wrong shape fails with [`GeneratorError::MalformedProperty`].

use serde_json::{Map, Value};

use crate::error::GeneratorError;

/// Property naming the phone region for `phone-number`.
pub const REGION_CODE_PROP: &str = "region-code";

/// Property holding a date or datetime range for `iso-date` / `datetime`.
/// Must be given as an object.
pub const RANGE_PROP: &str = "range";

/// Sub-key of `range` holding the inclusive lower bound.
pub const RANGE_START_PROP: &str = "start";

/// Sub-key of `range` holding the exclusive upper bound.
pub const RANGE_END_PROP: &str = "end";

/// Borrowed view over the property map accompanying one generation request.
#[derive(Debug, Clone, Copy)]
pub struct PropertyBag<'a> {
    properties: Option<&'a Map<String, Value>>,
}

impl<'a> PropertyBag<'a> {
    /// Wrap an optional property map. `None` behaves as an empty bag.
    pub fn new(properties: Option<&'a Map<String, Value>>) -> Self {
        Self { properties }
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.properties.and_then(|map| map.get(key))
    }

    /// A string-valued property, or `None` when absent.
    pub fn get_str(&self, key: &str) -> Result<Option<&'a str>, GeneratorError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(GeneratorError::MalformedProperty {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }

    /// A nested-map property, or `None` when absent.
    pub fn get_map(&self, key: &str) -> Result<Option<&'a Map<String, Value>>, GeneratorError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(GeneratorError::MalformedProperty {
                key: key.to_string(),
                expected: "an object",
            }),
        }
    }
}
