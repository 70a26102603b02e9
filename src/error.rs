//! Error types for leaf value generation.

use thiserror::Error;

/// Errors that can occur while generating a leaf value.
///
/// All variants carry the offending tag, key or value so the schema walker
/// can attribute the failure to a field in its document. The crate performs
/// no retries and no local recovery; defaults are only substituted for
/// absent properties, never for invalid ones.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The logical-type tag is not in the registry.
    #[error("unsupported logical type: {0}")]
    UnsupportedType(String),

    /// The kind name is not in the registry.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(String),

    /// A constraint property is present but has the wrong shape.
    #[error("'{key}' property must be {expected}")]
    MalformedProperty {
        key: String,
        expected: &'static str,
    },

    /// A range bound could not be parsed.
    #[error("unsupported range {field} format: {value}")]
    InvalidRangeFormat {
        field: &'static str,
        value: String,
    },

    /// Range bounds are not strictly ordered.
    #[error("range start {start} must be strictly before end {end}")]
    InvalidRangeOrder { start: String, end: String },

    /// The phone region is not covered by the numbering-plan data.
    #[error("unsupported phone region: {0}")]
    UnsupportedRegion(String),
}
