//! Numeric string generators.

use rand::{Rng, RngCore};

use crate::error::GeneratorError;
use crate::generators::TagGenerator;
use crate::properties::PropertyBag;

/// `decimal-string`: a uniform double in `[0, 1)` with exactly three
/// fractional digits.
pub struct DecimalStringGenerator;

impl TagGenerator for DecimalStringGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        // Truncated, not rounded: the formatted value must stay below 1.
        let value = (rng.gen::<f64>() * 1000.0).floor() / 1000.0;
        Ok(format!("{value:.3}"))
    }
}
