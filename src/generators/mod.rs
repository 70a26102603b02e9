//! Per-type value generators.
//!
//! One generator per logical-type tag or kind name. Each is a stateless
//! pure function of the property bag and the caller-supplied random
//! source; a fixed seed reproduces the full value sequence.

pub mod codes;
pub mod date;
pub mod kind;
pub mod numeric;
pub mod phone;
pub mod telecom;
pub mod time;

use rand::{Rng, RngCore};

use crate::error::GeneratorError;
use crate::properties::PropertyBag;

/// A generator for one logical-type tag or kind name.
///
/// Implementations hold no mutable state; every random draw goes through
/// `rng`. Kind generators ignore the property bag.
pub trait TagGenerator: Send + Sync {
    fn generate(
        &self,
        properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError>;
}

/// Digit string of exactly `len` characters, each digit uniform in `0..=9`.
pub(crate) fn random_digits(rng: &mut dyn RngCore, len: usize) -> String {
    (0..len)
        .map(|_| char::from_digit(rng.gen_range(0..10), 10).unwrap())
        .collect()
}
