//! IMEI and IMSI generators.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::GeneratorError;
use crate::generators::{random_digits, TagGenerator};
use crate::properties::PropertyBag;
use crate::reference::ReferenceData;

const IMEI_LENGTH: usize = 14;

/// Digits drawn after the 3-digit mobile-country-code prefix.
const IMSI_SUFFIX_LENGTH: usize = 15 - 3;

/// `imei`: 14 uniform digits.
pub struct ImeiGenerator;

impl TagGenerator for ImeiGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        Ok(random_digits(rng, IMEI_LENGTH))
    }
}

/// `imsi`: a known mobile-country-code prefix followed by 12 uniform
/// digits, 15 digits total.
pub struct ImsiGenerator {
    reference: Arc<dyn ReferenceData>,
}

impl ImsiGenerator {
    pub fn new(reference: Arc<dyn ReferenceData>) -> Self {
        Self { reference }
    }
}

impl TagGenerator for ImsiGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let mcc = self
            .reference
            .mobile_country_codes()
            .choose(rng)
            .copied()
            .unwrap_or_default();
        Ok(format!("{mcc}{}", random_digits(rng, IMSI_SUFFIX_LENGTH)))
    }
}
