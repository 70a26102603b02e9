//! Phone number generator backed by numbering-plan data.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::GeneratorError;
use crate::generators::TagGenerator;
use crate::properties::{PropertyBag, REGION_CODE_PROP};
use crate::reference::ReferenceData;

/// `phone-number`: the example number for a region in E.164 international
/// format.
///
/// The region comes from the `region-code` property when present,
/// otherwise it is a uniform choice among the plan's supported regions.
/// An unrecognized region fails with [`GeneratorError::UnsupportedRegion`].
pub struct PhoneNumberGenerator {
    reference: Arc<dyn ReferenceData>,
}

impl PhoneNumberGenerator {
    pub fn new(reference: Arc<dyn ReferenceData>) -> Self {
        Self { reference }
    }
}

impl TagGenerator for PhoneNumberGenerator {
    fn generate(
        &self,
        properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let region = match properties.get_str(REGION_CODE_PROP)? {
            Some(region) => region,
            None => self
                .reference
                .phone_regions()
                .choose(rng)
                .copied()
                .unwrap_or_default(),
        };

        self.reference
            .example_phone_number(region)
            .ok_or_else(|| GeneratorError::UnsupportedRegion(region.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::EmbeddedReferenceData;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Map, Value};

    fn generator() -> PhoneNumberGenerator {
        PhoneNumberGenerator::new(Arc::new(EmbeddedReferenceData::new()))
    }

    fn props(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object literal, got {other:?}"),
        }
    }

    #[test]
    fn test_spanish_region_number() {
        let mut rng = StdRng::seed_from_u64(42);
        let props = props(json!({ "region-code": "ES" }));

        let value = generator()
            .generate(&PropertyBag::new(Some(&props)), &mut rng)
            .unwrap();

        assert!(value.starts_with("+34"), "not a Spanish number: {value}");
        assert!(value[1..].chars().all(|c| c.is_ascii_digit()));
        // E.164: at most 15 digits after the plus sign.
        assert!(value.len() <= 16);
    }

    #[test]
    fn test_random_region_number_is_e164() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = generator();

        for _ in 0..50 {
            let value = generator.generate(&PropertyBag::new(None), &mut rng).unwrap();
            assert!(value.starts_with('+'));
            assert!(value[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_unknown_region() {
        let mut rng = StdRng::seed_from_u64(42);
        let props = props(json!({ "region-code": "ZZ" }));

        let err = generator()
            .generate(&PropertyBag::new(Some(&props)), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UnsupportedRegion(ref region) if region == "ZZ"
        ));
    }

    #[test]
    fn test_non_string_region_is_malformed() {
        let mut rng = StdRng::seed_from_u64(42);
        let props = props(json!({ "region-code": 34 }));

        let err = generator()
            .generate(&PropertyBag::new(Some(&props)), &mut rng)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedProperty { .. }));
    }

    #[test]
    fn test_random_region_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let generator = generator();
        let bag = PropertyBag::new(None);

        for _ in 0..10 {
            assert_eq!(
                generator.generate(&bag, &mut rng1).unwrap(),
                generator.generate(&bag, &mut rng2).unwrap()
            );
        }
    }
}
