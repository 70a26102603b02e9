//! Tag to generator dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use rand::RngCore;

use crate::error::GeneratorError;
use crate::generators::codes::CodeListGenerator;
use crate::generators::date::{DateTimeGenerator, IsoDateGenerator};
use crate::generators::kind::{EmailKindGenerator, NameKindGenerator, UuidKindGenerator};
use crate::generators::numeric::DecimalStringGenerator;
use crate::generators::phone::PhoneNumberGenerator;
use crate::generators::telecom::{ImeiGenerator, ImsiGenerator};
use crate::generators::time::{DurationGenerator, TimeGenerator};
use crate::generators::TagGenerator;
use crate::properties::PropertyBag;
use crate::reference::ReferenceData;

/// Registry mapping logical-type tags and kind names to their generators.
///
/// The mapping is open: a new tag is added with [`register`] without
/// touching any existing generator.
///
/// [`register`]: GeneratorRegistry::register
pub struct GeneratorRegistry {
    logical_types: HashMap<String, Box<dyn TagGenerator>>,
    kinds: HashMap<String, Box<dyn TagGenerator>>,
}

impl GeneratorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            logical_types: HashMap::new(),
            kinds: HashMap::new(),
        }
    }

    /// A registry pre-populated with every built-in generator, wired to
    /// the given reference data source.
    pub fn with_builtins(reference: Arc<dyn ReferenceData>) -> Self {
        let mut registry = Self::new();

        registry.register("iso-date", Box::new(IsoDateGenerator));
        registry.register("datetime", Box::new(DateTimeGenerator));
        // Deprecated alias still present in older schema documents.
        registry.register("iso8601-timestamp", Box::new(DateTimeGenerator));
        registry.register("time", Box::new(TimeGenerator));
        registry.register("duration", Box::new(DurationGenerator));
        registry.register("decimal-string", Box::new(DecimalStringGenerator));
        registry.register(
            "phone-number",
            Box::new(PhoneNumberGenerator::new(Arc::clone(&reference))),
        );
        registry.register(
            "country-code-alpha-2",
            Box::new(CodeListGenerator::country_alpha2(Arc::clone(&reference))),
        );
        registry.register(
            "country-code-alpha-3",
            Box::new(CodeListGenerator::country_alpha3(Arc::clone(&reference))),
        );
        registry.register(
            "country-code-numeric",
            Box::new(CodeListGenerator::country_numeric(Arc::clone(&reference))),
        );
        registry.register(
            "currency-code-alpha",
            Box::new(CodeListGenerator::currency_alpha(Arc::clone(&reference))),
        );
        registry.register(
            "currency-code-numeric",
            Box::new(CodeListGenerator::currency_numeric(Arc::clone(&reference))),
        );
        registry.register("imei", Box::new(ImeiGenerator));
        registry.register("imsi", Box::new(ImsiGenerator::new(Arc::clone(&reference))));

        registry.register_kind("uuid", Box::new(UuidKindGenerator));
        registry.register_kind("name", Box::new(NameKindGenerator));
        registry.register_kind("email", Box::new(EmailKindGenerator));

        registry
    }

    /// Register a generator for a logical-type tag, replacing any
    /// previous registration.
    pub fn register(&mut self, tag: impl Into<String>, generator: Box<dyn TagGenerator>) {
        self.logical_types.insert(tag.into(), generator);
    }

    /// Register a generator for a kind name.
    pub fn register_kind(&mut self, kind: impl Into<String>, generator: Box<dyn TagGenerator>) {
        self.kinds.insert(kind.into(), generator);
    }

    /// Dispatch a logical-type tag.
    pub fn generate(
        &self,
        tag: &str,
        properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let generator = self
            .logical_types
            .get(tag)
            .ok_or_else(|| GeneratorError::UnsupportedType(tag.to_string()))?;
        generator.generate(properties, rng)
    }

    /// Dispatch a kind name. Kinds carry no constraint properties.
    pub fn generate_kind(
        &self,
        kind: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let generator = self
            .kinds
            .get(kind)
            .ok_or_else(|| GeneratorError::UnsupportedKind(kind.to_string()))?;
        generator.generate(&PropertyBag::new(None), rng)
    }

    /// Registered logical-type tags, unordered.
    pub fn supported_types(&self) -> impl Iterator<Item = &str> {
        self.logical_types.keys().map(String::as_str)
    }

    /// Registered kind names, unordered.
    pub fn supported_kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::EmbeddedReferenceData;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> GeneratorRegistry {
        GeneratorRegistry::with_builtins(Arc::new(EmbeddedReferenceData::new()))
    }

    #[test]
    fn test_unknown_tag() {
        let mut rng = StdRng::seed_from_u64(42);

        let err = registry()
            .generate("bogus", &PropertyBag::new(None), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UnsupportedType(ref tag) if tag == "bogus"
        ));
    }

    #[test]
    fn test_unknown_kind() {
        let mut rng = StdRng::seed_from_u64(42);

        let err = registry().generate_kind("bogus", &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UnsupportedKind(ref kind) if kind == "bogus"
        ));
    }

    #[test]
    fn test_every_builtin_tag_generates() {
        let mut rng = StdRng::seed_from_u64(42);
        let registry = registry();
        let bag = PropertyBag::new(None);

        for tag in [
            "iso-date",
            "datetime",
            "iso8601-timestamp",
            "time",
            "duration",
            "decimal-string",
            "phone-number",
            "country-code-alpha-2",
            "country-code-alpha-3",
            "country-code-numeric",
            "currency-code-alpha",
            "currency-code-numeric",
            "imei",
            "imsi",
        ] {
            let value = registry.generate(tag, &bag, &mut rng).unwrap();
            assert!(!value.is_empty(), "empty value for {tag}");
        }

        for kind in ["uuid", "name", "email"] {
            let value = registry.generate_kind(kind, &mut rng).unwrap();
            assert!(!value.is_empty(), "empty value for kind {kind}");
        }
    }

    #[test]
    fn test_registration_is_open() {
        struct FixedGenerator;

        impl TagGenerator for FixedGenerator {
            fn generate(
                &self,
                _properties: &PropertyBag<'_>,
                _rng: &mut dyn RngCore,
            ) -> Result<String, GeneratorError> {
                Ok("fixed".to_string())
            }
        }

        let mut rng = StdRng::seed_from_u64(42);
        let mut registry = GeneratorRegistry::new();
        registry.register("fixed", Box::new(FixedGenerator));

        let value = registry
            .generate("fixed", &PropertyBag::new(None), &mut rng)
            .unwrap();
        assert_eq!(value, "fixed");
    }
}
