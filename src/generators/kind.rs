//! Kind generators: uuid, name, email.

use rand::seq::SliceRandom;
use rand::RngCore;
use uuid::Uuid;

use crate::error::GeneratorError;
use crate::generators::TagGenerator;
use crate::properties::PropertyBag;

/// Given names the name and email kinds compose from.
const GIVEN_NAMES: &[&str] = &[
    "Alice", "Amelia", "Andres", "Anna", "Antonio", "Carla", "Carlos", "Carmen", "Claire",
    "Daniel", "David", "Diego", "Elena", "Emma", "Eric", "Fatima", "Gabriel", "Hannah", "Hugo",
    "Ines", "Ivan", "James", "Javier", "Julia", "Laura", "Leo", "Liam", "Lucia", "Maria",
    "Marta", "Miguel", "Nadia", "Noah", "Olivia", "Pablo", "Paula", "Peter", "Rosa", "Sara",
    "Sofia", "Thomas", "Victor",
];

/// Surnames the name and email kinds compose from.
const SURNAMES: &[&str] = &[
    "Alonso", "Anderson", "Brown", "Castro", "Diaz", "Fernandez", "Garcia", "Gomez", "Gonzalez",
    "Herrera", "Johnson", "Jones", "Lopez", "Martin", "Martinez", "Miller", "Molina", "Moreno",
    "Navarro", "Ortega", "Perez", "Ramirez", "Reyes", "Rodriguez", "Romero", "Ruiz", "Sanchez",
    "Santos", "Serrano", "Silva", "Smith", "Suarez", "Taylor", "Torres", "Vargas", "Vega",
    "Vidal", "Walker", "Williams", "Wilson",
];

/// Reserved example domains, safe to emit in generated data.
const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// `kind: uuid`: a version-4 UUID built from RNG bytes, so a fixed seed
/// reproduces the identifier.
pub struct UuidKindGenerator;

impl TagGenerator for UuidKindGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);

        // Version 4, variant RFC 4122.
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Ok(Uuid::from_bytes(bytes).to_string())
    }
}

/// `kind: name`: `"Given Surname"` from the embedded corpora.
pub struct NameKindGenerator;

impl TagGenerator for NameKindGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let given = GIVEN_NAMES.choose(rng).copied().unwrap_or_default();
        let surname = SURNAMES.choose(rng).copied().unwrap_or_default();
        Ok(format!("{given} {surname}"))
    }
}

/// `kind: email`: `given.surname@domain` over the name corpora and the
/// reserved example domains, syntactically valid by construction.
pub struct EmailKindGenerator;

impl TagGenerator for EmailKindGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let given = GIVEN_NAMES.choose(rng).copied().unwrap_or_default();
        let surname = SURNAMES.choose(rng).copied().unwrap_or_default();
        let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or_default();
        Ok(format!(
            "{}.{}@{domain}",
            given.to_lowercase(),
            surname.to_lowercase()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuid_kind_is_version_4() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = UuidKindGenerator
            .generate(&PropertyBag::new(None), &mut rng)
            .unwrap();
        let uuid = Uuid::parse_str(&value).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
    }

    #[test]
    fn test_uuid_kind_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let bag = PropertyBag::new(None);

        assert_eq!(
            UuidKindGenerator.generate(&bag, &mut rng1).unwrap(),
            UuidKindGenerator.generate(&bag, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_uuid_kind_unique_across_draws() {
        let mut rng = StdRng::seed_from_u64(42);
        let bag = PropertyBag::new(None);

        let first = UuidKindGenerator.generate(&bag, &mut rng).unwrap();
        let second = UuidKindGenerator.generate(&bag, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_name_kind_composes_two_words() {
        let mut rng = StdRng::seed_from_u64(42);

        let value = NameKindGenerator
            .generate(&PropertyBag::new(None), &mut rng)
            .unwrap();
        let parts: Vec<&str> = value.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(GIVEN_NAMES.contains(&parts[0]));
        assert!(SURNAMES.contains(&parts[1]));
    }

    #[test]
    fn test_email_kind_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let value = EmailKindGenerator
                .generate(&PropertyBag::new(None), &mut rng)
                .unwrap();

            let (local, domain) = value.split_once('@').unwrap();
            assert!(local.contains('.'));
            assert!(local
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '.'));
            assert!(EMAIL_DOMAINS.contains(&domain));
        }
    }
}
