//! Country and currency code generators.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::GeneratorError;
use crate::generators::TagGenerator;
use crate::properties::PropertyBag;
use crate::reference::ReferenceData;

/// Which reference list a code generator draws from.
#[derive(Debug, Clone, Copy)]
enum CodeList {
    CountryAlpha2,
    CountryAlpha3,
    CountryNumeric,
    CurrencyAlpha,
    CurrencyNumeric,
}

/// Uniform choice from one of the fixed reference code lists.
pub struct CodeListGenerator {
    reference: Arc<dyn ReferenceData>,
    list: CodeList,
}

impl CodeListGenerator {
    pub fn country_alpha2(reference: Arc<dyn ReferenceData>) -> Self {
        Self {
            reference,
            list: CodeList::CountryAlpha2,
        }
    }

    pub fn country_alpha3(reference: Arc<dyn ReferenceData>) -> Self {
        Self {
            reference,
            list: CodeList::CountryAlpha3,
        }
    }

    pub fn country_numeric(reference: Arc<dyn ReferenceData>) -> Self {
        Self {
            reference,
            list: CodeList::CountryNumeric,
        }
    }

    pub fn currency_alpha(reference: Arc<dyn ReferenceData>) -> Self {
        Self {
            reference,
            list: CodeList::CurrencyAlpha,
        }
    }

    pub fn currency_numeric(reference: Arc<dyn ReferenceData>) -> Self {
        Self {
            reference,
            list: CodeList::CurrencyNumeric,
        }
    }
}

fn choose(list: &[&str], rng: &mut dyn RngCore) -> String {
    list.choose(rng).copied().unwrap_or_default().to_string()
}

impl TagGenerator for CodeListGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let value = match self.list {
            CodeList::CountryAlpha2 => choose(self.reference.country_codes_alpha2(), rng),
            CodeList::CountryAlpha3 => choose(self.reference.country_codes_alpha3(), rng),
            CodeList::CountryNumeric => choose(self.reference.country_codes_numeric(), rng),
            CodeList::CurrencyAlpha => choose(self.reference.currency_codes_alpha(), rng),
            CodeList::CurrencyNumeric => {
                let code = self
                    .reference
                    .currency_codes_numeric()
                    .choose(rng)
                    .copied()
                    .unwrap_or_default();
                format!("{code:03}")
            }
        };
        Ok(value)
    }
}
