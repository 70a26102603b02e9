//! Session-scoped generation entry point.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::GeneratorError;
use crate::properties::PropertyBag;
use crate::reference::EmbeddedReferenceData;
use crate::registry::GeneratorRegistry;

/// One leaf-value request from the schema walker.
///
/// Borrowed for the duration of one call, never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Logical-type tag naming the generator.
    pub tag: String,

    /// Constraint properties accompanying the tag.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Leaf value generator for one generation session.
///
/// Owns the seeded RNG shared by every per-type generator invoked in the
/// session, so a fixed seed yields a fully reproducible value sequence
/// across an entire record-generation run (`duration` excepted, being
/// wall-clock anchored). Concurrent sessions must each own an independent
/// instance; the RNG is never a process-wide singleton.
pub struct ValueGenerator {
    registry: GeneratorRegistry,
    rng: StdRng,
}

impl ValueGenerator {
    /// A session over the built-in generators and the embedded reference
    /// data.
    pub fn new(seed: u64) -> Self {
        Self::with_registry(
            GeneratorRegistry::with_builtins(Arc::new(EmbeddedReferenceData::new())),
            seed,
        )
    }

    /// A session over a caller-assembled registry.
    pub fn with_registry(registry: GeneratorRegistry, seed: u64) -> Self {
        Self {
            registry,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a value for a logical-type tag.
    pub fn generate(
        &mut self,
        tag: &str,
        properties: Option<&Map<String, Value>>,
    ) -> Result<String, GeneratorError> {
        debug!(tag, "generating leaf value");
        self.registry
            .generate(tag, &PropertyBag::new(properties), &mut self.rng)
    }

    /// Generate a value for one request.
    pub fn generate_request(&mut self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        self.generate(&request.tag, Some(&request.properties))
    }

    /// Generate a value for a kind name.
    pub fn generate_kind(&mut self, kind: &str) -> Result<String, GeneratorError> {
        debug!(kind, "generating kind value");
        self.registry.generate_kind(kind, &mut self.rng)
    }

    /// The registry backing this session.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }
}
