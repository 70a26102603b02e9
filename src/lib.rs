//! Leaf value generation for schema-driven record generators.
//!
//! This crate produces a single random, semantically valid scalar value
//! for a logical-type tag (`iso-date`, `phone-number`, `imsi`, ...) or a
//! kind name (`uuid`, `name`, `email`), plus an optional property bag of
//! constraints (a date range, a region code). A schema walker recursing
//! over records, arrays, maps and unions calls into it for every
//! annotated leaf field; the walker itself, union selection, uniqueness
//! enforcement and output encoding live outside this crate.
//!
//! # Architecture
//!
//! ```text
//! (tag, properties)
//!        │
//!        ▼
//! ┌──────────────────┐      ┌───────────────────┐
//! │  ValueGenerator  │─────▶│ GeneratorRegistry │
//! │  - rng (StdRng)  │      │  tag ─▶ generator │
//! └──────────────────┘      └─────────┬─────────┘
//!                                     │ PropertyBag / range resolution
//!                                     ▼
//!                          per-type generator ─▶ String
//! ```
//!
//! # Example
//!
//! ```rust
//! use leaf_generator::ValueGenerator;
//!
//! let mut generator = ValueGenerator::new(42);
//!
//! let date = generator.generate("iso-date", None).unwrap();
//! let email = generator.generate_kind("email").unwrap();
//! ```
//!
//! # Determinism
//!
//! Every generator draws from the session RNG, so two sessions with the
//! same seed and the same request sequence produce byte-identical values.
//! The one exception is `duration`, which anchors to the wall clock.

pub mod error;
pub mod generator;
pub mod generators;
pub mod properties;
pub mod range;
pub mod reference;
pub mod registry;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::{GenerationRequest, ValueGenerator};
pub use generators::TagGenerator;
pub use properties::PropertyBag;
pub use range::{DateRange, DateTimeRange};
pub use reference::{EmbeddedReferenceData, ReferenceData};
pub use registry::GeneratorRegistry;
