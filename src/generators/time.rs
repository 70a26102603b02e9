//! Time-of-day and duration generators.

use chrono::{NaiveTime, Utc};
use rand::{Rng, RngCore};

use crate::error::GeneratorError;
use crate::generators::TagGenerator;
use crate::properties::PropertyBag;

/// `time`: independent uniform hour, minute, second and nanosecond,
/// formatted as an ISO time-of-day. The date component is not observed.
pub struct TimeGenerator;

impl TagGenerator for TimeGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let hour = rng.gen_range(0..24);
        let minute = rng.gen_range(0..60);
        let second = rng.gen_range(0..60);
        let nanosecond = rng.gen_range(0..1_000_000_000);

        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond).unwrap();
        Ok(time.format("%H:%M:%S%.9f").to_string())
    }
}

/// Forward window the duration span is drawn from.
const MAX_DURATION_MILLIS: i64 = 24 * 60 * 60 * 1_000;

/// `duration`: an ISO-8601 duration for a uniform span of up to one day
/// ahead of the current instant.
///
/// Anchored to the wall clock, so this is the one tag that is not
/// reproducible across runs under a fixed seed. Callers requiring full
/// determinism must not rely on it.
pub struct DurationGenerator;

impl TagGenerator for DurationGenerator {
    fn generate(
        &self,
        _properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let anchor = Utc::now().timestamp_millis();
        let instant = rng.gen_range(anchor..anchor + MAX_DURATION_MILLIS);
        Ok(format_iso_duration(instant - anchor))
    }
}

/// ISO-8601 duration for a non-negative millisecond span below one day.
fn format_iso_duration(millis: i64) -> String {
    let hours = millis / 3_600_000;
    let minutes = millis % 3_600_000 / 60_000;
    let seconds = millis % 60_000 / 1_000;
    let millis = millis % 1_000;
    format!("PT{hours}H{minutes}M{seconds}.{millis:03}S")
}
