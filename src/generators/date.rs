//! Date and datetime generators.

use chrono::{Duration, SecondsFormat};
use rand::{Rng, RngCore};

use crate::error::GeneratorError;
use crate::generators::TagGenerator;
use crate::properties::PropertyBag;
use crate::range::{DateRange, DateTimeRange};

/// `iso-date`: a uniform calendar date in the resolved range, formatted
/// `YYYY-MM-DD`.
pub struct IsoDateGenerator;

impl TagGenerator for IsoDateGenerator {
    fn generate(
        &self,
        properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let range = DateRange::resolve(properties)?;
        let offset = rng.gen_range(0..range.num_days());
        let date = range.start + Duration::days(offset);
        Ok(date.format("%Y-%m-%d").to_string())
    }
}

/// `datetime`: a uniform instant in the resolved range at millisecond
/// resolution, formatted RFC 3339 with UTC offset.
///
/// Also registered under the deprecated `iso8601-timestamp` tag, which
/// older schema documents still carry.
pub struct DateTimeGenerator;

impl TagGenerator for DateTimeGenerator {
    fn generate(
        &self,
        properties: &PropertyBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GeneratorError> {
        let range = DateTimeRange::resolve(properties)?;
        // A strictly ordered range can still span less than a millisecond.
        let span = range.num_milliseconds();
        let instant = if span == 0 {
            range.start
        } else {
            range.start + Duration::milliseconds(rng.gen_range(0..span))
        };
        Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, false))
    }
}
