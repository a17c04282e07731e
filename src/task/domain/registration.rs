//! Registration timestamp parsing.

use super::ParseRegistrationTimeError;
use chrono::NaiveDateTime;

/// Human-readable form of the accepted timestamp layout.
pub const REGISTRATION_TIME_FORMAT: &str = "yyyy-MM-ddTHH:mm:ss";

const WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Parses an ISO-8601 local date-time such as `2022-09-09T14:34:01`.
///
/// Seconds and fractional seconds are optional. Zone offsets are rejected.
///
/// # Errors
///
/// Returns [`ParseRegistrationTimeError`] when the value matches neither
/// layout.
pub fn parse_registration_time(value: &str) -> Result<NaiveDateTime, ParseRegistrationTimeError> {
    NaiveDateTime::parse_from_str(value, WITH_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(value, WITHOUT_SECONDS))
        .map_err(|_| ParseRegistrationTimeError(value.to_owned()))
}
