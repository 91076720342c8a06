use chrono_tz::Tz;

use crate::error::{InsightsError, Result};

/// Detect the IANA timezone name of the running system.
///
/// Uses the `iana-time-zone` crate directly. Falls back to `"UTC"` if
/// detection fails.
pub fn get_system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

/// Resolve a configured timezone name into a [`Tz`].
///
/// The sentinel `"auto"` resolves to the system timezone. Anything that is
/// not a recognised IANA identifier is a configuration error.
pub fn resolve_timezone(tz_name: &str) -> Result<Tz> {
    let name = if tz_name.eq_ignore_ascii_case("auto") {
        get_system_timezone()
    } else {
        tz_name.to_string()
    };

    name.parse::<Tz>()
        .map_err(|_| InsightsError::InvalidTimezone(name))
}

/// Validate that `tz_name` is a recognised IANA timezone identifier.
pub fn validate_timezone(tz_name: &str) -> bool {
    tz_name.parse::<Tz>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_timezone ─────────────────────────────────────────────────────

    #[test]
    fn test_resolve_timezone_valid() {
        assert_eq!(
            resolve_timezone("America/New_York").unwrap(),
            Tz::America__New_York
        );
        assert_eq!(resolve_timezone("UTC").unwrap(), Tz::UTC);
    }

    #[test]
    fn test_resolve_timezone_invalid_is_error() {
        let err = resolve_timezone("Mars/Olympus").unwrap_err();
        assert!(matches!(err, InsightsError::InvalidTimezone(_)));
    }

    #[test]
    fn test_resolve_timezone_auto_uses_system_zone() {
        // Whatever the host zone is, "auto" must resolve to a parseable one.
        let tz = resolve_timezone("auto").unwrap();
        assert!(validate_timezone(tz.name()));
    }

    // ── validate_timezone ────────────────────────────────────────────────────

    #[test]
    fn test_validate_timezone() {
        assert!(validate_timezone("Europe/London"));
        assert!(validate_timezone("Asia/Tokyo"));
        assert!(!validate_timezone(""));
        assert!(!validate_timezone("not-a-timezone"));
    }

    // ── get_system_timezone ──────────────────────────────────────────────────

    #[test]
    fn test_get_system_timezone_returns_nonempty_string() {
        assert!(!get_system_timezone().is_empty());
    }
}
