//! Session tuning validation.

use crate::schema::SplittermConfig;

use super::helpers::validate_range;

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &SplittermConfig) {
    validate_range(
        errors,
        "session.resize_quiet_ms",
        config.session.resize_quiet_ms,
        0,
        5000,
    );
}
