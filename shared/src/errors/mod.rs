//! Shared error codes

/// Stable error codes carried in the `error.code` field of the envelope
pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const VERIFICATION_CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
    pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
    pub const NOTIFIER_FAILURE: &str = "NOTIFIER_FAILURE";
}
