use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::UserResponse;

/// Query of the send and verify endpoints
///
/// Both spellings of each parameter are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerificationQuery {
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(default, alias = "Code")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub email: String,
    pub expires_at: DateTime<Utc>,
    pub expires_in_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub user: UserResponse,
    pub verified_at: DateTime<Utc>,
}
