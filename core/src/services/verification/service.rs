//! Main verification service implementation

use chrono::Utc;
use std::sync::Arc;

use radar_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::user::UserRepository;
use crate::services::deadline::within_store_deadline;

use super::config::VerificationServiceConfig;
use super::traits::NotifierTrait;
use super::types::{SendCodeResult, VerifyCodeResult};

/// Issues verification codes and confirms them
///
/// Verification state is never cached here; every decision is made against
/// the store, and the final check-and-consume is a single conditional
/// update so concurrent confirmations cannot both win.
pub struct VerificationService<U: UserRepository, N: NotifierTrait> {
    /// Store holding users and their code slot
    user_repository: Arc<U>,
    /// Out-of-band delivery
    notifier: Arc<N>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<U: UserRepository, N: NotifierTrait> VerificationService<U, N> {
    /// Create a new verification service
    pub fn new(user_repository: Arc<U>, notifier: Arc<N>, config: VerificationServiceConfig) -> Self {
        Self {
            user_repository,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a fresh code for `email` and dispatch it
    ///
    /// This method:
    /// 1. Looks up the user (`NotFound` if absent)
    /// 2. Generates a code and overwrites the user's code slot
    /// 3. Sends the code through the notifier within its deadline
    /// 4. Revokes the code again if delivery fails
    ///
    /// Succeeds only after the notifier has accepted the message.
    pub async fn request_verification(&self, email: &str) -> DomainResult<SendCodeResult> {
        let email = normalize_email(email);
        let masked = mask_email(&email);

        let user = self.find_user(&email, &masked).await?;

        let verification_code =
            VerificationCode::issue(self.config.code_length, self.config.code_expiration_minutes);

        within_store_deadline(
            self.config.store_timeout,
            "save_verification_code",
            self.user_repository
                .save_verification_code(&email, &verification_code),
        )
        .await?;

        tracing::info!(
            email = %masked,
            already_verified = user.is_verified(),
            expires_at = %verification_code.expires_at,
            event = "otp_issued",
            "Issued verification code"
        );

        let dispatch = tokio::time::timeout(
            self.config.notifier_timeout,
            self.notifier.send_verification_code(
                &email,
                &verification_code.code,
                self.config.code_expiration_minutes,
            ),
        )
        .await;

        let message_id = match dispatch {
            Ok(Ok(message_id)) => message_id,
            Ok(Err(reason)) => {
                tracing::error!(
                    email = %masked,
                    error = %reason,
                    event = "otp_delivery_failed",
                    "Notifier rejected verification code"
                );
                self.revoke_code(&email, &masked, &verification_code).await;
                return Err(DomainError::NotifierFailure { message: reason });
            }
            Err(_) => {
                tracing::error!(
                    email = %masked,
                    timeout_ms = self.config.notifier_timeout.as_millis() as u64,
                    event = "otp_delivery_timeout",
                    "Notifier did not respond in time"
                );
                self.revoke_code(&email, &masked, &verification_code).await;
                return Err(DomainError::NotifierFailure {
                    message: format!(
                        "notifier timed out after {}ms",
                        self.config.notifier_timeout.as_millis()
                    ),
                });
            }
        };

        tracing::info!(
            email = %masked,
            message_id = %message_id,
            event = "otp_sent",
            "Verification code delivered to notifier"
        );

        Ok(SendCodeResult {
            email,
            verification_code,
            message_id,
        })
    }

    /// Confirm `code` for `email`, marking the user verified
    ///
    /// Fails with `NotFound` for an unknown user and `InvalidCode` when the
    /// code is malformed, wrong, consumed, or expired.
    pub async fn confirm_verification(&self, email: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        let email = normalize_email(email);
        let masked = mask_email(&email);

        let user = self.find_user(&email, &masked).await?;

        let code = code.trim();
        if let Err(rejection) = VerificationCode::check_format(code, self.config.code_length) {
            tracing::warn!(
                email = %masked,
                code_length = code.len(),
                reason = rejection.as_str(),
                event = "otp_rejected",
                "Malformed verification code"
            );
            return Err(DomainError::InvalidCode);
        }

        let now = Utc::now();
        let precheck = match user.verification_code.as_ref() {
            Some(current) => current.check(code, now).map_err(|r| r.as_str()),
            None => Err("no_code_issued"),
        };
        if let Err(reason) = precheck {
            tracing::warn!(
                email = %masked,
                reason = reason,
                event = "otp_rejected",
                "Verification code rejected"
            );
            return Err(DomainError::InvalidCode);
        }

        let consumed = within_store_deadline(
            self.config.store_timeout,
            "consume_verification_code",
            self.user_repository
                .consume_verification_code(&email, code, now),
        )
        .await?;

        match consumed {
            Some(user) => {
                tracing::info!(
                    email = %masked,
                    user_id = %user.id,
                    event = "otp_verified",
                    "Account verified"
                );
                Ok(VerifyCodeResult {
                    user,
                    verified_at: now,
                })
            }
            None => {
                // Another request consumed or replaced the code after our read
                tracing::warn!(
                    email = %masked,
                    reason = "lost_race",
                    event = "otp_rejected",
                    "Verification code no longer current"
                );
                Err(DomainError::InvalidCode)
            }
        }
    }

    async fn find_user(&self, email: &str, masked: &str) -> DomainResult<User> {
        let user = within_store_deadline(
            self.config.store_timeout,
            "find_user_by_email",
            self.user_repository.find_by_email(email),
        )
        .await?;

        user.ok_or_else(|| {
            tracing::warn!(email = %masked, event = "user_not_found", "No user for email");
            DomainError::not_found("user")
        })
    }

    /// Best-effort removal of an undelivered code
    async fn revoke_code(&self, email: &str, masked: &str, code: &VerificationCode) {
        let cleared = within_store_deadline(
            self.config.store_timeout,
            "clear_verification_code",
            self.user_repository
                .clear_verification_code(email, &code.code),
        )
        .await;

        match cleared {
            Ok(true) => tracing::info!(
                email = %masked,
                event = "otp_revoked",
                "Revoked undelivered verification code"
            ),
            Ok(false) => tracing::debug!(
                email = %masked,
                event = "otp_revoke_skipped",
                "Code was already replaced or consumed"
            ),
            Err(error) => tracing::error!(
                email = %masked,
                error = %error,
                expires_at = %code.expires_at,
                event = "otp_revoke_failed",
                "Could not revoke undelivered code; it lapses at expiry"
            ),
        }
    }
}
