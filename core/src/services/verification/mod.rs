//! Verification service module for email-based account verification
//!
//! This module provides the verification code workflow:
//! - Code generation, storage and dispatch through a notifier
//! - Single-use confirmation backed by an atomic store update
//! - Revocation of codes whose delivery failed

mod config;
pub mod mock;
mod service;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use mock::{MockNotifier, SentCode};
pub use service::VerificationService;
pub use traits::NotifierTrait;
pub use types::{SendCodeResult, VerifyCodeResult};
