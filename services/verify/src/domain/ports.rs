#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::error::VerifyServiceError;

/// Port for delivering a verification code to an address.
pub trait Mailer: Send + Sync {
    /// Dispatch exactly one delivery attempt. Retries, if any, belong to the
    /// caller: re-issuing within the same slot re-sends the same code.
    async fn send_code(&self, to: &str, code: &str) -> Result<(), VerifyServiceError>;
}

/// Wall-clock port. Slot arithmetic reads the clock through this seam so
/// tests can pin the current slot.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
