use tracing::info;

use malasosta_core::redact::mask_email;

use crate::domain::ports::{Clock, Mailer};
use crate::error::VerifyServiceError;
use crate::usecase::otp::{derive_code, slot_at};

pub struct SendCodeInput {
    /// Optional so an absent request field surfaces as the protocol's own
    /// validation error instead of a framework rejection.
    pub email: Option<String>,
}

pub struct SendCodeUseCase<M, C>
where
    M: Mailer,
    C: Clock,
{
    pub mailer: M,
    pub clock: C,
    pub secret: String,
}

impl<M, C> SendCodeUseCase<M, C>
where
    M: Mailer,
    C: Clock,
{
    pub async fn execute(&self, input: SendCodeInput) -> Result<(), VerifyServiceError> {
        // 1. Minimal address shape check → reject before any derivation
        let email = match input.email.as_deref() {
            Some(e) if !e.is_empty() && e.contains('@') => e,
            _ => return Err(VerifyServiceError::InvalidEmail),
        };

        // 2. A blank secret is a deployment fault. Startup refuses it, so
        //    this guard only matters for hand-built states.
        if self.secret.is_empty() {
            return Err(VerifyServiceError::Configuration);
        }

        // 3. Derive for the current slot and dispatch exactly once. Re-issuing
        //    within the same slot re-derives the same code, so a resend never
        //    invalidates a code the user already received.
        let slot = slot_at(self.clock.now());
        let code = derive_code(email, slot, &self.secret);
        self.mailer.send_code(email, &code).await?;

        info!(email = %mask_email(email), "verification code dispatched");
        Ok(())
    }
}
