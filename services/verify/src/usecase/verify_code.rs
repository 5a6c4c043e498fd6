use tracing::debug;

use malasosta_core::redact::mask_email;

use crate::domain::ports::Clock;
use crate::domain::types::CODE_LEN;
use crate::error::VerifyServiceError;
use crate::usecase::otp::{derive_code, slot_at};

pub struct VerifyCodeInput {
    pub email: Option<String>,
    pub code: Option<String>,
}

pub struct VerifyCodeUseCase<C>
where
    C: Clock,
{
    pub clock: C,
    pub secret: String,
}

impl<C> VerifyCodeUseCase<C>
where
    C: Clock,
{
    pub fn execute(&self, input: VerifyCodeInput) -> Result<(), VerifyServiceError> {
        // 1. Reject malformed submissions before touching the clock
        let email = input
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or(VerifyServiceError::InvalidEmail)?;
        let code = input
            .code
            .as_deref()
            .ok_or(VerifyServiceError::InvalidCode)?;
        if code.len() != CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(VerifyServiceError::InvalidCode);
        }

        // 2. A submission may straddle a slot boundary between issue and
        //    check, so the previous slot's code is accepted too. The grace
        //    window therefore runs between one and two slot widths.
        let current = slot_at(self.clock.now());
        if code == derive_code(email, current, &self.secret)
            || code == derive_code(email, current - 1, &self.secret)
        {
            debug!(email = %mask_email(email), "verification code accepted");
            return Ok(());
        }

        Err(VerifyServiceError::CodeMismatch)
    }
}
