use crate::config::VerifyConfig;
use crate::infra::clock::SystemClock;
use crate::infra::mailer::ResendMailer;

/// Shared application state passed to every handler via axum `State`.
///
/// Deliberately small: the protocol holds no sessions, nonces, or counters,
/// so the state is just the immutable derivation secret plus the mail
/// adapter's pooled client.
#[derive(Clone)]
pub struct AppState {
    pub mailer: ResendMailer,
    pub otp_secret: String,
}

impl AppState {
    pub fn from_config(config: &VerifyConfig) -> Self {
        Self {
            mailer: ResendMailer::new(
                &config.resend_api_key,
                &config.mail_from,
                config.mail_timeout_secs,
            ),
            otp_secret: config.otp_secret.clone(),
        }
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock
    }
}
