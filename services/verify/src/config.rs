/// Default sender identity for verification emails.
const DEFAULT_MAIL_FROM: &str = "Basta Malasosta <verification@milano.mobilita-sicura.eu>";

/// Verification service configuration loaded from environment variables.
#[derive(Debug)]
pub struct VerifyConfig {
    /// Secret mixed into code derivation. Every replica must carry the same
    /// value or verification fails across replicas.
    pub otp_secret: String,
    /// Resend API key for outbound verification emails.
    pub resend_api_key: String,
    /// Sender identity for verification emails. Env var: `MAIL_FROM`.
    pub mail_from: String,
    /// TCP port to listen on (default 3117). Env var: `VERIFY_PORT`.
    pub verify_port: u16,
    /// Timeout for the outbound mail API call in seconds (default 10).
    /// Env var: `MAIL_TIMEOUT_SECS`.
    pub mail_timeout_secs: u64,
}

impl VerifyConfig {
    /// Load configuration. A missing or blank secret or mail credential is a
    /// boot-time fault: the process refuses to start instead of failing on
    /// every request.
    pub fn from_env() -> Self {
        let otp_secret = std::env::var("OTP_SECRET").expect("OTP_SECRET");
        assert!(!otp_secret.is_empty(), "OTP_SECRET must not be blank");

        let resend_api_key = std::env::var("RESEND_API_KEY").expect("RESEND_API_KEY");
        assert!(!resend_api_key.is_empty(), "RESEND_API_KEY must not be blank");

        Self {
            otp_secret,
            resend_api_key,
            mail_from: std::env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_owned()),
            verify_port: std::env::var("VERIFY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3117),
            mail_timeout_secs: std::env::var("MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
