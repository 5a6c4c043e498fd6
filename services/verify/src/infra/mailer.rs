use std::time::Duration;

use serde_json::json;

use crate::domain::ports::Mailer;
use crate::error::VerifyServiceError;

/// Default Resend API endpoint.
const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Outbound mail adapter backed by the Resend HTTP API.
///
/// Holds a pooled `reqwest` client with a bounded timeout: the mail call is
/// the only blocking step in the whole protocol, and it must not hang a
/// request past the configured deadline.
#[derive(Clone)]
pub struct ResendMailer {
    http: reqwest::Client,
    api_key: String,
    from: String,
    api_url: String,
}

impl ResendMailer {
    pub fn new(api_key: &str, from: &str, timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            api_key: api_key.to_owned(),
            from: from.to_owned(),
            api_url: RESEND_API_URL.to_owned(),
        }
    }

    /// Redirect delivery to a different endpoint. Tests point this at a
    /// local stub server.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_owned();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Mailer for ResendMailer {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), VerifyServiceError> {
        let body = json!({
            "from": self.from,
            "to": [to],
            "subject": format!("{code} è il tuo codice di verifica - Basta Malasosta"),
            "html": html_body(code),
            "text": text_body(code),
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VerifyServiceError::Transport(anyhow::anyhow!("mail dispatch failed: {e}")))?;

        if !response.status().is_success() {
            // The upstream body can echo the recipient address, so only the
            // status enters the error chain; the client only ever sees the
            // generic transport message.
            return Err(VerifyServiceError::Transport(anyhow::anyhow!(
                "mail API returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

fn html_body(code: &str) -> String {
    format!(
        r#"<h1>Il tuo codice di verifica</h1>
<p>Usa questo codice per accedere all'applicazione:</p>
<h2 style="font-size: 24px; letter-spacing: 2px;">{code}</h2>
<p>Il codice scadrà tra 5 minuti.</p>
<br/>
<p style="margin-top: 30px; font-weight: bold;">Basta Malasosta Milano</p>
<p><a href="http://milano.mobilita-sicura.eu/" style="color: #0066cc; text-decoration: underline;">http://milano.mobilita-sicura.eu/</a></p>"#
    )
}

fn text_body(code: &str) -> String {
    format!(
        "Il tuo codice di verifica\n\n\
         Usa questo codice per accedere all'applicazione:\n\n\
         {code}\n\n\
         Il codice scadrà tra 5 minuti.\n\n\
         Basta Malasosta Milano\n\
         http://milano.mobilita-sicura.eu/"
    )
}
