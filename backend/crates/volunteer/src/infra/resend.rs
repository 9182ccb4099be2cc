//! Resend Mailer
//!
//! Thin client for Resend's send endpoint. One call, one message id.

use serde::Deserialize;
use serde_json::json;

use crate::domain::sink::Mailer;
use crate::error::{SignupError, SignupResult};

const SEND_URL: &str = "https://api.resend.com/emails";

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

pub struct ResendMailer {
    http: reqwest::Client,
    api_key: String,
    from: String,
}

impl ResendMailer {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

impl Mailer for ResendMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> SignupResult<String> {
        let response = self
            .http
            .post(SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SignupError::EmailStatus(response.status().as_u16()));
        }

        let body: SendResponse = response.json().await?;
        tracing::debug!(message_id = %body.id, "Email accepted");
        Ok(body.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_response_shape() {
        let parsed: SendResponse =
            serde_json::from_str(r#"{"id":"49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#).unwrap();
        assert_eq!(parsed.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
    }
}
