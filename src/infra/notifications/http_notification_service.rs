use crate::domain::ports::NotificationChannel;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::error;

/// Delivers member communications through an external relay (email/WhatsApp
/// behind one HTTP API). Delivery outcomes are recorded by the caller.
pub struct HttpNotificationService {
    client: Client,
    api_url: String,
    api_token: String,
}

impl HttpNotificationService {
    pub fn new(api_url: String, api_token: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_token,
        }
    }
}

#[derive(Serialize)]
struct NotificationPayload<'a> {
    channel: &'a str,
    recipient: &'a str,
    subject: Option<&'a str>,
    message: &'a str,
}

#[async_trait]
impl NotificationChannel for HttpNotificationService {
    async fn send(
        &self,
        channel: &str,
        recipient: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<(), AppError> {
        let payload = NotificationPayload { channel, recipient, subject, message };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Notification service connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Notification service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Upstream(msg));
        }

        Ok(())
    }
}
