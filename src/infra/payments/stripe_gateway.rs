use crate::domain::ports::{PaymentGateway, PaymentIntent};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::error;

/// Stripe-compatible payment-intent endpoint. The core never interprets the
/// gateway's internals beyond the intent id and client secret it hands back.
pub struct StripeGateway {
    client: Client,
    api_url: String,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(api_url: String, secret_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            secret_key,
        }
    }
}

#[derive(Deserialize)]
struct IntentResponse {
    id: String,
    client_secret: String,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, amount: Decimal, member_id: &str) -> Result<PaymentIntent, AppError> {
        // The gateway wants the amount in minor units (paise).
        let minor_units = (amount * Decimal::from(100))
            .round()
            .to_i64()
            .ok_or_else(|| AppError::Validation("Amount out of range".into()))?;

        let params = [
            ("amount", minor_units.to_string()),
            ("currency", "inr".to_string()),
            ("metadata[memberId]", member_id.to_string()),
        ];

        let res = self.client.post(&self.api_url)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Payment gateway connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Payment gateway failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Upstream(msg));
        }

        let intent: IntentResponse = res.json().await
            .map_err(|e| AppError::Upstream(format!("Malformed gateway response: {}", e)))?;

        Ok(PaymentIntent {
            intent_id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}
