use crate::config::MailerConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde_json::json;

/// REST 邮件发送服务。调用方把失败当作尽力而为处理，
/// 邮件发不出去不阻塞核心事务
#[derive(Clone)]
pub struct MailerService {
    client: Client,
    config: MailerConfig,
}

impl MailerService {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn send_password_reset_otp(&self, email: &str, otp: &str) -> AppResult<()> {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .unwrap_or("https://api.resend.com");
        let from = self
            .config
            .from_email
            .as_deref()
            .unwrap_or("no-reply@ams.example.com");

        let body = json!({
            "from": from,
            "to": [email],
            "subject": "Your password reset code",
            "text": format!("Your one-time password reset code is: {otp}. It expires in 10 minutes."),
        });

        let response = self
            .client
            .post(format!("{base_url}/emails"))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            log::info!("Password reset OTP email sent: {}", email);
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("OTP email failed to send: {}, Error: {}", email, error_text);
            Err(AppError::ExternalApiError(format!(
                "Email sending failed: {}",
                error_text
            )))
        }
    }
}
