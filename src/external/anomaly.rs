use crate::config::AnomalyConfig;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    label: String,
}

/// 登录异常评分。上游不可用时退化为本地启发式，
/// 评分永远不会让登录失败
#[derive(Clone)]
pub struct AnomalyService {
    client: Client,
    config: AnomalyConfig,
}

impl AnomalyService {
    pub fn new(config: AnomalyConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn score_login(&self, email: &str, ip: Option<&str>, device: Option<&str>) -> String {
        let Some(base_url) = self.config.base_url.as_deref() else {
            return fallback_label(ip, device);
        };

        let body = json!({
            "email": email,
            "ip": ip,
            "device": device,
        });

        let mut request = self.client.post(format!("{base_url}/score")).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        match request.send().await {
            Ok(resp) if resp.status().is_success() => match resp.json::<ScoreResponse>().await {
                Ok(score) => score.label,
                Err(e) => {
                    log::warn!("Anomaly score parsing failed: {e}");
                    fallback_label(ip, device)
                }
            },
            Ok(resp) => {
                log::warn!("Anomaly scoring rejected: {}", resp.status());
                fallback_label(ip, device)
            }
            Err(e) => {
                log::warn!("Anomaly scoring failed: {e}");
                fallback_label(ip, device)
            }
        }
    }
}

fn fallback_label(ip: Option<&str>, device: Option<&str>) -> String {
    if ip.is_none() || device.is_none() {
        "Unknown".to_string()
    } else {
        "Normal".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_label() {
        assert_eq!(fallback_label(Some("1.2.3.4"), Some("Mozilla/5.0")), "Normal");
        assert_eq!(fallback_label(None, Some("Mozilla/5.0")), "Unknown");
        assert_eq!(fallback_label(Some("1.2.3.4"), None), "Unknown");
    }
}
