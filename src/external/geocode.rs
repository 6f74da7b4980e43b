use crate::config::GeocodeConfig;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

/// 正向地理编码。任何上游故障都退化为 None，
/// 安全日志照常返回，只是缺少经纬度
#[derive(Clone)]
pub struct GeocodeService {
    client: Client,
    config: GeocodeConfig,
}

impl GeocodeService {
    pub fn new(config: GeocodeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn forward(&self, location: &str) -> Option<(f64, f64)> {
        if location.trim().is_empty() {
            return None;
        }

        // 已是 "lat,lng" 形式则直接解析，不再请求上游
        if let Some(coords) = parse_lat_lng(location) {
            return Some(coords);
        }

        let base_url = self
            .config
            .base_url
            .as_deref()
            .unwrap_or("https://nominatim.openstreetmap.org");

        let mut request = self
            .client
            .get(format!("{base_url}/search"))
            .query(&[("q", location), ("format", "json"), ("limit", "1")])
            .header("User-Agent", "ams-backend");
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let hits: Vec<GeocodeHit> = match request.send().await {
            Ok(resp) if resp.status().is_success() => match resp.json().await {
                Ok(hits) => hits,
                Err(e) => {
                    log::warn!("Geocode response parsing failed: {e}");
                    return None;
                }
            },
            Ok(resp) => {
                log::warn!("Geocode request rejected: {}", resp.status());
                return None;
            }
            Err(e) => {
                log::warn!("Geocode request failed: {e}");
                return None;
            }
        };

        let hit = hits.into_iter().next()?;
        match (hit.lat.parse::<f64>(), hit.lon.parse::<f64>()) {
            (Ok(lat), Ok(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

fn parse_lat_lng(location: &str) -> Option<(f64, f64)> {
    let (lat, lng) = location.split_once(',')?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lng = lng.trim().parse::<f64>().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lat_lng() {
        assert_eq!(parse_lat_lng("13.0827, 80.2707"), Some((13.0827, 80.2707)));
        assert_eq!(parse_lat_lng("Chennai"), None);
        assert_eq!(parse_lat_lng("200,80"), None);
        assert_eq!(parse_lat_lng(""), None);
    }
}
