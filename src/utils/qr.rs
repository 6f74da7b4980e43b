use crate::error::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use qrcode::QrCode;
use qrcode::render::svg;

/// 把文本编码为二维码，返回内联 SVG 的 data URL
pub fn qr_data_url(text: &str) -> AppResult<String> {
    let code = QrCode::new(text.as_bytes())
        .map_err(|e| AppError::InternalError(format!("QR encoding failed: {e}")))?;

    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .build();

    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(image.as_bytes())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_data_url() {
        let url = qr_data_url("RFQ00042").unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));

        let payload = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_qr_rejects_oversized_payload() {
        // QR 容量上限，过长输入应报错而不是 panic
        let huge = "x".repeat(8000);
        assert!(qr_data_url(&huge).is_err());
    }
}
