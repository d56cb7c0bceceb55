use base64::{Engine as _, engine::general_purpose};
use image::Luma;
use qrcode::QrCode;
use rand::{distributions::Alphanumeric, Rng};
use std::io::Cursor;

use crate::error::AppError;

/// Issues a member QR identity token: millisecond timestamp plus a random
/// alphanumeric suffix. Uniqueness is ultimately enforced by the database
/// constraint on `members.qr_code_id`; callers retry with a fresh token on a
/// unique violation.
pub fn issue_qr_token() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("QR_{}_{}", chrono::Utc::now().timestamp_millis(), suffix)
}

/// The self-registration URL encoded into a branch's QR code.
pub fn registration_url(base_url: &str, branch_id: &str) -> String {
    format!("{}/register?branchId={}", base_url.trim_end_matches('/'), branch_id)
}

/// Renders a URL as a scannable QR image, returned as a PNG data URL so the
/// artifact can be stored inline on the branch row.
pub fn render_qr_data_url(url: &str) -> Result<String, AppError> {
    let code = QrCode::new(url.as_bytes())
        .map_err(|e| AppError::InternalWithMsg(format!("QR encoding failed: {}", e)))?;

    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(300, 300)
        .build();

    let mut png = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| AppError::InternalWithMsg(format!("QR rendering failed: {}", e)))?;

    Ok(format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(&png)))
}
