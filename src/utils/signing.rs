use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Request signing errors
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Sign `timestamp + method + request_path` with HMAC-SHA256 and base64-encode the digest
///
/// This is the OKX v5 `OK-ACCESS-SIGN` scheme.
pub fn sign_request(
    secret: &str,
    timestamp: &str,
    method: &str,
    request_path: &str,
) -> Result<String, SigningError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SigningError::InvalidKey(e.to_string()))?;
    mac.update(timestamp.as_bytes());
    mac.update(method.as_bytes());
    mac.update(request_path.as_bytes());

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
