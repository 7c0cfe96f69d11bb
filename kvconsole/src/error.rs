use super::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The backend rejected the request and reported a structured message.
    #[error("{0}")]
    Backend(String),
    /// The backend rejected the request without a usable body.
    #[error("{status} - {text}")]
    HttpStatus { status: u16, text: String },
    /// No response was received at all.
    #[error("Server error")]
    Transport(#[from] reqwest::Error),
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Decode a 2xx reply, or map anything else onto the error taxonomy.
/// A structured `{"error": …}` body wins over the bare status line.
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    res: reqwest::Response,
) -> std::result::Result<T, Error> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
            if !parsed.error.is_empty() {
                return Err(Error::Backend(parsed.error));
            }
        }
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            text: status.canonical_reason().unwrap_or("unknown").to_owned(),
        });
    }
    res.json().await.map_err(Error::Transport)
}
