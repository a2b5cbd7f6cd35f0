use reqwest::StatusCode;
use thiserror::Error;

pub mod nominatim;
pub mod open_meteo;

pub use nominatim::Nominatim;
pub use open_meteo::OpenMeteo;

/// Failure of a single relay round trip to an upstream API.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream answered, but with a non-success status.
    #[error("upstream returned status {status}")]
    Status { status: StatusCode, body: String },

    /// The request never completed (connect failure, body read failure, ...).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered 2xx but the body was not valid JSON.
    #[error("failed to decode upstream JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RelayError {
    /// Text placed in the `reason` field of the in-band error envelope.
    ///
    /// For status failures this is the raw upstream body, so the caller sees
    /// exactly what the upstream said; otherwise it is the error display.
    pub fn reason(&self) -> String {
        match self {
            RelayError::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

/// Truncate a response body for log output. Upstream bodies can be large and
/// belong in the envelope, not in the log stream.
pub fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Upstream bodies are arbitrary text; the cut must land on a char
    // boundary or slicing panics mid-codepoint.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reason_is_raw_upstream_body() {
        let err = RelayError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "{\"detail\":\"boom\"}".to_string(),
        };

        assert_eq!(err.reason(), "{\"detail\":\"boom\"}");
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn decode_reason_is_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = RelayError::from(json_err);

        assert!(err.reason().contains("failed to decode upstream JSON"));
    }

    #[test]
    fn truncate_body_leaves_short_bodies_alone() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn truncate_body_backs_off_to_a_char_boundary() {
        // 'é' is two bytes and straddles the 200-byte cut point.
        let long = format!("{}é{}", "a".repeat(199), "b".repeat(100));
        let truncated = truncate_body(&long);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated, format!("{}...", "a".repeat(199)));
    }

    #[test]
    fn truncate_body_keeps_multibyte_bodies_under_the_limit_intact() {
        let short = "ä".repeat(100);
        assert_eq!(truncate_body(&short), short);
    }
}
