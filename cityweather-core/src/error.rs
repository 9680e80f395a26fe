use std::fmt;

use thiserror::Error;

/// Which remote call produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Geocoding,
    Weather,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::Weather => "weather",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum TransportCause {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Failure of a single geocoding or weather request.
///
/// An empty geocoding result is not an error and never shows up here.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("OpenWeather {endpoint} request failed with status {code}: {}", truncate_body(.body))]
    Remote {
        endpoint: Endpoint,
        code: u16,
        body: String,
    },

    #[error("OpenWeather {endpoint} request failed: {cause}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        cause: TransportCause,
    },
}

impl LookupError {
    pub fn transport(endpoint: Endpoint, cause: impl Into<TransportCause>) -> Self {
        LookupError::Transport {
            endpoint,
            cause: cause.into(),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            LookupError::Remote { endpoint, .. } | LookupError::Transport { endpoint, .. } => {
                *endpoint
            }
        }
    }

    /// HTTP status of a remote failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LookupError::Remote { code, .. } => Some(*code),
            LookupError::Transport { .. } => None,
        }
    }

    /// Short message suitable for a transient on-screen notification.
    pub fn notification(&self) -> String {
        match self {
            LookupError::Remote {
                endpoint: Endpoint::Geocoding,
                ..
            } => "Failed to get coordinates".to_string(),
            LookupError::Remote {
                endpoint: Endpoint::Weather,
                ..
            } => "Failed to get weather data".to_string(),
            LookupError::Transport { cause, .. } => cause.to_string(),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_display_truncates_long_bodies() {
        let err = LookupError::Remote {
            endpoint: Endpoint::Weather,
            code: 500,
            body: "x".repeat(500),
        };

        let msg = err.to_string();
        assert!(msg.starts_with("OpenWeather weather request failed with status 500: "));
        assert!(msg.ends_with("..."));
        assert!(msg.len() < 300);
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
    }

    #[test]
    fn notification_depends_on_endpoint() {
        let geo = LookupError::Remote {
            endpoint: Endpoint::Geocoding,
            code: 401,
            body: String::new(),
        };
        let weather = LookupError::Remote {
            endpoint: Endpoint::Weather,
            code: 404,
            body: String::new(),
        };

        assert_eq!(geo.notification(), "Failed to get coordinates");
        assert_eq!(weather.notification(), "Failed to get weather data");
        assert_eq!(geo.status_code(), Some(401));
        assert_eq!(weather.endpoint(), Endpoint::Weather);
    }

    #[test]
    fn decode_failure_is_a_transport_error() {
        let cause = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = LookupError::transport(Endpoint::Geocoding, cause);

        assert_eq!(err.status_code(), None);
        assert!(err.to_string().starts_with("OpenWeather geocoding request failed: "));
        assert!(!err.notification().is_empty());
    }
}
