//! Errors surfaced at the HTTP boundary.
//!
//! Domain errors stay free of HTTP concerns; `ApiError` decides the status
//! code and renders the JSON body for actix-web.

use crate::{models::ErrorResponse, services::windchill::WindChillError};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A query parameter is missing or is not a finite decimal number
    #[error("{0}")]
    MalformedInput(String),

    /// An input lies outside its valid range
    #[error(transparent)]
    RangeViolation(#[from] WindChillError),
}

impl ApiError {
    pub fn missing_parameter(name: &str) -> Self {
        ApiError::MalformedInput(format!("Required query parameter '{name}' is missing"))
    }

    pub fn invalid_number(name: &str, raw: &str) -> Self {
        ApiError::MalformedInput(format!(
            "Query parameter '{name}' must be a finite decimal number, got '{raw}'"
        ))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::RangeViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Client Error")
                .to_string(),
            message: self.to_string(),
        })
    }
}

/// Parse a required query parameter as a finite `f64`
pub fn parse_number(name: &str, raw: Option<&str>) -> Result<f64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::missing_parameter(name))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::missing_parameter(name));
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ApiError::invalid_number(name, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("pt", Some("1")).unwrap(), 1.0);
        assert_eq!(parse_number("pt", Some(" -12.5 ")).unwrap(), -12.5);
        assert_eq!(parse_number("wg", Some("2.5e1")).unwrap(), 25.0);
    }

    #[test]
    fn test_parse_number_rejects_bad_input() {
        for raw in [None, Some(""), Some("  "), Some("abc"), Some("1,5"), Some("NaN"), Some("inf")] {
            let err = parse_number("pt", raw).unwrap_err();
            assert!(matches!(err, ApiError::MalformedInput(_)), "input {raw:?}");
            assert!(err.to_string().contains("'pt'"));
        }
    }

    #[test]
    fn test_status_codes() {
        let malformed = ApiError::missing_parameter("wg");
        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);

        let range = ApiError::from(WindChillError::TemperatureOutOfRange {
            value: 12.0,
            min: -50.0,
            max: 10.0,
        });
        assert_eq!(range.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let err = ApiError::from(WindChillError::WindSpeedOutOfRange {
            value: 3.0,
            min: 5.0,
            max: 60.0,
        });
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Unprocessable Entity");
        assert!(json["message"].as_str().unwrap().contains("3.0"));
    }
}
