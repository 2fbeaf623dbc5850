// HTTP status classification for decorated errors

use serde::Serialize;

/// Error statuses an [`Error`](crate::Error) can be classified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpStatus {
    // 4xx Client Errors
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    UnprocessableEntity = 422,
    TooManyRequests = 429,

    // 5xx Server Errors
    InternalServerError = 500,
    ServiceUnavailable = 503,
}

impl HttpStatus {
    /// Get the numeric status code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for the status code
    pub fn reason(&self) -> &'static str {
        match self {
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::Unauthorized => "Unauthorized",
            HttpStatus::Forbidden => "Forbidden",
            HttpStatus::NotFound => "Not Found",
            HttpStatus::Conflict => "Conflict",
            HttpStatus::UnprocessableEntity => "Unprocessable Entity",
            HttpStatus::TooManyRequests => "Too Many Requests",
            HttpStatus::InternalServerError => "Internal Server Error",
            HttpStatus::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code())
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code())
    }

    /// Create status from u16 code
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            400 => Some(HttpStatus::BadRequest),
            401 => Some(HttpStatus::Unauthorized),
            403 => Some(HttpStatus::Forbidden),
            404 => Some(HttpStatus::NotFound),
            409 => Some(HttpStatus::Conflict),
            422 => Some(HttpStatus::UnprocessableEntity),
            429 => Some(HttpStatus::TooManyRequests),
            500 => Some(HttpStatus::InternalServerError),
            503 => Some(HttpStatus::ServiceUnavailable),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.code()
    }
}

impl Serialize for HttpStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprocessable_entity() {
        assert_eq!(HttpStatus::UnprocessableEntity.code(), 422);
        assert_eq!(
            HttpStatus::UnprocessableEntity.reason(),
            "Unprocessable Entity"
        );
        assert!(HttpStatus::UnprocessableEntity.is_client_error());
        assert!(!HttpStatus::UnprocessableEntity.is_server_error());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            HttpStatus::from_code(422),
            Some(HttpStatus::UnprocessableEntity)
        );
        assert_eq!(HttpStatus::from_code(503), Some(HttpStatus::ServiceUnavailable));
        assert_eq!(HttpStatus::from_code(200), None);
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(
            HttpStatus::UnprocessableEntity.to_string(),
            "422 Unprocessable Entity"
        );
        assert_eq!(
            serde_json::to_string(&HttpStatus::NotFound).unwrap(),
            "404"
        );
        assert_eq!(u16::from(HttpStatus::InternalServerError), 500);
    }
}
