// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Client-visible error classes. The body of every failure is `{ "message": ... }`,
/// the class only decides the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Authentication,
    Unauthorized,
    NotFound,
    Server,
}

impl ErrorClass {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorClass::Validation | ErrorClass::Authentication => StatusCode::BAD_REQUEST,
            ErrorClass::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorClass::NotFound => StatusCode::NOT_FOUND,
            ErrorClass::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

pub struct ApiResponse;

impl ApiResponse {
    /// `{ "<key>": data }` with 200, used by the public read endpoints.
    pub fn resource<T: Serialize>(key: &str, data: T) -> HttpResponse {
        Self::envelope(StatusCode::OK, None, key, data)
    }

    /// `{ "message": ..., "<key>": data }` with 201.
    pub fn created<T: Serialize>(message: &str, key: &str, data: T) -> HttpResponse {
        Self::envelope(StatusCode::CREATED, Some(message), key, data)
    }

    /// `{ "message": ..., "<key>": data }` with 200.
    pub fn updated<T: Serialize>(message: &str, key: &str, data: T) -> HttpResponse {
        Self::envelope(StatusCode::OK, Some(message), key, data)
    }

    pub fn deleted(message: &str, id: Uuid) -> HttpResponse {
        Self::envelope(StatusCode::OK, Some(message), "id", id)
    }

    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    fn envelope<T: Serialize>(
        status: StatusCode,
        message: Option<&str>,
        key: &str,
        data: T,
    ) -> HttpResponse {
        let data = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, key, "Failed to serialize response payload");
                return Self::server_error("Server Error");
            }
        };

        let mut body = Map::new();
        if let Some(message) = message {
            body.insert("message".to_string(), Value::String(message.to_string()));
        }
        body.insert(key.to_string(), data);

        HttpResponse::build(status).json(Value::Object(body))
    }

    pub fn error(class: ErrorClass, message: &str) -> HttpResponse {
        HttpResponse::build(class.status()).json(MessageBody { message })
    }

    pub fn validation_error(message: &str) -> HttpResponse {
        Self::error(ErrorClass::Validation, message)
    }

    pub fn authentication_error(message: &str) -> HttpResponse {
        Self::error(ErrorClass::Authentication, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(ErrorClass::Unauthorized, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(ErrorClass::NotFound, message)
    }

    pub fn server_error(message: &str) -> HttpResponse {
        Self::error(ErrorClass::Server, message)
    }
}
