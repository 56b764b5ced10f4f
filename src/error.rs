use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use utoipa::ToSchema;

pub type AppResult<T> = Result<T, AppError>;

/// One violated rule, tied to the form field that caused it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Groups errors by field for the `details` object of the envelope,
/// preserving the order in which the rules were evaluated.
pub fn group_by_field(errors: &[FieldError]) -> Map<String, Value> {
    let mut details = Map::new();
    for err in errors {
        match details
            .entry(err.field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(messages) => messages.push(Value::String(err.message.clone())),
            _ => unreachable!(),
        }
    }
    details
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation failed")]
    ValidationError(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a single-field validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![FieldError::new(field, message)])
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationError(errors) => {
                log::warn!("Validation failed: {errors:?}");
                HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "error": "VALIDATION_ERROR",
                    "message": "Validation failed",
                    "details": group_by_field(errors),
                }))
            }
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "error": "NOT_FOUND",
                "message": msg,
            })),
            AppError::DuplicateEntry(msg) => {
                log::warn!("Duplicate entry: {msg}");
                HttpResponse::Conflict().json(json!({
                    "success": false,
                    "error": "DUPLICATE_ENTRY",
                    "message": msg,
                }))
            }
            // Store and serialization failures are reported generically;
            // the detail goes to the log only.
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "error": "DATABASE_ERROR",
                    "message": "Database error",
                }))
            }
            _ => {
                log::error!("Internal error: {self}");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "error": "DATABASE_ERROR",
                    "message": "Internal server error",
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_messages_by_field_in_order() {
        let errors = vec![
            FieldError::new("code", "Code is required"),
            FieldError::new("gold", "Gold must be non-negative"),
            FieldError::new("code", "Code must be alphanumeric only"),
        ];
        let details = group_by_field(&errors);
        assert_eq!(details.len(), 2);
        assert_eq!(
            details["code"],
            json!(["Code is required", "Code must be alphanumeric only"])
        );
        assert_eq!(details["gold"], json!(["Gold must be non-negative"]));
    }

    #[test]
    fn validation_error_maps_to_400_with_details() {
        let err = AppError::validation("required", "Required amount must be greater than 0");
        let resp = err.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
