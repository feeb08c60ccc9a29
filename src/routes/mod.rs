use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Maps a service failure onto an HTTP response, logging server-side errors.
pub fn service_error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        err => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
