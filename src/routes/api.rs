use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;
use validator::Validate;

use crate::dto::api::{SearchParams, SearchRequest};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::search as search_service;

/// Searches artists by name, age and years active.
///
/// Omitted paging falls back to `offset=0&limit=20`. `limit` must be between
/// 1 and 100; larger pages are rejected with `400 Bad Request`.
#[get("/v1/artists")]
pub async fn api_v1_artists(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();

    if let Err(err) = params.validate() {
        log::warn!("Rejected artist search parameters: {err}");
        return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    }

    let request = match SearchRequest::try_from(params) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("Rejected artist search parameters: {err}");
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        }
    };

    match search_service::search_artists(
        repo.into_inner(),
        &request.criteria,
        request.sort,
        request.page,
    )
    .await
    {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => service_error_response(err, "Failed to search artists"),
    }
}

#[get("/v1/artists/ranges/age")]
pub async fn api_v1_artists_age_range(repo: web::Data<DieselRepository>) -> impl Responder {
    match search_service::age_range(repo.get_ref()) {
        Ok(range) => HttpResponse::Ok().json(range),
        Err(err) => service_error_response(err, "Failed to load age range"),
    }
}

#[get("/v1/artists/ranges/years_active")]
pub async fn api_v1_artists_years_active_range(
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_service::years_active_range(repo.get_ref()) {
        Ok(range) => HttpResponse::Ok().json(range),
        Err(err) => service_error_response(err, "Failed to load years active range"),
    }
}

#[get("/v1/artists/{artist_id}")]
pub async fn api_v1_artist(
    artist_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_service::find_artist(repo.get_ref(), artist_id.into_inner()) {
        Ok(artist) => HttpResponse::Ok().json(artist),
        Err(err) => service_error_response(err, "Failed to load artist"),
    }
}
