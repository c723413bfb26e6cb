use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::forms::reviews::{ReviewForm, ReviewFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::reviews::{
    add_review as add_review_service, add_reviews as add_reviews_service,
    delete_review as delete_review_service, show_place_reviews as show_place_reviews_service,
    show_reviews as show_reviews_service, update_review as update_review_service,
};

#[derive(Deserialize, Debug)]
pub struct PlaceReviewsParams {
    /// Newest first unless explicitly disabled.
    pub sorted: Option<bool>,
}

#[get("/api/Review")]
pub async fn show_reviews(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_reviews_service(repo.get_ref()) {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(err) => error_response(err),
    }
}

#[get("/api/Review/place/{place_id}")]
pub async fn show_place_reviews(
    place_id: web::Path<String>,
    params: web::Query<PlaceReviewsParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let sorted = params.sorted.unwrap_or(true);
    match show_place_reviews_service(&place_id, sorted, repo.get_ref()) {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(err) => error_response(err),
    }
}

#[post("/api/Review")]
pub async fn add_review(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ReviewForm>,
) -> impl Responder {
    let payload: ReviewFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match add_review_service(payload, repo.get_ref()) {
        Ok(review) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/api/Review/place/{}", review.place_id),
            ))
            .json(review),
        Err(err) => error_response(err),
    }
}

#[post("/api/Review/createMany")]
pub async fn add_reviews(
    repo: web::Data<DieselRepository>,
    web::Json(forms): web::Json<Vec<ReviewForm>>,
) -> impl Responder {
    let payloads = match forms
        .into_iter()
        .map(ReviewFormPayload::try_from)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(payloads) => payloads,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match add_reviews_service(payloads, repo.get_ref()) {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(err) => error_response(err),
    }
}

#[put("/api/Review/{review_id}")]
pub async fn update_review(
    review_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ReviewForm>,
) -> impl Responder {
    let payload: ReviewFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match update_review_service(&review_id, payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/api/Review/delete/{review_id}")]
pub async fn delete_review(
    review_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_review_service(&review_id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
