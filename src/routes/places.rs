use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::forms::places::{PlaceForm, PlaceFormPayload};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::places::{
    add_place as add_place_service, add_places as add_places_service,
    delete_place as delete_place_service, search_places_by_name as search_places_by_name_service,
    show_place as show_place_service, show_places as show_places_service,
    show_places_by_category as show_places_by_category_service,
    show_places_by_category_and_name as show_places_by_category_and_name_service,
    show_places_page as show_places_page_service, show_ranked_places as show_ranked_places_service,
    update_place as update_place_service,
};

#[derive(Deserialize, Debug)]
pub struct SearchByNameParams {
    pub name: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAndNameParams {
    pub category_id: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageParams {
    fn resolve(&self) -> (i64, i64) {
        (
            self.page_number.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_ITEMS_PER_PAGE as i64),
        )
    }
}

#[get("/api/Place")]
pub async fn show_places(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_places_service(repo.get_ref()) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(err),
    }
}

#[get("/api/Place/search-by-name")]
pub async fn search_places_by_name(
    params: web::Query<SearchByNameParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_places_by_name_service(&params.name, repo.get_ref()) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(err),
    }
}

#[get("/api/Place/byCategory/{category_id}")]
pub async fn show_places_by_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_places_by_category_service(&category_id, repo.get_ref()) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(err),
    }
}

#[get("/api/Place/byCategoryAndName")]
pub async fn show_places_by_category_and_name(
    params: web::Query<CategoryAndNameParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_places_by_category_and_name_service(
        &params.category_id,
        &params.name,
        repo.get_ref(),
    ) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(err),
    }
}

#[get("/api/Place/paged")]
pub async fn show_places_page(
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, per_page) = params.resolve();
    match show_places_page_service(page, per_page, repo.get_ref()) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(err),
    }
}

#[get("/api/Place/ranked")]
pub async fn show_ranked_places(
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (page, per_page) = params.resolve();
    match show_ranked_places_service(page, per_page, repo.get_ref()) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(err),
    }
}

#[get("/api/Place/{place_id}")]
pub async fn show_place(
    place_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_place_service(&place_id, repo.get_ref()) {
        Ok(place) => HttpResponse::Ok().json(place),
        Err(err) => error_response(err),
    }
}

#[post("/api/Place")]
pub async fn add_place(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PlaceForm>,
) -> impl Responder {
    let payload: PlaceFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match add_place_service(payload, repo.get_ref()) {
        Ok(place) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/Place/{}", place.id)))
            .json(place),
        Err(err) => error_response(err),
    }
}

#[post("/api/Place/createMany")]
pub async fn add_places(
    repo: web::Data<DieselRepository>,
    web::Json(forms): web::Json<Vec<PlaceForm>>,
) -> impl Responder {
    let payloads = match forms
        .into_iter()
        .map(PlaceFormPayload::try_from)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(payloads) => payloads,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match add_places_service(payloads, repo.get_ref()) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(err),
    }
}

#[put("/api/Place/{place_id}")]
pub async fn update_place(
    place_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PlaceForm>,
) -> impl Responder {
    let payload: PlaceFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match update_place_service(&place_id, payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/api/Place/{place_id}")]
pub async fn delete_place(
    place_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_place_service(&place_id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
