use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::categories::{AddCategoryForm, AddCategoryFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::categories::{
    add_categories as add_categories_service, add_category as add_category_service,
    delete_category as delete_category_service, show_categories as show_categories_service,
};

#[get("/api/Category")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err),
    }
}

#[post("/api/Category")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match add_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/Category/{}", category.id)))
            .json(category),
        Err(err) => error_response(err),
    }
}

#[post("/api/Category/createMany")]
pub async fn add_categories(
    repo: web::Data<DieselRepository>,
    web::Json(forms): web::Json<Vec<AddCategoryForm>>,
) -> impl Responder {
    let payloads = match forms
        .into_iter()
        .map(AddCategoryFormPayload::try_from)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(payloads) => payloads,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match add_categories_service(payloads, repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err),
    }
}

#[delete("/api/Category/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category_service(&category_id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
