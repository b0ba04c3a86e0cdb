use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, delete, get, post, put, web,
};
use payloads::{PropertyDetails, PropertyId};
use serde::Serialize;

use crate::store::{PropertyStore, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(list_properties)
        .service(get_property)
        .service(create_property)
        .service(update_property)
        .service(delete_property)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[tracing::instrument(skip(store))]
#[get("/properties")]
pub async fn list_properties(
    store: web::Data<PropertyStore>,
) -> Result<HttpResponse, APIError> {
    store.begin_request()?;
    Ok(HttpResponse::Ok().json(store.list()?))
}

#[tracing::instrument(skip(store), ret)]
#[get("/properties/{id}")]
pub async fn get_property(
    id: web::Path<i64>,
    store: web::Data<PropertyStore>,
) -> Result<HttpResponse, APIError> {
    store.begin_request()?;
    let property = store.get(PropertyId(id.into_inner()))?;
    Ok(HttpResponse::Ok().json(property))
}

#[tracing::instrument(skip(store), ret)]
#[post("/properties")]
pub async fn create_property(
    details: web::Json<PropertyDetails>,
    store: web::Data<PropertyStore>,
) -> Result<HttpResponse, APIError> {
    store.begin_request()?;
    let property = store.create(details.into_inner())?;
    Ok(HttpResponse::Created().json(property))
}

#[tracing::instrument(skip(store), ret)]
#[put("/properties/{id}")]
pub async fn update_property(
    id: web::Path<i64>,
    details: web::Json<PropertyDetails>,
    store: web::Data<PropertyStore>,
) -> Result<HttpResponse, APIError> {
    store.begin_request()?;
    let property =
        store.update(PropertyId(id.into_inner()), details.into_inner())?;
    Ok(HttpResponse::Ok().json(property))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/properties/{id}")]
pub async fn delete_property(
    id: web::Path<i64>,
    store: web::Data<PropertyStore>,
) -> Result<HttpResponse, APIError> {
    store.begin_request()?;
    store.delete(PropertyId(id.into_inner()))?;
    Ok(HttpResponse::NoContent().finish())
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Property not found")]
    NotFound,
    #[error("Something went wrong")]
    UnexpectedError(#[source] StoreError),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = ErrorBody {
            error: self.to_string(),
        };
        match self {
            Self::NotFound => HttpResponse::NotFound().json(body),
            Self::UnexpectedError(e) => {
                tracing::error!("{e}");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::PropertyNotFound => APIError::NotFound,
            StoreError::Unavailable | StoreError::Poisoned => {
                APIError::UnexpectedError(e)
            }
        }
    }
}
