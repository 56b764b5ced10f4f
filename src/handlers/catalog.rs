use crate::models::*;
use crate::services::CatalogService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/tabs",
    tag = "catalog",
    responses(
        (status = 200, description = "All shop tabs")
    )
)]
pub async fn get_tabs(catalog_service: web::Data<CatalogService>) -> Result<HttpResponse> {
    match catalog_service.tabs().await {
        Ok(tabs) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tabs
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/item-templates",
    tag = "catalog",
    params(
        ("ids" = Option<String>, Query, description = "Comma-separated template ids"),
        ("search" = Option<String>, Query, description = "Name substring, or exact id when numeric")
    ),
    responses(
        (status = 200, description = "Matching item templates (capped at 100 without ids)")
    )
)]
pub async fn get_item_templates(
    catalog_service: web::Data<CatalogService>,
    query: web::Query<ItemTemplateQuery>,
) -> Result<HttpResponse> {
    match catalog_service.item_templates(&query).await {
        Ok(templates) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": templates
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/item-options",
    tag = "catalog",
    responses(
        (status = 200, description = "All item option templates")
    )
)]
pub async fn get_item_options(catalog_service: web::Data<CatalogService>) -> Result<HttpResponse> {
    match catalog_service.item_options().await {
        Ok(options) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": options
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn catalog_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/tabs", web::get().to(get_tabs))
        .route("/item-templates", web::get().to(get_item_templates))
        .route("/item-options", web::get().to(get_item_options));
}
