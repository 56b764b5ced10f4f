use crate::models::*;
use crate::services::GiftCodeService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/gift-codes",
    tag = "gift-codes",
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("pageSize" = Option<u64>, Query, description = "Rows per page, max 100"),
        ("search" = Option<String>, Query, description = "Code substring"),
        ("status" = Option<String>, Query, description = "Status filter (0/1), or 'all'")
    ),
    responses(
        (status = 200, description = "Paginated gift code list")
    )
)]
pub async fn get_gift_codes(
    gift_code_service: web::Data<GiftCodeService>,
    query: web::Query<GiftCodeListQuery>,
) -> Result<HttpResponse> {
    match gift_code_service.list(&query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": page
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/gift-codes",
    tag = "gift-codes",
    request_body = CreateGiftCodeRequest,
    responses(
        (status = 201, description = "Gift code created", body = GiftCode),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Code already exists")
    )
)]
pub async fn create_gift_code(
    gift_code_service: web::Data<GiftCodeService>,
    request: web::Json<CreateGiftCodeRequest>,
) -> Result<HttpResponse> {
    match gift_code_service.create(request.into_inner()).await {
        Ok(code) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": code,
            "message": "Gift code created successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/gift-codes/{id}",
    tag = "gift-codes",
    params(("id" = i64, Path, description = "Gift code id")),
    responses(
        (status = 200, description = "Gift code detail", body = GiftCode),
        (status = 404, description = "Gift code not found")
    )
)]
pub async fn get_gift_code(
    gift_code_service: web::Data<GiftCodeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match gift_code_service.get(path.into_inner()).await {
        Ok(code) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": code
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/gift-codes/{id}",
    tag = "gift-codes",
    params(("id" = i64, Path, description = "Gift code id")),
    request_body = UpdateGiftCodeRequest,
    responses(
        (status = 200, description = "Gift code updated", body = GiftCode),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Gift code not found"),
        (status = 409, description = "Code already exists")
    )
)]
pub async fn update_gift_code(
    gift_code_service: web::Data<GiftCodeService>,
    path: web::Path<i64>,
    request: web::Json<UpdateGiftCodeRequest>,
) -> Result<HttpResponse> {
    match gift_code_service
        .update(path.into_inner(), request.into_inner())
        .await
    {
        Ok(code) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": code,
            "message": "Gift code updated successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/gift-codes/{id}",
    tag = "gift-codes",
    params(("id" = i64, Path, description = "Gift code id")),
    responses(
        (status = 200, description = "Gift code and its redemption history deleted"),
        (status = 404, description = "Gift code not found")
    )
)]
pub async fn delete_gift_code(
    gift_code_service: web::Data<GiftCodeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match gift_code_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Gift code deleted successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn gift_codes_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/gift-codes")
            .route("", web::get().to(get_gift_codes))
            .route("", web::post().to(create_gift_code))
            .route("/{id}", web::get().to(get_gift_code))
            .route("/{id}", web::put().to(update_gift_code))
            .route("/{id}", web::delete().to(delete_gift_code)),
    );
}
