use crate::models::*;
use crate::services::ShopService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/shop",
    tag = "shop",
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("pageSize" = Option<u64>, Query, description = "Rows per page, max 100"),
        ("tabId" = Option<String>, Query, description = "Tab filter, or 'all'"),
        ("isSell" = Option<String>, Query, description = "true/false, or 'all'"),
        ("search" = Option<String>, Query, description = "Item template id")
    ),
    responses(
        (status = 200, description = "Paginated shop items with their options")
    )
)]
pub async fn get_shop_items(
    shop_service: web::Data<ShopService>,
    query: web::Query<ShopListQuery>,
) -> Result<HttpResponse> {
    match shop_service.list(&query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": page
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/shop",
    tag = "shop",
    request_body = CreateShopItemRequest,
    responses(
        (status = 201, description = "Shop item created", body = ShopItem),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_shop_item(
    shop_service: web::Data<ShopService>,
    request: web::Json<CreateShopItemRequest>,
) -> Result<HttpResponse> {
    match shop_service.create(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": item,
            "message": "Shop item created successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/shop/{id}",
    tag = "shop",
    params(("id" = i32, Path, description = "Shop item id")),
    responses(
        (status = 200, description = "Shop item with options", body = ShopItem),
        (status = 404, description = "Shop item not found")
    )
)]
pub async fn get_shop_item(
    shop_service: web::Data<ShopService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match shop_service.get(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": item
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/shop/{id}",
    tag = "shop",
    params(("id" = i32, Path, description = "Shop item id")),
    request_body = UpdateShopItemRequest,
    responses(
        (status = 200, description = "Shop item updated; a supplied option list replaces all stored options", body = ShopItem),
        (status = 404, description = "Shop item not found")
    )
)]
pub async fn update_shop_item(
    shop_service: web::Data<ShopService>,
    path: web::Path<i32>,
    request: web::Json<UpdateShopItemRequest>,
) -> Result<HttpResponse> {
    match shop_service
        .update(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": item,
            "message": "Shop item updated successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/shop/{id}",
    tag = "shop",
    params(("id" = i32, Path, description = "Shop item id")),
    responses(
        (status = 200, description = "Shop item and its options deleted"),
        (status = 404, description = "Shop item not found")
    )
)]
pub async fn delete_shop_item(
    shop_service: web::Data<ShopService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match shop_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Shop item deleted successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn shop_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shop")
            .route("", web::get().to(get_shop_items))
            .route("", web::post().to(create_shop_item))
            .route("/{id}", web::get().to(get_shop_item))
            .route("/{id}", web::put().to(update_shop_item))
            .route("/{id}", web::delete().to(delete_shop_item)),
    );
}
