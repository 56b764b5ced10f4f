use crate::models::*;
use crate::services::AccountService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/accounts",
    tag = "accounts",
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("pageSize" = Option<u64>, Query, description = "Rows per page, max 100"),
        ("search" = Option<String>, Query, description = "Username substring"),
        ("ban" = Option<String>, Query, description = "Ban state filter, or 'all'")
    ),
    responses(
        (status = 200, description = "Paginated account list")
    )
)]
pub async fn get_accounts(
    account_service: web::Data<AccountService>,
    query: web::Query<AccountListQuery>,
) -> Result<HttpResponse> {
    match account_service.list(&query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": page
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = "accounts",
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account detail", body = AccountDetail),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account(
    account_service: web::Data<AccountService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match account_service.get(path.into_inner()).await {
        Ok(account) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": account
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/accounts/{id}",
    tag = "accounts",
    params(("id" = i32, Path, description = "Account id")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = AccountDetail),
        (status = 404, description = "Account not found")
    )
)]
pub async fn update_account(
    account_service: web::Data<AccountService>,
    path: web::Path<i32>,
    request: web::Json<UpdateAccountRequest>,
) -> Result<HttpResponse> {
    match account_service
        .update(path.into_inner(), request.into_inner())
        .await
    {
        Ok(account) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": account,
            "message": "Account updated successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    tag = "accounts",
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account and its player rows deleted"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn delete_account(
    account_service: web::Data<AccountService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match account_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Account deleted successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/accounts/bulk-delete",
    tag = "accounts",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Accounts deleted"),
        (status = 400, description = "Empty id list")
    )
)]
pub async fn bulk_delete_accounts(
    account_service: web::Data<AccountService>,
    request: web::Json<BulkDeleteRequest>,
) -> Result<HttpResponse> {
    match account_service.bulk_delete(&request.ids).await {
        Ok(count) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": { "count": count },
            "message": format!("{count} account(s) deleted successfully")
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn accounts_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .route("", web::get().to(get_accounts))
            .route("/bulk-delete", web::post().to(bulk_delete_accounts))
            .route("/{id}", web::get().to(get_account))
            .route("/{id}", web::put().to(update_account))
            .route("/{id}", web::delete().to(delete_account)),
    );
}
