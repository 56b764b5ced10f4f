use crate::models::*;
use crate::services::MilestoneService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/milestones",
    tag = "milestones",
    responses(
        (status = 200, description = "All milestones, ordered by threshold")
    )
)]
pub async fn get_milestones(
    milestone_service: web::Data<MilestoneService>,
) -> Result<HttpResponse> {
    match milestone_service.list().await {
        Ok(milestones) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": milestones
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/milestones",
    tag = "milestones",
    request_body = CreateMilestoneRequest,
    responses(
        (status = 201, description = "Milestone created", body = Milestone),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Threshold already exists")
    )
)]
pub async fn create_milestone(
    milestone_service: web::Data<MilestoneService>,
    request: web::Json<CreateMilestoneRequest>,
) -> Result<HttpResponse> {
    match milestone_service.create(request.into_inner()).await {
        Ok(milestone) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": milestone,
            "message": "Milestone created successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/milestones/{id}",
    tag = "milestones",
    params(("id" = i32, Path, description = "Milestone id")),
    responses(
        (status = 200, description = "Milestone detail", body = Milestone),
        (status = 404, description = "Milestone not found")
    )
)]
pub async fn get_milestone(
    milestone_service: web::Data<MilestoneService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match milestone_service.get(path.into_inner()).await {
        Ok(milestone) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": milestone
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/milestones/{id}",
    tag = "milestones",
    params(("id" = i32, Path, description = "Milestone id")),
    request_body = UpdateMilestoneRequest,
    responses(
        (status = 200, description = "Milestone updated", body = Milestone),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Milestone not found"),
        (status = 409, description = "Threshold already exists")
    )
)]
pub async fn update_milestone(
    milestone_service: web::Data<MilestoneService>,
    path: web::Path<i32>,
    request: web::Json<UpdateMilestoneRequest>,
) -> Result<HttpResponse> {
    match milestone_service
        .update(path.into_inner(), request.into_inner())
        .await
    {
        Ok(milestone) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": milestone,
            "message": "Milestone updated successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/milestones/{id}",
    tag = "milestones",
    params(("id" = i32, Path, description = "Milestone id")),
    responses(
        (status = 200, description = "Milestone and its claim history deleted"),
        (status = 404, description = "Milestone not found")
    )
)]
pub async fn delete_milestone(
    milestone_service: web::Data<MilestoneService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match milestone_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Milestone deleted successfully"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn milestones_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/milestones")
            .route("", web::get().to(get_milestones))
            .route("", web::post().to(create_milestone))
            .route("/{id}", web::get().to(get_milestone))
            .route("/{id}", web::put().to(update_milestone))
            .route("/{id}", web::delete().to(delete_milestone)),
    );
}
