use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::FieldError;
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::accounts::get_accounts,
        handlers::accounts::get_account,
        handlers::accounts::update_account,
        handlers::accounts::delete_account,
        handlers::accounts::bulk_delete_accounts,
        handlers::gift_codes::get_gift_codes,
        handlers::gift_codes::create_gift_code,
        handlers::gift_codes::get_gift_code,
        handlers::gift_codes::update_gift_code,
        handlers::gift_codes::delete_gift_code,
        handlers::milestones::get_milestones,
        handlers::milestones::create_milestone,
        handlers::milestones::get_milestone,
        handlers::milestones::update_milestone,
        handlers::milestones::delete_milestone,
        handlers::shop::get_shop_items,
        handlers::shop::create_shop_item,
        handlers::shop::get_shop_item,
        handlers::shop::update_shop_item,
        handlers::shop::delete_shop_item,
        handlers::catalog::get_tabs,
        handlers::catalog::get_item_templates,
        handlers::catalog::get_item_options,
    ),
    components(
        schemas(
            AccountSummary,
            AccountDetail,
            UpdateAccountRequest,
            BulkDeleteRequest,
            GiftCode,
            CreateGiftCodeRequest,
            UpdateGiftCodeRequest,
            GiftItem,
            GiftItemOption,
            Milestone,
            CreateMilestoneRequest,
            UpdateMilestoneRequest,
            RewardItem,
            RewardItemOption,
            ShopItem,
            ShopOption,
            ShopOptionInput,
            CreateShopItemRequest,
            UpdateShopItemRequest,
            Tab,
            ItemTemplate,
            ItemOptionTemplate,
            FieldError,
        )
    ),
    tags(
        (name = "accounts", description = "Game account administration"),
        (name = "gift-codes", description = "Gift code management"),
        (name = "milestones", description = "Top-up milestone management"),
        (name = "shop", description = "Shop catalog management"),
        (name = "catalog", description = "Tabs and item template lookups"),
    ),
    info(
        title = "NRO Admin Backend API",
        version = "1.0.0",
        description = "Administration REST API for the game live-service economy"
    ),
    servers(
        (url = "/api/admin", description = "Admin API root")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
