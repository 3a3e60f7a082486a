use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::likes::LikeTarget;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{CtxError, CtxResult};
use crate::middleware::extractors::{ApiPath, ApiQuery};
use crate::middleware::mw_ctx::CtxState;
use crate::models::response::BaseResponse;
use crate::models::view::designer::LikedDesignerView;
use crate::models::view::like::{LikeExistenceResponse, LikeResponse};
use crate::models::view::member::{MemberDetailView, MemberInfoView};
use crate::models::view::product::LikedProductView;
use crate::services::member_service::MemberService;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/v1/members/:member_id/info", get(get_member_info))
        .route("/api/v1/members/detail", get(get_member_detail))
        .route(
            "/api/v1/members/likes/designer",
            get(get_liked_designers).post(like_designer),
        )
        .route(
            "/api/v1/members/likes/designer/:designer_id",
            get(check_liked_designer),
        )
        .route(
            "/api/v1/members/likes/product",
            get(get_liked_products).post(like_product),
        )
        .route(
            "/api/v1/members/likes/product/:product_id",
            get(check_liked_product),
        )
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DesignerLikeQuery {
    #[serde(rename = "designer-id")]
    pub designer_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductLikeQuery {
    #[serde(rename = "product-id")]
    pub product_id: i64,
}

async fn get_member_info(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiPath(member_id): ApiPath<i64>,
) -> CtxResult<Json<BaseResponse<MemberInfoView>>> {
    let info = MemberService::new(&ctx_state.db.client, &ctx_state.likes)
        .retrieve_info(member_id)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(info)))
}

async fn get_member_detail(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<BaseResponse<MemberDetailView>>> {
    let member_id = ctx.member_id()?;
    let detail = MemberService::new(&ctx_state.db.client, &ctx_state.likes)
        .retrieve_detail(member_id)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(detail)))
}

async fn like_designer(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiQuery(query): ApiQuery<DesignerLikeQuery>,
) -> CtxResult<Json<BaseResponse<LikeResponse>>> {
    let member_id = ctx.member_id()?;
    let result = ctx_state
        .likes
        .handle_target(member_id, query.designer_id, LikeTarget::Designer)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(result.into())))
}

async fn like_product(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiQuery(query): ApiQuery<ProductLikeQuery>,
) -> CtxResult<Json<BaseResponse<LikeResponse>>> {
    let member_id = ctx.member_id()?;
    let result = ctx_state
        .likes
        .handle_target(member_id, query.product_id, LikeTarget::Product)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(result.into())))
}

async fn check_liked_designer(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiPath(designer_id): ApiPath<i64>,
) -> CtxResult<Json<BaseResponse<LikeExistenceResponse>>> {
    check_liked(&ctx, &ctx_state, designer_id, LikeTarget::Designer).await
}

async fn check_liked_product(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiPath(product_id): ApiPath<i64>,
) -> CtxResult<Json<BaseResponse<LikeExistenceResponse>>> {
    check_liked(&ctx, &ctx_state, product_id, LikeTarget::Product).await
}

async fn check_liked(
    ctx: &Ctx,
    ctx_state: &CtxState,
    target_id: i64,
    target: LikeTarget,
) -> CtxResult<Json<BaseResponse<LikeExistenceResponse>>> {
    let member_id = ctx.member_id()?;
    let liked = MemberService::new(&ctx_state.db.client, &ctx_state.likes)
        .check_liked(member_id, target_id, target)
        .await
        .map_err(CtxError::from(ctx))?;

    Ok(Json(BaseResponse::ok(LikeExistenceResponse { liked })))
}

async fn get_liked_designers(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<BaseResponse<Vec<LikedDesignerView>>>> {
    let member_id = ctx.member_id()?;
    let designers = MemberService::new(&ctx_state.db.client, &ctx_state.likes)
        .retrieve_liked_designers(member_id)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(designers)))
}

async fn get_liked_products(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
) -> CtxResult<Json<BaseResponse<Vec<LikedProductView>>>> {
    let member_id = ctx.member_id()?;
    let products = MemberService::new(&ctx_state.db.client, &ctx_state.likes)
        .retrieve_liked_products(member_id)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(products)))
}
