use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::{CtxError, CtxResult};
use crate::middleware::extractors::ApiPath;
use crate::middleware::mw_ctx::CtxState;
use crate::models::response::BaseResponse;
use crate::models::view::like::LikeResponse;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new().route("/api/v1/likes/:target/:target_id", post(toggle_like))
}

/// Toggle by target tag, e.g. `/api/v1/likes/designer/7`.
async fn toggle_like(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiPath((target, target_id)): ApiPath<(String, i64)>,
) -> CtxResult<Json<BaseResponse<LikeResponse>>> {
    let member_id = ctx.member_id()?;
    let result = ctx_state
        .likes
        .handle(member_id, target_id, &target)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(result.into())))
}
