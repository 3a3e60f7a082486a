use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::entities::designer_entity::DesignerDbService;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{CtxError, CtxResult};
use crate::middleware::extractors::ApiPath;
use crate::middleware::mw_ctx::CtxState;
use crate::models::response::BaseResponse;
use crate::models::view::designer::DesignerView;
use crate::models::view::product::ProductInfoView;
use crate::services::product_service::ProductService;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/v1/designers/:designer_id/info", get(get_designer_info))
        .route(
            "/api/v1/designers/:designer_id/products",
            get(get_designer_products),
        )
}

async fn get_designer_info(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiPath(designer_id): ApiPath<i64>,
) -> CtxResult<Json<BaseResponse<DesignerView>>> {
    let designer = DesignerDbService {
        db: &ctx_state.db.client,
    }
    .get_view::<DesignerView>(designer_id)
    .await
    .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(designer)))
}

async fn get_designer_products(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiPath(designer_id): ApiPath<i64>,
) -> CtxResult<Json<BaseResponse<Vec<ProductInfoView>>>> {
    let products = ProductService::new(&ctx_state.db.client)
        .retrieve_all_by_designer(designer_id)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(products)))
}
