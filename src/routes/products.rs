use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::{CtxError, CtxResult};
use crate::middleware::extractors::{ApiPath, ApiQuery};
use crate::middleware::mw_ctx::CtxState;
use crate::models::response::BaseResponse;
use crate::models::view::product::{ProductDetailView, ProductSearchView};
use crate::services::product_service::ProductService;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/v1/products/search", get(search_products))
        .route("/api/v1/products/:product_id", get(get_product_detail))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchProductsQuery {
    pub keyword: String,
}

async fn get_product_detail(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiPath(product_id): ApiPath<i64>,
) -> CtxResult<Json<BaseResponse<ProductDetailView>>> {
    let product = ProductService::new(&ctx_state.db.client)
        .retrieve_detail(product_id)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(product)))
}

async fn search_products(
    ctx: Ctx,
    State(ctx_state): State<Arc<CtxState>>,
    ApiQuery(query): ApiQuery<SearchProductsQuery>,
) -> CtxResult<Json<BaseResponse<Vec<ProductSearchView>>>> {
    let products = ProductService::new(&ctx_state.db.client)
        .search(&query.keyword)
        .await
        .map_err(CtxError::from(&ctx))?;

    Ok(Json(BaseResponse::ok(products)))
}
