use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::database::client::Database;
use crate::entities::designer_entity::{CreateDesigner, DesignerDbService};
use crate::entities::member_entity::{CreateMember, MemberDbService};
use crate::entities::product_entity::{CreateProduct, ProductDbService};
use crate::likes::{DesignerLikeHandler, LikeRegistry, LikeTarget, ProductLikeHandler};
use crate::middleware::error::AppResult;
use crate::middleware::mw_ctx::CtxState;
use crate::routes::{designers, likes, members, products};

pub async fn run_migrations(database: &Database) -> AppResult<()> {
    let db = database.client.clone();

    MemberDbService { db: &db }.mutate_db().await?;
    DesignerDbService { db: &db }.mutate_db().await?;
    ProductDbService { db: &db }.mutate_db().await?;
    database.run_migrations().await?;
    Ok(())
}

/// One handler per like target, each backed by its own relation table.
pub fn create_like_registry(database: &Database) -> LikeRegistry {
    let mut registry = LikeRegistry::new();
    registry.register(
        LikeTarget::Designer,
        Arc::new(DesignerLikeHandler::new(
            database.client.clone(),
            database.designer_likes.clone(),
        )),
    );
    registry.register(
        LikeTarget::Product,
        Arc::new(ProductLikeHandler::new(
            database.client.clone(),
            database.product_likes.clone(),
        )),
    );
    registry
}

pub async fn create_default_data_for_dev(ctx_state: &CtxState) -> AppResult<()> {
    if !ctx_state.is_development {
        return Ok(());
    }
    let db = &ctx_state.db.client;
    let members = MemberDbService { db };
    if members.exists(1).await? {
        return Ok(());
    }

    members
        .create(
            1,
            CreateMember {
                name: "Dev Member".to_string(),
                nickname: "dev".to_string(),
                email: "dev@cmc.local".to_string(),
                profile_img_url: None,
                introduce: None,
            },
        )
        .await?;
    DesignerDbService { db }
        .create(
            1,
            CreateDesigner {
                name: "Dev Designer".to_string(),
                profile_img_url: None,
                introduce: Some("seeded for local development".to_string()),
                categories: vec!["OUTER".to_string(), "TOP".to_string()],
            },
        )
        .await?;
    ProductDbService { db }
        .create(
            1,
            CreateProduct {
                designer_id: 1,
                name: "WOOL COAT".to_string(),
                tag: "OUTER".to_string(),
                price: 189000,
                thumbnail_urls: vec!["https://cdn.cmc.local/products/1/thumb.png".to_string()],
                description_urls: vec!["https://cdn.cmc.local/products/1/desc.png".to_string()],
            },
        )
        .await?;
    info!("->> development data created");
    Ok(())
}

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/hc", get(get_hc))
        .merge(members::routes())
        .merge(likes::routes())
        .merge(designers::routes())
        .merge(products::routes())
        .with_state(ctx_state.clone())
        .layer(TraceLayer::new_for_http())
}

async fn get_hc() -> Response {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}
