use std::sync::Arc;

use tracing::info;

use crate::likes::handler::LikeHandler;
use crate::likes::registry::LikeRegistry;
use crate::likes::{LikeResult, LikeTarget};
use crate::middleware::error::AppResult;

/// Single entry point for toggling likes, whatever the target kind.
#[derive(Debug, Clone)]
pub struct LikeDispatcher {
    registry: Arc<LikeRegistry>,
}

impl LikeDispatcher {
    pub fn new(registry: Arc<LikeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LikeRegistry {
        &self.registry
    }

    /// Resolves the handler for `tag` and toggles the like.
    pub async fn handle(&self, member_id: i64, target_id: i64, tag: &str) -> AppResult<LikeResult> {
        let handler = self.registry.lookup(tag)?;
        Self::dispatch(handler, member_id, target_id).await
    }

    pub async fn handle_target(
        &self,
        member_id: i64,
        target_id: i64,
        target: LikeTarget,
    ) -> AppResult<LikeResult> {
        let handler = self.registry.get(target)?;
        Self::dispatch(handler, member_id, target_id).await
    }

    pub async fn exists(&self, member_id: i64, target_id: i64, target: LikeTarget) -> AppResult<bool> {
        self.registry.get(target)?.exists(member_id, target_id).await
    }

    async fn dispatch(
        handler: &dyn LikeHandler,
        member_id: i64,
        target_id: i64,
    ) -> AppResult<LikeResult> {
        let toggle = handler.toggle(member_id, target_id).await?;
        info!(
            member_id,
            target_id,
            target = %handler.target(),
            liked = toggle.liked,
            like_count = toggle.likes_nr,
            "like toggled"
        );
        Ok(LikeResult {
            liked: toggle.liked,
            like_count: toggle.likes_nr,
        })
    }
}
