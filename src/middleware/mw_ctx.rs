use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::client::Database;
use crate::likes::LikeDispatcher;

pub struct CtxState {
    pub db: Database,
    pub is_development: bool,
    pub likes: LikeDispatcher,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CtxState")
            .field("is_development", &self.is_development)
            .field("likes", &self.likes)
            .finish()
    }
}

pub fn create_ctx_state(db: Database, likes: LikeDispatcher, config: &AppConfig) -> Arc<CtxState> {
    Arc::new(CtxState {
        db,
        is_development: config.is_development,
        likes,
    })
}
