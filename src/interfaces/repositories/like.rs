use crate::middleware::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of flipping one (member, target) like relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_nr: u32,
}

#[async_trait]
pub trait LikesRepositoryInterface {
    /// Creates the relation and increments the target counter, or deletes it and
    /// decrements the counter (never below 0), as one transaction.
    async fn toggle(&self, member_id: i64, target_id: i64) -> AppResult<LikeToggle>;
    async fn exists(&self, member_id: i64, target_id: i64) -> AppResult<bool>;
}
