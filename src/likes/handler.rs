use std::sync::Arc;

use async_trait::async_trait;

use crate::database::client::Db;
use crate::entities::designer_entity::DesignerDbService;
use crate::entities::member_entity::MemberDbService;
use crate::entities::product_entity::ProductDbService;
use crate::interfaces::repositories::like::{LikeToggle, LikesRepositoryInterface};
use crate::likes::LikeTarget;
use crate::middleware::error::AppResult;

/// Per-target like persistence behind one shape.
///
/// `toggle` flips the (member, target) pair between NOT_LIKED and LIKED; the
/// relation change and the target's counter update commit together.
#[async_trait]
pub trait LikeHandler: Send + Sync {
    fn target(&self) -> LikeTarget;

    /// Fails with `EntityFailIdNotFound` when the member or the target does not exist.
    async fn toggle(&self, member_id: i64, target_id: i64) -> AppResult<LikeToggle>;

    async fn exists(&self, member_id: i64, target_id: i64) -> AppResult<bool>;
}

pub struct DesignerLikeHandler<L> {
    db: Arc<Db>,
    likes_repository: Arc<L>,
}

impl<L> DesignerLikeHandler<L>
where
    L: LikesRepositoryInterface + Send + Sync + 'static,
{
    pub fn new(db: Arc<Db>, likes_repository: Arc<L>) -> Self {
        Self {
            db,
            likes_repository,
        }
    }
}

#[async_trait]
impl<L> LikeHandler for DesignerLikeHandler<L>
where
    L: LikesRepositoryInterface + Send + Sync + 'static,
{
    fn target(&self) -> LikeTarget {
        LikeTarget::Designer
    }

    async fn toggle(&self, member_id: i64, designer_id: i64) -> AppResult<LikeToggle> {
        MemberDbService { db: &self.db }
            .must_exist(member_id)
            .await?;
        DesignerDbService { db: &self.db }
            .must_exist(designer_id)
            .await?;

        self.likes_repository.toggle(member_id, designer_id).await
    }

    async fn exists(&self, member_id: i64, designer_id: i64) -> AppResult<bool> {
        self.likes_repository.exists(member_id, designer_id).await
    }
}

pub struct ProductLikeHandler<L> {
    db: Arc<Db>,
    likes_repository: Arc<L>,
}

impl<L> ProductLikeHandler<L>
where
    L: LikesRepositoryInterface + Send + Sync + 'static,
{
    pub fn new(db: Arc<Db>, likes_repository: Arc<L>) -> Self {
        Self {
            db,
            likes_repository,
        }
    }
}

#[async_trait]
impl<L> LikeHandler for ProductLikeHandler<L>
where
    L: LikesRepositoryInterface + Send + Sync + 'static,
{
    fn target(&self) -> LikeTarget {
        LikeTarget::Product
    }

    async fn toggle(&self, member_id: i64, product_id: i64) -> AppResult<LikeToggle> {
        MemberDbService { db: &self.db }
            .must_exist(member_id)
            .await?;
        ProductDbService { db: &self.db }
            .must_exist(product_id)
            .await?;

        self.likes_repository.toggle(member_id, product_id).await
    }

    async fn exists(&self, member_id: i64, product_id: i64) -> AppResult<bool> {
        self.likes_repository.exists(member_id, product_id).await
    }
}
