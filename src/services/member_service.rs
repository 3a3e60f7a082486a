use crate::{
    database::client::Db,
    entities::{
        designer_entity::DesignerDbService, member_entity::MemberDbService,
        product_entity::ProductDbService,
    },
    likes::{LikeDispatcher, LikeTarget},
    middleware::error::AppResult,
    models::view::{
        designer::LikedDesignerView,
        member::{MemberDetailView, MemberInfoView},
        product::LikedProductView,
    },
};

pub struct MemberService<'a> {
    members_repository: MemberDbService<'a>,
    designers_repository: DesignerDbService<'a>,
    products_repository: ProductDbService<'a>,
    likes: &'a LikeDispatcher,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a Db, likes: &'a LikeDispatcher) -> Self {
        Self {
            members_repository: MemberDbService { db },
            designers_repository: DesignerDbService { db },
            products_repository: ProductDbService { db },
            likes,
        }
    }

    pub async fn retrieve_info(&self, member_id: i64) -> AppResult<MemberInfoView> {
        self.members_repository.get_view(member_id).await
    }

    pub async fn retrieve_detail(&self, member_id: i64) -> AppResult<MemberDetailView> {
        self.members_repository.get_view(member_id).await
    }

    pub async fn check_liked(
        &self,
        member_id: i64,
        target_id: i64,
        target: LikeTarget,
    ) -> AppResult<bool> {
        self.members_repository.must_exist(member_id).await?;
        self.likes.exists(member_id, target_id, target).await
    }

    pub async fn retrieve_liked_designers(&self, member_id: i64) -> AppResult<Vec<LikedDesignerView>> {
        self.members_repository.must_exist(member_id).await?;
        self.designers_repository.get_liked_by_member(member_id).await
    }

    pub async fn retrieve_liked_products(&self, member_id: i64) -> AppResult<Vec<LikedProductView>> {
        self.members_repository.must_exist(member_id).await?;
        self.products_repository.get_liked_by_member(member_id).await
    }
}
