use crate::database::client::Db;
use crate::database::table_names::{
    DESIGNER_TABLE_NAME, LIKE_DESIGNER_TABLE_NAME, LIKE_PRODUCT_TABLE_NAME, MEMBER_TABLE_NAME,
    PRODUCT_TABLE_NAME,
};
use crate::interfaces::repositories::like::{LikeToggle, LikesRepositoryInterface};
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Like relations from members to one kind of target, stored in a SurrealDB relation table.
#[derive(Debug)]
pub struct LikesRepository {
    client: Arc<Db>,
    relation_table: &'static str,
    target_table: &'static str,
}

impl LikesRepository {
    pub fn new(client: Arc<Db>, relation_table: &'static str, target_table: &'static str) -> Self {
        Self {
            client,
            relation_table,
            target_table,
        }
    }

    pub fn designers(client: Arc<Db>) -> Self {
        Self::new(client, LIKE_DESIGNER_TABLE_NAME, DESIGNER_TABLE_NAME)
    }

    pub fn products(client: Arc<Db>) -> Self {
        Self::new(client, LIKE_PRODUCT_TABLE_NAME, PRODUCT_TABLE_NAME)
    }

    pub fn relation_table(&self) -> &'static str {
        self.relation_table
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let rel = self.relation_table;
        let target = self.target_table;
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {rel} TYPE RELATION IN {MEMBER_TABLE_NAME} OUT {target} ENFORCED SCHEMAFULL PERMISSIONS NONE;
    DEFINE INDEX IF NOT EXISTS {rel}_in_out_unique_idx ON {rel} FIELDS in, out UNIQUE;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {rel} TYPE datetime DEFAULT time::now();
    ");
        let mutation = self.client.query(sql).await?;
        mutation.check()?;

        Ok(())
    }
}

#[async_trait]
impl LikesRepositoryInterface for LikesRepository {
    async fn toggle(&self, member_id: i64, target_id: i64) -> AppResult<LikeToggle> {
        let rel = self.relation_table;
        let mut res = self
            .client
            .query(format!(
                "BEGIN TRANSACTION; \
                LET $member = type::thing($member_table, $member_id); \
                LET $target = type::thing($target_table, $target_id); \
                LET $existing = (SELECT VALUE id FROM {rel} WHERE in=$member AND out=$target)[0]; \
                IF $existing {{ \
                    DELETE $existing; \
                    UPDATE $target SET likes_nr = math::max([likes_nr - 1, 0]); \
                }} ELSE {{ \
                    RELATE $member->{rel}->$target; \
                    UPDATE $target SET likes_nr += 1; \
                }}; \
                LET $count = (SELECT VALUE likes_nr FROM ONLY $target); \
                COMMIT TRANSACTION; \
                RETURN !$existing; \
                RETURN $count;"
            ))
            .bind(("member_table", MEMBER_TABLE_NAME))
            .bind(("member_id", member_id))
            .bind(("target_table", self.target_table))
            .bind(("target_id", target_id))
            .await?
            .check()?;

        let last = res.num_statements() - 1;
        let liked = res.take::<Option<bool>>(last - 1)?.unwrap_or(false);
        let count = res.take::<Option<i64>>(last)?.unwrap_or(0).max(0) as u32;
        debug!(rel, member_id, target_id, liked, count, "like relation toggled");

        Ok(LikeToggle {
            liked,
            likes_nr: count,
        })
    }

    async fn exists(&self, member_id: i64, target_id: i64) -> AppResult<bool> {
        let rel = self.relation_table;
        let mut res = self
            .client
            .query(format!(
                "RETURN count((SELECT VALUE id FROM {rel} \
                WHERE in=type::thing($member_table, $member_id) \
                AND out=type::thing($target_table, $target_id))) > 0;"
            ))
            .bind(("member_table", MEMBER_TABLE_NAME))
            .bind(("member_id", member_id))
            .bind(("target_table", self.target_table))
            .bind(("target_id", target_id))
            .await?;

        Ok(res.take::<Option<bool>>(0)?.unwrap_or(false))
    }
}
