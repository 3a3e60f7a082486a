use serde::{Deserialize, Serialize};

use crate::database::client::Db;
use crate::database::surrdb_utils::{get_entity_view, record_exists, ViewFieldSelector};
use crate::database::table_names::MEMBER_TABLE_NAME;
use crate::middleware::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub nickname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduce: Option<String>,
}

pub struct MemberDbService<'a> {
    pub db: &'a Db,
}

impl<'a> MemberDbService<'a> {
    pub async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {MEMBER_TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON TABLE {MEMBER_TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS nickname ON TABLE {MEMBER_TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS email ON TABLE {MEMBER_TABLE_NAME} TYPE string VALUE string::lowercase($value);
    DEFINE FIELD IF NOT EXISTS profile_img_url ON TABLE {MEMBER_TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS introduce ON TABLE {MEMBER_TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {MEMBER_TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    DEFINE INDEX IF NOT EXISTS member_email_idx ON TABLE {MEMBER_TABLE_NAME} COLUMNS email UNIQUE;
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, id: i64, member: CreateMember) -> AppResult<i64> {
        let res = self
            .db
            .query("CREATE type::thing($_table, $id) CONTENT $content RETURN NONE;")
            .bind(("_table", MEMBER_TABLE_NAME))
            .bind(("id", id))
            .bind(("content", member))
            .await?;
        res.check()?;
        Ok(id)
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        Ok(record_exists(self.db, MEMBER_TABLE_NAME, id).await?)
    }

    pub async fn must_exist(&self, id: i64) -> AppResult<()> {
        match self.exists(id).await? {
            true => Ok(()),
            false => Err(AppError::not_found(MEMBER_TABLE_NAME, id)),
        }
    }

    pub async fn get_view<T: for<'b> Deserialize<'b> + ViewFieldSelector>(
        &self,
        id: i64,
    ) -> AppResult<T> {
        get_entity_view::<T>(self.db, MEMBER_TABLE_NAME, id)
            .await?
            .ok_or_else(|| AppError::not_found(MEMBER_TABLE_NAME, id))
    }
}
