use serde::{Deserialize, Serialize};

use crate::database::client::Db;
use crate::database::surrdb_utils::{get_entity_view, record_exists, ViewFieldSelector};
use crate::database::table_names::{DESIGNER_TABLE_NAME, LIKE_DESIGNER_TABLE_NAME, MEMBER_TABLE_NAME};
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::designer::LikedDesignerView;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDesigner {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduce: Option<String>,
    pub categories: Vec<String>,
}

pub struct DesignerDbService<'a> {
    pub db: &'a Db,
}

impl<'a> DesignerDbService<'a> {
    pub async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {DESIGNER_TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON TABLE {DESIGNER_TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS profile_img_url ON TABLE {DESIGNER_TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS introduce ON TABLE {DESIGNER_TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS categories ON TABLE {DESIGNER_TABLE_NAME} TYPE array<string> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS likes_nr ON TABLE {DESIGNER_TABLE_NAME} TYPE int DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {DESIGNER_TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, id: i64, designer: CreateDesigner) -> AppResult<i64> {
        let res = self
            .db
            .query("CREATE type::thing($_table, $id) CONTENT $content RETURN NONE;")
            .bind(("_table", DESIGNER_TABLE_NAME))
            .bind(("id", id))
            .bind(("content", designer))
            .await?;
        res.check()?;
        Ok(id)
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        Ok(record_exists(self.db, DESIGNER_TABLE_NAME, id).await?)
    }

    pub async fn must_exist(&self, id: i64) -> AppResult<()> {
        match self.exists(id).await? {
            true => Ok(()),
            false => Err(AppError::not_found(DESIGNER_TABLE_NAME, id)),
        }
    }

    pub async fn get_view<T: for<'b> Deserialize<'b> + ViewFieldSelector>(
        &self,
        id: i64,
    ) -> AppResult<T> {
        get_entity_view::<T>(self.db, DESIGNER_TABLE_NAME, id)
            .await?
            .ok_or_else(|| AppError::not_found(DESIGNER_TABLE_NAME, id))
    }

    pub async fn get_likes_nr(&self, id: i64) -> AppResult<i64> {
        let mut res = self
            .db
            .query("SELECT VALUE likes_nr FROM type::thing($_table, $id);")
            .bind(("_table", DESIGNER_TABLE_NAME))
            .bind(("id", id))
            .await?;
        res.take::<Option<i64>>(0)?
            .ok_or_else(|| AppError::not_found(DESIGNER_TABLE_NAME, id))
    }

    /// Designers the member liked, most recent like first.
    pub async fn get_liked_by_member(&self, member_id: i64) -> AppResult<Vec<LikedDesignerView>> {
        let qry = format!(
            "SELECT {} FROM {LIKE_DESIGNER_TABLE_NAME} WHERE in=type::thing($member_table, $member_id) ORDER BY liked_at DESC;",
            LikedDesignerView::get_select_query_fields()
        );
        let mut res = self
            .db
            .query(qry)
            .bind(("member_table", MEMBER_TABLE_NAME))
            .bind(("member_id", member_id))
            .await?;
        Ok(res.take::<Vec<LikedDesignerView>>(0)?)
    }
}
