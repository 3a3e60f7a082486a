use serde::{Deserialize, Serialize};

use crate::database::client::Db;
use crate::database::surrdb_utils::{get_entity_view, record_exists, ViewFieldSelector};
use crate::database::table_names::{
    DESIGNER_TABLE_NAME, LIKE_PRODUCT_TABLE_NAME, MEMBER_TABLE_NAME, PRODUCT_TABLE_NAME,
};
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::product::{LikedProductView, ProductInfoView, ProductSearchView};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub designer_id: i64,
    pub name: String,
    pub tag: String,
    pub price: i64,
    pub thumbnail_urls: Vec<String>,
    pub description_urls: Vec<String>,
}

pub struct ProductDbService<'a> {
    pub db: &'a Db,
}

const TABLE_COL_DESIGNER: &str = "designer";
const INDEX_DESIGNER: &str = "product_designer_idx";

impl<'a> ProductDbService<'a> {
    pub async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {PRODUCT_TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS {TABLE_COL_DESIGNER} ON TABLE {PRODUCT_TABLE_NAME} TYPE record<{DESIGNER_TABLE_NAME}>;
    DEFINE INDEX IF NOT EXISTS {INDEX_DESIGNER} ON TABLE {PRODUCT_TABLE_NAME} COLUMNS {TABLE_COL_DESIGNER};
    DEFINE FIELD IF NOT EXISTS name ON TABLE {PRODUCT_TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS tag ON TABLE {PRODUCT_TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS price ON TABLE {PRODUCT_TABLE_NAME} TYPE int ASSERT $value >= 0;
    DEFINE FIELD IF NOT EXISTS thumbnail_urls ON TABLE {PRODUCT_TABLE_NAME} TYPE array<string> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS description_urls ON TABLE {PRODUCT_TABLE_NAME} TYPE array<string> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS likes_nr ON TABLE {PRODUCT_TABLE_NAME} TYPE int DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {PRODUCT_TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, id: i64, product: CreateProduct) -> AppResult<i64> {
        let res = self
            .db
            .query(format!(
                "CREATE type::thing($_table, $id) SET \
                {TABLE_COL_DESIGNER}=type::thing($designer_table, $designer_id), \
                name=$name, tag=$tag, price=$price, \
                thumbnail_urls=$thumbnail_urls, description_urls=$description_urls \
                RETURN NONE;"
            ))
            .bind(("_table", PRODUCT_TABLE_NAME))
            .bind(("id", id))
            .bind(("designer_table", DESIGNER_TABLE_NAME))
            .bind(("designer_id", product.designer_id))
            .bind(("name", product.name))
            .bind(("tag", product.tag))
            .bind(("price", product.price))
            .bind(("thumbnail_urls", product.thumbnail_urls))
            .bind(("description_urls", product.description_urls))
            .await?;
        res.check()?;
        Ok(id)
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        Ok(record_exists(self.db, PRODUCT_TABLE_NAME, id).await?)
    }

    pub async fn must_exist(&self, id: i64) -> AppResult<()> {
        match self.exists(id).await? {
            true => Ok(()),
            false => Err(AppError::not_found(PRODUCT_TABLE_NAME, id)),
        }
    }

    pub async fn get_view<T: for<'b> Deserialize<'b> + ViewFieldSelector>(
        &self,
        id: i64,
    ) -> AppResult<T> {
        get_entity_view::<T>(self.db, PRODUCT_TABLE_NAME, id)
            .await?
            .ok_or_else(|| AppError::not_found(PRODUCT_TABLE_NAME, id))
    }

    pub async fn get_likes_nr(&self, id: i64) -> AppResult<i64> {
        let mut res = self
            .db
            .query("SELECT VALUE likes_nr FROM type::thing($_table, $id);")
            .bind(("_table", PRODUCT_TABLE_NAME))
            .bind(("id", id))
            .await?;
        res.take::<Option<i64>>(0)?
            .ok_or_else(|| AppError::not_found(PRODUCT_TABLE_NAME, id))
    }

    pub async fn get_by_designer(&self, designer_id: i64) -> AppResult<Vec<ProductInfoView>> {
        let qry = format!(
            "SELECT {} FROM {PRODUCT_TABLE_NAME} WHERE {TABLE_COL_DESIGNER}=type::thing($designer_table, $designer_id) ORDER BY id;",
            ProductInfoView::get_select_query_fields()
        );
        let mut res = self
            .db
            .query(qry)
            .bind(("designer_table", DESIGNER_TABLE_NAME))
            .bind(("designer_id", designer_id))
            .await?;
        Ok(res.take::<Vec<ProductInfoView>>(0)?)
    }

    /// `keyword` is matched upper-cased against name and tag.
    pub async fn search(&self, keyword: &str) -> AppResult<Vec<ProductSearchView>> {
        let qry = format!(
            "SELECT {} FROM {PRODUCT_TABLE_NAME} \
            WHERE string::contains(string::uppercase(name), $keyword) \
            OR string::contains(string::uppercase(tag), $keyword) \
            ORDER BY likes_nr DESC;",
            ProductSearchView::get_select_query_fields()
        );
        let mut res = self
            .db
            .query(qry)
            .bind(("keyword", keyword.to_uppercase()))
            .await?;
        Ok(res.take::<Vec<ProductSearchView>>(0)?)
    }

    /// Products the member liked, most recent like first.
    pub async fn get_liked_by_member(&self, member_id: i64) -> AppResult<Vec<LikedProductView>> {
        let qry = format!(
            "SELECT {} FROM {LIKE_PRODUCT_TABLE_NAME} WHERE in=type::thing($member_table, $member_id) ORDER BY liked_at DESC;",
            LikedProductView::get_select_query_fields()
        );
        let mut res = self
            .db
            .query(qry)
            .bind(("member_table", MEMBER_TABLE_NAME))
            .bind(("member_id", member_id))
            .await?;
        Ok(res.take::<Vec<LikedProductView>>(0)?)
    }
}
