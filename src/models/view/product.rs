use crate::database::surrdb_utils::ViewFieldSelector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductDetailView {
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub price: i64,
    pub likes_nr: i64,
    pub thumbnail_urls: Vec<String>,
    pub description_urls: Vec<String>,
    pub designer_id: i64,
    pub designer_name: String,
    pub designer_profile_img_url: Option<String>,
}

impl ViewFieldSelector for ProductDetailView {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id,
        name,
        tag,
        price,
        likes_nr,
        thumbnail_urls,
        description_urls,
        record::id(designer) AS designer_id,
        designer.name AS designer_name,
        designer.profile_img_url AS designer_profile_img_url"
            .to_string()
    }
}

/// Product card in a designer's catalogue.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductInfoView {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub likes_nr: i64,
    pub thumbnail_url: Option<String>,
}

impl ViewFieldSelector for ProductInfoView {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, name, price, likes_nr, thumbnail_urls[0] AS thumbnail_url".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductSearchView {
    pub product_id: i64,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub likes_nr: i64,
    pub designer_id: i64,
    pub designer_profile_img_url: Option<String>,
}

impl ViewFieldSelector for ProductSearchView {
    fn get_select_query_fields() -> String {
        "record::id(id) AS product_id,
        name,
        thumbnail_urls[0] AS thumbnail_url,
        likes_nr,
        record::id(designer) AS designer_id,
        designer.profile_img_url AS designer_profile_img_url"
            .to_string()
    }
}

/// Selected from the member->product relation table.
#[derive(Debug, Serialize, Deserialize)]
pub struct LikedProductView {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub likes_nr: i64,
    pub description_urls: Vec<String>,
    pub designer_id: i64,
    pub designer_name: String,
    pub liked_at: DateTime<Utc>,
}

impl ViewFieldSelector for LikedProductView {
    fn get_select_query_fields() -> String {
        "record::id(out) AS id,
        out.name AS name,
        out.price AS price,
        out.likes_nr AS likes_nr,
        out.description_urls AS description_urls,
        record::id(out.designer) AS designer_id,
        out.designer.name AS designer_name,
        created_at AS liked_at"
            .to_string()
    }
}
