use crate::database::surrdb_utils::ViewFieldSelector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DesignerView {
    pub id: i64,
    pub name: String,
    pub profile_img_url: Option<String>,
    pub introduce: Option<String>,
    pub categories: Vec<String>,
    pub likes_nr: i64,
}

impl ViewFieldSelector for DesignerView {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, name, profile_img_url, introduce, categories, likes_nr".to_string()
    }
}

/// Selected from the member->designer relation table.
#[derive(Debug, Serialize, Deserialize)]
pub struct LikedDesignerView {
    pub id: i64,
    pub name: String,
    pub profile_img_url: Option<String>,
    pub categories: Vec<String>,
    pub likes_nr: i64,
    pub liked_at: DateTime<Utc>,
}

impl ViewFieldSelector for LikedDesignerView {
    fn get_select_query_fields() -> String {
        "record::id(out) AS id,
        out.name AS name,
        out.profile_img_url AS profile_img_url,
        out.categories AS categories,
        out.likes_nr AS likes_nr,
        created_at AS liked_at"
            .to_string()
    }
}
