use crate::database::surrdb_utils::ViewFieldSelector;
use serde::{Deserialize, Serialize};

/// Simple member card a designer sees for a connected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberInfoView {
    pub id: i64,
    pub name: String,
    pub nickname: String,
    pub profile_img_url: Option<String>,
}

impl ViewFieldSelector for MemberInfoView {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, name, nickname, profile_img_url".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberDetailView {
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub profile_img_url: Option<String>,
    pub introduce: Option<String>,
}

impl ViewFieldSelector for MemberDetailView {
    fn get_select_query_fields() -> String {
        "name, nickname, email, profile_img_url, introduce".to_string()
    }
}
