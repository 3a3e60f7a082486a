use serde::{Deserialize, Serialize};

use crate::likes::LikeResult;

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: u32,
}

impl From<LikeResult> for LikeResponse {
    fn from(value: LikeResult) -> Self {
        Self {
            liked: value.liked,
            like_count: value.like_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeExistenceResponse {
    pub liked: bool,
}
