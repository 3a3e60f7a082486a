//! Polymorphic like/unlike: a registry of per-target handlers and the
//! dispatcher routes go through.

pub mod dispatcher;
pub mod handler;
pub mod registry;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub use dispatcher::LikeDispatcher;
pub use handler::{DesignerLikeHandler, LikeHandler, ProductLikeHandler};
pub use registry::LikeRegistry;

/// Closed set of entity kinds a member can like.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum LikeTarget {
    Designer,
    Product,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResult {
    /// true when the relation exists after the call
    pub liked: bool,
    pub like_count: u32,
}
