pub const MEMBER_TABLE_NAME: &str = "member";
pub const DESIGNER_TABLE_NAME: &str = "designer";
pub const PRODUCT_TABLE_NAME: &str = "product";
pub const LIKE_DESIGNER_TABLE_NAME: &str = "like_designer";
pub const LIKE_PRODUCT_TABLE_NAME: &str = "like_product";
