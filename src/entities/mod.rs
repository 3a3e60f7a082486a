pub mod designer_entity;
pub mod member_entity;
pub mod product_entity;
