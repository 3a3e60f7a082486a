pub mod designer;
pub mod like;
pub mod member;
pub mod product;
