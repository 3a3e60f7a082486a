pub mod member_service;
pub mod product_service;
