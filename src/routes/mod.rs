pub mod designers;
pub mod likes;
pub mod members;
pub mod products;
