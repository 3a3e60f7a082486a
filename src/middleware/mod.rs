pub mod ctx;
pub mod error;
pub mod extractors;
pub mod mw_ctx;
