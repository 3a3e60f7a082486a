use crate::{
    database::client::Db,
    entities::{designer_entity::DesignerDbService, product_entity::ProductDbService},
    middleware::error::{AppError, AppResult},
    models::view::product::{ProductDetailView, ProductInfoView, ProductSearchView},
};

pub const SEARCH_KEYWORD_MIN_LEN: usize = 2;

pub struct ProductService<'a> {
    products_repository: ProductDbService<'a>,
    designers_repository: DesignerDbService<'a>,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self {
            products_repository: ProductDbService { db },
            designers_repository: DesignerDbService { db },
        }
    }

    pub async fn retrieve_all_by_designer(&self, designer_id: i64) -> AppResult<Vec<ProductInfoView>> {
        self.designers_repository.must_exist(designer_id).await?;
        self.products_repository.get_by_designer(designer_id).await
    }

    pub async fn retrieve_detail(&self, product_id: i64) -> AppResult<ProductDetailView> {
        self.products_repository.get_view(product_id).await
    }

    /// Most liked first.
    pub async fn search(&self, keyword: &str) -> AppResult<Vec<ProductSearchView>> {
        let keyword = validate_keyword(keyword)?;
        self.products_repository.search(keyword).await
    }
}

/// Length is counted in chars, whitespace included.
fn validate_keyword(keyword: &str) -> AppResult<&str> {
    if keyword.chars().count() < SEARCH_KEYWORD_MIN_LEN {
        return Err(AppError::SearchKeywordTooShort {
            min: SEARCH_KEYWORD_MIN_LEN,
        });
    }
    Ok(keyword)
}
