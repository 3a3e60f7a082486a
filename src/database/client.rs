use std::sync::Arc;

use surrealdb::engine::any::{connect, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use tracing::info;

use crate::database::repositories::like::LikesRepository;
use crate::middleware::error::AppResult;

pub type Db = Surreal<Any>;

#[derive(Debug)]
pub struct DbConfig<'a> {
    pub url: &'a str,
    pub database: &'a str,
    pub namespace: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub client: Arc<Db>,
    pub designer_likes: Arc<LikesRepository>,
    pub product_likes: Arc<LikesRepository>,
}

impl Database {
    pub async fn connect(config: DbConfig<'_>) -> Result<Self, surrealdb::Error> {
        info!("->> connecting DB url={} ns={} db={}", config.url, config.namespace, config.database);
        let conn = connect(config.url).await?;

        if let (Some(password), Some(username)) = (config.password, config.username) {
            conn.signin(Root { username, password }).await?;
        }

        conn.use_ns(config.namespace)
            .use_db(config.database)
            .await?;

        let version = conn.version().await?;
        info!("->> connected DB version: {version}");

        let client = Arc::new(conn);
        Ok(Self {
            designer_likes: Arc::new(LikesRepository::designers(client.clone())),
            product_likes: Arc::new(LikesRepository::products(client.clone())),
            client,
        })
    }

    pub async fn run_migrations(&self) -> AppResult<()> {
        self.designer_likes.mutate_db().await?;
        self.product_likes.mutate_db().await?;
        Ok(())
    }
}
