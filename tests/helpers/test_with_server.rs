#[macro_export]
macro_rules! test_with_server {
    ($name:ident, |$server:ident, $ctx_state:ident, $config:ident| $body:block) => {
        #[tokio::test(flavor = "multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use axum_test::TestServer;
            use cmc_server::config::AppConfig;
            use cmc_server::database::client::{Database, DbConfig};
            use cmc_server::likes::LikeDispatcher;
            use cmc_server::middleware::mw_ctx::create_ctx_state;
            use std::sync::Arc;

            #[allow(unused_variables)]
            let $config = AppConfig {
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                is_development: false,
                server_port: 8080,
            };

            #[allow(unused_variables)]
            let $ctx_state = {
                let db = Database::connect(DbConfig {
                    url: &$config.db_url,
                    database: &$config.db_database,
                    namespace: &$config.db_namespace,
                    password: $config.db_password.as_deref(),
                    username: $config.db_username.as_deref(),
                })
                .await
                .expect("db connected");

                cmc_server::init::run_migrations(&db).await.unwrap();
                let registry = cmc_server::init::create_like_registry(&db);
                create_ctx_state(db, LikeDispatcher::new(Arc::new(registry)), &$config)
            };

            #[allow(unused_variables)]
            let $server = TestServer::new(cmc_server::init::main_router(&$ctx_state))
                .expect("Failed to create test server");

            $body
        }
    };
}
