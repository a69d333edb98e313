use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use env_logger::Env;

use roster::config::Config;
use roster::db::Db;
use roster::routes::users as users_routes;
use roster::store::{SqliteUserStore, UserStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Info by default, overridable via RUST_LOG
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cfg = Config::load();

    let db = Db::connect_and_migrate(&cfg.database_path).await?;
    let store: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(db));

    log::info!("Starting server at {}", cfg.listen);
    let listen_addr = cfg.listen.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::from(store.clone()))
            .route("/users", web::get().to(users_routes::list_users))
    })
    .bind(listen_addr)?
    .run()
    .await?;
    Ok(())
}
