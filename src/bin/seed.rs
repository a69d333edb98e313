//! Out-of-band fixture harness: `seed apply [count]` / `seed revert`.

use anyhow::Context;
use env_logger::Env;

use roster::config::Config;
use roster::db::Db;
use roster::seed;
use roster::store::SqliteUserStore;

fn usage() -> ! {
    eprintln!("usage: seed apply [count] | seed revert");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("apply") => {
            let count = match args.get(1) {
                Some(n) => n.parse().context("count must be a non-negative integer")?,
                None => seed::DEFAULT_COUNT,
            };
            seed::apply(&connect().await?, count).await?;
        }
        Some("revert") => {
            seed::revert(&connect().await?).await?;
        }
        _ => usage(),
    }
    Ok(())
}

async fn connect() -> anyhow::Result<SqliteUserStore> {
    let cfg = Config::load();
    let db = Db::connect_and_migrate(&cfg.database_path).await?;
    Ok(SqliteUserStore::new(db))
}
