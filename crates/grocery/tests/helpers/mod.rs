use std::{path::PathBuf, str::FromStr};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<fitcoach_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    // Single connection, like the service's write pool
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await?;
    let mut conn = pool.acquire().await?;
    fitcoach_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    drop(conn);

    Ok(fitcoach_shared::State::single(pool))
}
