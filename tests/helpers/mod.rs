use std::path::Path;

use axum::Router;
use sqlx_migrator::{Migrate, Plan};

/// Fresh migrated SQLite database wrapped in the application router.
pub async fn setup_test_app(path: impl AsRef<Path>) -> anyhow::Result<Router> {
    let url = format!("sqlite:{}", path.as_ref().display());
    let pool = fitcoach::db::create_pool(&url, 1).await?;

    let mut conn = pool.acquire().await?;
    fitcoach_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let state = fitcoach::AppState::new(fitcoach_shared::State::single(pool));

    Ok(fitcoach::router(state))
}
