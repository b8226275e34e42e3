use std::time::Duration;

use sea_orm::sea_query::{
    Index, IndexCreateStatement, PostgresQueryBuilder, SqliteQueryBuilder,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};
use tracing::{info, warn};

use crate::entity::{demo, evaluation};

pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    // Set connection pool options
    opt.max_connections(16)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("agency_server::entity::*")
        .sync(&db)
        .await?;
    ensure_indexes(&db).await;

    Ok(db)
}

/// Create the lookup indexes schema-sync does not derive from the entities.
///
/// Failures only cost query speed, so they are logged and skipped.
pub async fn ensure_indexes(db: &DatabaseConnection) {
    // Veteran scoring: latest evaluations of one artist.
    let evaluation_idx = Index::create()
        .if_not_exists()
        .name("idx_evaluation_artist_created")
        .table(evaluation::Entity)
        .col(evaluation::Column::ArtistId)
        .col(evaluation::Column::CreatedAt)
        .to_owned();

    // Casting: demos of one type.
    let demo_idx = Index::create()
        .if_not_exists()
        .name("idx_demo_type")
        .table(demo::Entity)
        .col(demo::Column::DemoType)
        .to_owned();

    for (name, stmt) in [
        ("idx_evaluation_artist_created", evaluation_idx),
        ("idx_demo_type", demo_idx),
    ] {
        let sql = index_sql(db.get_database_backend(), &stmt);
        match db.execute_unprepared(&sql).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) => warn!("Failed to create index {}: {}", name, e),
        }
    }
}

fn index_sql(backend: DbBackend, stmt: &IndexCreateStatement) -> String {
    match backend {
        DbBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        _ => stmt.to_string(SqliteQueryBuilder),
    }
}
