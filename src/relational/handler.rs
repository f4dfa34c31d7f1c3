use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, QuerySelect};
use tracing::{error, info};

use crate::common::config::{ConfigError, DbConfig};
use crate::common::event::MappedEvent;
use crate::relational::entity::Entity as DemoEntity;

pub const ROW_LIMIT: u64 = 100;

/// The only error the query handler surfaces. The cause is logged, never
/// returned.
#[derive(Debug, thiserror::Error)]
#[error("400")]
pub struct BadRequest;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Loads up to [`ROW_LIMIT`] rows and returns them as a JSON string.
pub async fn query(
    event: MappedEvent,
    config: impl FnOnce() -> Result<DbConfig, ConfigError>,
) -> Result<String, BadRequest> {
    info!("Received event: {:?}", event);

    connect_and_query(config).await.map_err(|err| {
        error!("{}", err);
        BadRequest
    })
}

async fn connect_and_query(
    config: impl FnOnce() -> Result<DbConfig, ConfigError>,
) -> Result<String, QueryError> {
    let config = config()?;
    let db = Database::connect(config.url()).await?;

    Ok(run_query(&db, &config.schema).await?)
}

/// Selects `schema` for the session, then reads the demo table.
pub async fn run_query(db: &DatabaseConnection, schema: &str) -> Result<String, QueryError> {
    db.execute_unprepared(&format!("SET search_path TO {}", schema))
        .await?;

    let rows = DemoEntity::find().limit(ROW_LIMIT).all(db).await?;
    info!("Loaded {} rows", rows.len());

    Ok(serde_json::to_string(&rows)?)
}
