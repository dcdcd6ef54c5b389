//! Liveness and database health

use std::time::Duration;

use actix_web::{web, HttpResponse};
use log::warn;
use serde::Serialize;

use fz_infra::database::{DatabasePool, PoolStatistics};

const DATABASE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<DatabaseHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection_pool: Option<PoolStatistics>,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DatabaseHealth {
    fn ok() -> Self {
        Self {
            status: "ok",
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            error: Some(message.into()),
        }
    }
}

/// Health check endpoint handler
///
/// Runs `SELECT 1` when a database pool is registered and answers 503 if it
/// fails. Without a pool only liveness is reported.
pub async fn health_check(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let (database, connection_pool) = match pool {
        Some(pool) => (Some(check_database(&pool).await), Some(pool.get_statistics())),
        None => (None, None),
    };

    let healthy = database.as_ref().map_or(true, |db| db.error.is_none());

    let body = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        service: "foodzy-api",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database,
        connection_pool,
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

async fn check_database(pool: &DatabasePool) -> DatabaseHealth {
    let health = match tokio::time::timeout(DATABASE_CHECK_TIMEOUT, pool.health_check()).await {
        Ok(Ok(true)) => return DatabaseHealth::ok(),
        Ok(Ok(false)) => DatabaseHealth::error("Unexpected result from SELECT 1"),
        Ok(Err(e)) => DatabaseHealth::error(format!("Query failed: {}", e)),
        Err(_) => DatabaseHealth::error(format!(
            "Query timeout (>{}s)",
            DATABASE_CHECK_TIMEOUT.as_secs()
        )),
    };

    warn!("Database health check failed ({})", pool.get_statistics());
    health
}
