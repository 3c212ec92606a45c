//! Conexión a PostgreSQL
//!
//! Crea el pool a partir de `DatabaseConfig` y aplica las migraciones
//! embebidas del directorio `migrations/`.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    info!(
        "🗄️ Conectando a PostgreSQL: {} (max {} conexiones)",
        mask_database_url(&config.url),
        config.max_connections
    );

    let pool = config
        .create_pool()
        .await
        .context("Error conectando a la base de datos")?;

    info!("✅ Pool de PostgreSQL listo");
    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Error aplicando migraciones")?;

    info!("✅ Migraciones aplicadas");
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|pos| pos + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
