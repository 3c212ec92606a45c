use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use delivery_logistics::config::{DatabaseConfig, EnvironmentConfig};
use delivery_logistics::database;
use delivery_logistics::repositories::PgLogisticsRepository;
use delivery_logistics::routes::create_app_router;
use delivery_logistics::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenvy::dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("delivery_logistics=debug,tower_http=info")),
        )
        .init();

    info!("🚚 Delivery Logistics API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;

    // Inicializar base de datos
    let pool = match database::create_pool(&database_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };
    database::run_migrations(&pool).await?;

    if config.is_development() {
        info!("🛠️ Entorno de desarrollo");
    } else {
        info!("⚙️ Entorno: {}", config.environment);
    }

    let base = config.operations_base();
    info!(
        "📍 Base de operaciones: {} ({}, {})",
        base.name, base.latitude, base.longitude
    );
    if config.cors_origins.is_empty() {
        info!("🌍 CORS permisivo (sin CORS_ORIGINS)");
    }

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    let repository = Arc::new(PgLogisticsRepository::new(pool));
    let app = create_app_router(AppState::new(repository, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("📋 Recursos (GET lista ?skip=&limit=, POST crear, GET/DELETE /:id):");
    info!("   /api/clients");
    info!("   /api/drivers");
    info!("   /api/vehicles");
    info!("   /api/routes  (+ GET /api/routes/:id/deliveries)");
    info!("   /api/deliveries  (+ GET /:id/packages, GET /:id/tracking)");
    info!("   /api/packages");
    info!("   /api/tracking-events");
    info!("🗺️ Ordenamiento de rutas:");
    info!("   POST /api/optimize-route - Ordenar paradas desde la base");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
