use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use fleetflow::config::{DatabaseConfig, EnvironmentConfig};
use fleetflow::create_app;
use fleetflow::database::DatabaseConnection;
use fleetflow::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("invalid configuration")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚚 FleetFlow - Fleet Management API");
    info!("====================================");

    if config.uses_default_jwt_secret() {
        warn!("⚠️  JWT_SECRET no definido, usando el secreto de desarrollo");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::from(&config)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection
        .run_migrations()
        .await
        .context("failed to run migrations")?;

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_url()))?;

    let app = create_app(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health");
    info!("   GET|POST /api/vehicles, /api/drivers, /api/trips, /api/maintenance, /api/expenses");
    info!("   PUT  /api/trips/:id/status, /api/maintenance/:id/complete");
    info!("   PUT  /api/drivers/:id/status, /api/drivers/:id/calculate-safety, /api/drivers/recalculate-all/safety");
    info!("   GET  /api/drivers/available, /api/dashboard, /api/dashboard/stats, /api/analytics?period=");
    info!("   POST /api/auth/register, /api/auth/login  GET /api/auth/me");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
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
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
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
