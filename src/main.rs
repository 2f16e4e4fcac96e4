use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use car_rental::config::environment::EnvironmentConfig;
use car_rental::database::connection;
use car_rental::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use car_rental::routes;
use car_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rental API - Reservas de vehículos");
    info!("=========================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar almacenamiento: PostgreSQL si hay DATABASE_URL,
    // memoria en caso contrario
    let state = match config.database_url.clone() {
        Some(url) => {
            let pool = connection::create_pool(&url).await?;
            connection::run_migrations(&pool).await?;
            info!("✅ PostgreSQL conectado y migrado");
            AppState::new(pool, config.clone())
        }
        None => {
            warn!("⚠️ DATABASE_URL no definida, usando almacenamiento en memoria");
            AppState::in_memory(config.clone())
        }
    };

    // CORS: orígenes explícitos en producción, permisivo en desarrollo
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/cars", routes::car_routes::create_car_router())
        .nest("/api/bookings", routes::booking_routes::create_booking_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚗 Endpoints - Cars:");
    info!("   GET  /api/cars - Listar coches (filtros: brand, category, min_price, max_price)");
    info!("   GET  /api/cars/:id - Obtener coche");
    info!("   POST /api/cars - Crear coche (admin)");
    info!("   PUT  /api/cars/:id - Actualizar coche (admin)");
    info!("   DELETE /api/cars/:id - Eliminar coche (admin)");
    info!("📅 Endpoints - Bookings:");
    info!("   POST /api/bookings - Crear reserva");
    info!("   GET  /api/bookings/my - Mis reservas");
    info!("   GET  /api/bookings - Todas las reservas (admin)");
    info!("   PUT  /api/bookings/:id/status - Cambiar estado (dueño o admin)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-rental",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
