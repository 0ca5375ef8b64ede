use crate::cli::ServeArgs;
use crate::infra::{demo_campus, AppState, InMemoryCampus};
use crate::routes::with_journey_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_ai::config::AppConfig;
use career_ai::error::AppError;
use career_ai::journeys::readiness::JourneyService;
use career_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let campus = if args.demo_data {
        Arc::new(demo_campus())
    } else {
        Arc::new(InMemoryCampus::default())
    };
    let journey_service = Arc::new(JourneyService::new(
        campus.clone(),
        campus.clone(),
        campus.clone(),
        campus,
    ));

    let app = with_journey_routes(journey_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career readiness dashboard API ready");

    axum::serve(listener, app).await?;
    Ok(())
}
