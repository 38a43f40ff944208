use crate::cli::ServeArgs;
use crate::infra::{load_network_records, AppState, InMemoryNetworkRepository};
use crate::routes::with_card_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cardnet::cards::CardValidationService;
use cardnet::config::AppConfig;
use cardnet::error::AppError;
use cardnet::telemetry;
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
    if let Some(path) = args.networks_csv.take() {
        config.networks.csv_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let records = load_network_records(&config.networks)?;
    let network_count = records.len();
    let repository = Arc::new(InMemoryNetworkRepository::with_records(records));
    let validation_service = Arc::new(CardValidationService::new(repository));

    let app = with_card_routes(validation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, network_count, "card classification service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
