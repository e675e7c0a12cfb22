use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use config::{Config, Environment as EnvironmentSource, File};
use tokio::net::TcpListener;

use mindelo::application::services::ExtractionService;
use mindelo::infrastructure::llm::create_completion_engine;
use mindelo::infrastructure::observability::{TracingConfig, init_tracing};
use mindelo::infrastructure::parsing::CloudParseAdapter;
use mindelo::infrastructure::storage::LocalStagingStore;
use mindelo::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;
    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            default_filter: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    let parser = Arc::new(CloudParseAdapter::new(
        &settings.parser.base_url,
        &settings.parser.api_key,
    ));
    let engine = Arc::new(create_completion_engine(&settings.llm)?);
    let staging = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.staging.base_path,
    ))?);

    let extraction_service = Arc::new(ExtractionService::new(parser, engine, staging));

    let state = AppState { extraction_service };
    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
