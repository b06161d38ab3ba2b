use actix_web::{middleware::Logger, web, App, HttpServer};
use capstone_api::config::ApiConfig;
use capstone_api::generator::{GenerationSettings, ProjectGenerator};
use capstone_api::helpers::llm::create_llm_client;
use capstone_api::{build_cors, configure_routes};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "capstone-api")]
#[command(about = "HTTP service that generates capstone project ideas")]
#[command(version)]
struct ServerArgs {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = ServerArgs::parse();

    let (mut config, config_path) = ApiConfig::load(args.config.as_deref())?;
    info!("Loaded config from: {}", config_path.display());

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let llm_client = create_llm_client(&config.llm)?;
    let generator = web::Data::new(ProjectGenerator::new(
        llm_client,
        GenerationSettings::from(&config.llm),
    ));

    let bind_addr = config.bind_addr();
    let cors_config = config.cors.clone();
    info!("Starting capstone-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_config))
            .wrap(Logger::default())
            .app_data(generator.clone())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
