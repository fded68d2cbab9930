use shorturl_service::{config, server, telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing("info", "text");
            tracing::error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("Server terminated: {:#}", e);
        std::process::exit(1);
    }
}
