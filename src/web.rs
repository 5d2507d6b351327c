use gpa_calc::api;
use gpa_calc::config::web_config::WebConfig;
use gpa_calc::utils::error::GpaError;
use gpa_calc::utils::logger;
use gpa_calc::utils::validation::Validate;
use std::path::Path;

// Configuration is env-driven: GPA_WEB_CONFIG points at an optional TOML
// file, HOST/PORT override whatever it contains.
fn load_config() -> gpa_calc::Result<WebConfig> {
    let path = std::env::var("GPA_WEB_CONFIG").unwrap_or_else(|_| "gpa-web.toml".to_string());

    let mut config = if Path::new(&path).exists() {
        WebConfig::from_file(&path)?
    } else {
        WebConfig::default()
    };

    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port.parse().map_err(|_| GpaError::InvalidConfigValueError {
            field: "PORT".to_string(),
            reason: format!("'{port}' is not a valid port number"),
        })?;
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            eprintln!("💡 Check the TOML config file and the HOST/PORT environment variables");
            std::process::exit(1);
        }
    };

    logger::init_web_logger(config.logging.verbose);

    let addr = config.bind_addr();
    let app = api::create_router();

    tracing::info!("🚀 gpa-web listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
