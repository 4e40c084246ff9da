/**
 * Minimal Auth Server Entry Point
 *
 * Parses the command line (with `.env` and environment fallbacks), composes
 * the authentication core over JSON stores and serves the Axum app.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use generic_auth::backend::server::{create_app, Cli};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let cli = Cli::parse();
    let config = match cli.auth_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let data_dir = cli.data_dir();
    let app = create_app(&config, &data_dir);

    let listener = tokio::net::TcpListener::bind((cli.hostname.as_str(), cli.port)).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin minimal-auth-server --features ssr");
    std::process::exit(1);
}
