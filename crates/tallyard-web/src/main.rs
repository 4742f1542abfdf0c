//! Tallyard server entry point.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tallyard_gsheets::{RowSink, ServiceAccountKey, SheetsClient};
use tallyard_store::PgQuestionStore;
use tallyard_web::{AppConfig, AppState};

/// Tallyard - questionnaire scoring web service
#[derive(Parser, Debug)]
#[command(name = "tallyard")]
#[command(about = "Questionnaire scoring web service", long_about = None)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tallyard=debug".into()),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    let store = PgQuestionStore::connect(&config.database_url).await?;

    let sink: Option<Arc<dyn RowSink>> = match &config.sheet {
        Some(sheet) => {
            let key = ServiceAccountKey::from_file(&sheet.credentials_path)?;
            let mut client = SheetsClient::new(key, &sheet.spreadsheet_id);
            if let Some(range) = &sheet.range {
                client = client.with_range(range);
            }
            tracing::info!(spreadsheet = %sheet.spreadsheet_id, "spreadsheet export enabled");
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!(
                "spreadsheet export disabled (SHEET_ID or GOOGLE_SHEET_CREDENTIALS_PATH unset)"
            );
            None
        }
    };

    let state = AppState {
        store: Arc::new(store),
        sink,
    };
    let app = tallyard_web::router(state);

    let addr = format!("{}:{}", config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("server running on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
