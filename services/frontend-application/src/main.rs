use crate::application::APPLICATION_NAME;
use crate::application::context::start_application;
use anyhow::Result;
use common::telemetry::OpentelemetryHandler;

mod application;
mod domain;
mod http;
mod ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the OpenTelemetry stack
    let _opentelemetry_handler =
        OpentelemetryHandler::new(APPLICATION_NAME, env!("CARGO_PKG_VERSION"))?;

    // Run the interactive client
    start_application().await?;

    Ok(())
}
