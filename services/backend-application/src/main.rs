use crate::application::APPLICATION_NAME;
use crate::application::context::create_application_state;
use crate::application::context::start_application;
use anyhow::Result;
use common::telemetry::OpentelemetryHandler;

mod application;
mod http;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the OpenTelemetry stack
    let _opentelemetry_handler =
        OpentelemetryHandler::new(APPLICATION_NAME, env!("CARGO_PKG_VERSION"))?;

    // Start the application
    let application_state = create_application_state().await?;
    start_application(application_state).await?;

    Ok(())
}
