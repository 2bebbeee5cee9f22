use crate::http::http_server::HttpServer;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct ApplicationState {
    http_server: OnceCell<HttpServer>,
}

impl ApplicationState {
    pub fn http_server(&self) -> &HttpServer {
        self.http_server.get().expect("HTTP server not initialized")
    }

    pub fn set_http_server(&self, http_server: HttpServer) -> Result<()> {
        self.http_server
            .set(http_server)
            .map_err(|_| anyhow::anyhow!("Failed to set HTTP server in application state"))
    }
}

pub type SharedApplicationState = Arc<RwLock<ApplicationState>>;

pub async fn create_application_state() -> Result<SharedApplicationState> {
    let application_state = Arc::new(RwLock::new(ApplicationState::default()));

    let http_server = HttpServer::from_env();

    let application_state_guard = application_state.read().await;
    application_state_guard.set_http_server(http_server)?;
    drop(application_state_guard);

    Ok(application_state)
}

pub async fn start_application(application_state: SharedApplicationState) -> Result<()> {
    // Start the different components of the application
    let application_state_guard = application_state.read().await;
    let mut handles = [application_state_guard.http_server().start()];
    drop(application_state_guard);

    for handle in handles.iter_mut().flatten() {
        handle.await?;
    }

    Ok(())
}
