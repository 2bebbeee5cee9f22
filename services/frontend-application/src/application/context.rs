use crate::domain::view_state::ViewState;
use crate::http::api_client::ApiClient;
use crate::ui::command_reader::CommandReader;
use crate::ui::renderer::Renderer;
use anyhow::Result;
use common::api::HealthResponse;
use common::api::HelloResponse;
use tokio::sync::mpsc;

pub enum ApplicationEvent {
    InitialLoadCompleted(Result<(HelloResponse, HealthResponse)>),
    RefreshRequested,
    RefreshCompleted(Result<HelloResponse>),
    ShutdownRequested,
}

/// Drives the client: owns the view state, applies events in arrival
/// order, and re-renders after every transition. Fetches report back
/// through the event channel; overlapping refreshes are neither
/// debounced nor cancelled, so the last completion to arrive wins.
pub async fn start_application() -> Result<()> {
    let api_client = ApiClient::from_env();
    let (event_sender, mut event_receiver) = mpsc::unbounded_channel();

    let _command_reader_handles = CommandReader::new(event_sender.clone()).start();
    spawn_shutdown_watcher(event_sender.clone());
    spawn_initial_load(&api_client, event_sender.clone());

    let mut view_state = ViewState::initial();
    Renderer::render(&view_state);

    while let Some(event) = event_receiver.recv().await {
        view_state = match event {
            ApplicationEvent::InitialLoadCompleted(Ok((hello, health))) => {
                view_state.with_dashboard(&hello, &health)
            }
            ApplicationEvent::InitialLoadCompleted(Err(err)) => {
                tracing::error!("Failed to load dashboard data: {err}");

                view_state.with_load_failure()
            }
            ApplicationEvent::RefreshRequested => {
                spawn_refresh(&api_client, event_sender.clone());

                view_state.with_loading()
            }
            ApplicationEvent::RefreshCompleted(Ok(hello)) => view_state.with_message(&hello),
            ApplicationEvent::RefreshCompleted(Err(err)) => {
                tracing::error!("Failed to refresh hello data: {err}");

                view_state.with_refresh_failure()
            }
            ApplicationEvent::ShutdownRequested => break,
        };

        Renderer::render(&view_state);
    }

    Ok(())
}

fn spawn_initial_load(
    api_client: &ApiClient,
    event_sender: mpsc::UnboundedSender<ApplicationEvent>,
) {
    let api_client = api_client.clone();

    tokio::spawn(async move {
        let result = api_client.get_dashboard().await;

        // A completion arriving after shutdown is simply dropped
        let _ = event_sender.send(ApplicationEvent::InitialLoadCompleted(result));
    });
}

fn spawn_refresh(api_client: &ApiClient, event_sender: mpsc::UnboundedSender<ApplicationEvent>) {
    let api_client = api_client.clone();

    tokio::spawn(async move {
        let result = api_client.get_hello().await;

        let _ = event_sender.send(ApplicationEvent::RefreshCompleted(result));
    });
}

fn spawn_shutdown_watcher(event_sender: mpsc::UnboundedSender<ApplicationEvent>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = event_sender.send(ApplicationEvent::ShutdownRequested);
        }
    });
}
