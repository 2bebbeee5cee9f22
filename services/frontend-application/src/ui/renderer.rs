use crate::domain::view_state::ViewState;
use std::fmt::Write as _;

pub struct Renderer;

impl Renderer {
    const HEADER: &str = "Azure DevOps CI/CD Tutorial";
    const SUBTITLE: &str = "Sample Rust frontend/backend app";

    pub fn render(view_state: &ViewState) {
        print!("{}", Self::render_screen(view_state));
    }

    fn render_screen(view_state: &ViewState) -> String {
        let mut screen = String::new();

        let _ = writeln!(screen, "\n=== {} ===", Self::HEADER);
        let _ = writeln!(screen, "{}", Self::SUBTITLE);
        let _ = writeln!(screen);

        if view_state.loading() {
            let _ = writeln!(screen, "Loading...");

            return screen;
        }

        let _ = writeln!(screen, "Frontend <-> Backend Communication");
        if let Some(error) = view_state.error() {
            let _ = writeln!(screen, "  [error] {error}");
        } else if let Some(message) = view_state.message() {
            let _ = writeln!(screen, "  [ok] {message}");
        }

        let _ = writeln!(screen);
        let _ = writeln!(screen, "Server Health Status");
        match view_state.health() {
            Some(health) => {
                let _ = writeln!(screen, "  Status: {}", health.status().as_str());
                let _ = writeln!(screen, "  Version: {}", health.version());
                let _ = writeln!(screen, "  Last check: {}", health.timestamp());
            }
            None => {
                let _ = writeln!(screen, "  Health data not available");
            }
        }

        let _ = writeln!(screen);
        let _ = writeln!(screen, "Commands: r = refresh message, q = quit");

        screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::api::HealthResponse;
    use common::api::HelloResponse;

    #[test]
    fn loading_state_renders_the_loading_screen() {
        let screen = Renderer::render_screen(&ViewState::initial());

        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Commands:"));
    }

    #[test]
    fn success_state_renders_message_and_health() {
        let view_state = ViewState::initial().with_dashboard(
            &HelloResponse::new("Hello from Azure DevOps CI/CD Tutorial!"),
            &HealthResponse::healthy("1.0.0"),
        );

        let screen = Renderer::render_screen(&view_state);

        assert!(screen.contains("[ok] Hello from Azure DevOps CI/CD Tutorial!"));
        assert!(screen.contains("Status: healthy"));
        assert!(screen.contains("Version: 1.0.0"));
    }

    #[test]
    fn error_state_renders_the_fixed_error_without_health_data() {
        let view_state = ViewState::initial().with_load_failure();

        let screen = Renderer::render_screen(&view_state);

        assert!(screen.contains("[error] Failed to connect to the server"));
        assert!(screen.contains("Health data not available"));
    }

    #[test]
    fn refresh_failure_keeps_the_health_card_populated() {
        let view_state = ViewState::initial()
            .with_dashboard(
                &HelloResponse::new("first"),
                &HealthResponse::healthy("1.0.0"),
            )
            .with_loading()
            .with_refresh_failure();

        let screen = Renderer::render_screen(&view_state);

        assert!(screen.contains("[error] Failed to refresh data"));
        assert!(screen.contains("Status: healthy"));
    }
}
