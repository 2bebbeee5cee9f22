use crate::application::context::ApplicationEvent;
use tokio::io::AsyncBufReadExt as _;
use tokio::io::BufReader;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub struct CommandReader {
    event_sender: UnboundedSender<ApplicationEvent>,
}

impl CommandReader {
    pub const fn new(event_sender: UnboundedSender<ApplicationEvent>) -> Self {
        Self { event_sender }
    }

    pub fn start(&self) -> Vec<JoinHandle<()>> {
        tracing::debug!("Start the command reader");

        let event_sender = self.event_sender.clone();

        vec![tokio::spawn(async move {
            Self::worker_stdin(event_sender).await;
        })]
    }

    async fn worker_stdin(event_sender: UnboundedSender<ApplicationEvent>) {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    let Some(event) = Self::parse_command(&line) else {
                        tracing::warn!("Unknown command: {}", line.trim());

                        continue;
                    };

                    if event_sender.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    // EOF behaves like quit
                    let _ = event_sender.send(ApplicationEvent::ShutdownRequested);

                    break;
                }
                Err(err) => {
                    tracing::error!("Failed to read command: {err}");

                    break;
                }
            }
        }
    }

    fn parse_command(line: &str) -> Option<ApplicationEvent> {
        match line.trim().to_lowercase().as_str() {
            "r" | "refresh" => Some(ApplicationEvent::RefreshRequested),
            "q" | "quit" | "exit" => Some(ApplicationEvent::ShutdownRequested),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_commands_are_recognized() {
        assert!(matches!(
            CommandReader::parse_command("r"),
            Some(ApplicationEvent::RefreshRequested)
        ));
        assert!(matches!(
            CommandReader::parse_command("  Refresh  "),
            Some(ApplicationEvent::RefreshRequested)
        ));
    }

    #[test]
    fn quit_commands_are_recognized() {
        assert!(matches!(
            CommandReader::parse_command("q"),
            Some(ApplicationEvent::ShutdownRequested)
        ));
        assert!(matches!(
            CommandReader::parse_command("QUIT"),
            Some(ApplicationEvent::ShutdownRequested)
        ));
    }

    #[test]
    fn unknown_input_is_ignored() {
        assert!(CommandReader::parse_command("reload").is_none());
    }
}
