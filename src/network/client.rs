use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::common::{ChatCommand, ChatEvent, ChatMessage, Sender};

use super::api::SessionApi;

/// Background worker that turns UI commands into session requests.
///
/// Every command runs on its own task, so a slow reply never holds back a
/// later one and replies reach the UI in completion order. Failures are
/// logged and otherwise dropped; the UI only ever sees successful replies.
pub struct ChatClient {
    api: Arc<SessionApi>,
    event_sender: mpsc::Sender<ChatEvent>,
    command_receiver: mpsc::Receiver<ChatCommand>,
}

impl ChatClient {
    pub fn new(
        api: SessionApi,
        event_sender: mpsc::Sender<ChatEvent>,
        command_receiver: mpsc::Receiver<ChatCommand>,
    ) -> Self {
        Self {
            api: Arc::new(api),
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("Chat worker started");
        let mut in_flight = JoinSet::new();

        while let Some(command) = self.command_receiver.recv().await {
            let api = Arc::clone(&self.api);
            let event_sender = self.event_sender.clone();
            in_flight.spawn(handle_command(api, event_sender, command));

            // Reap finished requests so the set does not grow with the session.
            while let Some(result) = in_flight.try_join_next() {
                log_join_error(result);
            }
        }

        log::debug!(
            "Command channel closed; waiting for {} in-flight request(s)",
            in_flight.len()
        );
        while let Some(result) = in_flight.join_next().await {
            log_join_error(result);
        }
        log::info!("Chat worker stopped");
    }
}

async fn handle_command(
    api: Arc<SessionApi>,
    event_sender: mpsc::Sender<ChatEvent>,
    command: ChatCommand,
) {
    let (reply, sender) = match command {
        ChatCommand::CreateSession => (api.create_session().await, Sender::Bot),
        ChatCommand::SendMessage(text) => (api.send_message(&text).await, Sender::Bot),
        // The server's goodbye is shown on the user's side of the chat.
        ChatCommand::EndSession => (api.end_session().await, Sender::Me),
    };

    match reply {
        Ok(text) => {
            let message = ChatMessage::new(sender, text);
            if let Err(err) = event_sender.send(ChatEvent::MessageReceived(message)).await {
                log::warn!("Failed to notify UI about reply: {err}");
            }
        }
        Err(err) => log::error!("{err}"),
    }
}

fn log_join_error(result: Result<(), tokio::task::JoinError>) {
    if let Err(err) = result {
        log::error!("Request task failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    use crate::config::AppConfig;
    use crate::network::transport::build_http_client;

    /// Runs the worker over `commands` to completion and returns every event it emitted.
    async fn run_commands(base_url: &str, commands: Vec<ChatCommand>) -> Vec<ChatEvent> {
        let http = build_http_client(&AppConfig::default()).unwrap();
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, mut event_rx) = mpsc::channel(16);
        let client = ChatClient::new(SessionApi::new(http, base_url), event_tx, cmd_rx);

        for command in commands {
            cmd_tx.send(command).await.unwrap();
        }
        drop(cmd_tx);
        client.run().await;

        let mut events = Vec::new();
        while let Ok(event) = event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn messages(events: Vec<ChatEvent>) -> Vec<ChatMessage> {
        events
            .into_iter()
            .map(|ChatEvent::MessageReceived(message)| message)
            .collect()
    }

    #[tokio::test]
    async fn reply_becomes_exactly_one_bot_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .and(body_json(json!({"text": "weather?"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Sunny."})))
            .expect(1)
            .mount(&server)
            .await;

        let received = messages(
            run_commands(&server.uri(), vec![ChatCommand::SendMessage("weather?".into())]).await,
        );

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].sender, Sender::Bot);
        assert_eq!(received[0].content, "Sunny.");
    }

    #[tokio::test]
    async fn session_greeting_is_a_bot_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create_session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Hi there"})))
            .mount(&server)
            .await;

        let received = messages(run_commands(&server.uri(), vec![ChatCommand::CreateSession]).await);

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].sender, Sender::Bot);
        assert_eq!(received[0].content, "Hi there");
    }

    #[tokio::test]
    async fn end_session_reply_is_attributed_to_me() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/delete"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"text": "Session deleted."})),
            )
            .mount(&server)
            .await;

        let received = messages(run_commands(&server.uri(), vec![ChatCommand::EndSession]).await);

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].sender, Sender::Me);
        assert_eq!(received[0].content, "Session deleted.");
    }

    #[tokio::test]
    async fn undecodable_error_reply_emits_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let events = run_commands(&server.uri(), vec![ChatCommand::SendMessage("hi".into())]).await;
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn error_status_with_text_still_renders_a_bubble() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"text": "Session expired"})),
            )
            .mount(&server)
            .await;

        let received = messages(
            run_commands(&server.uri(), vec![ChatCommand::SendMessage("hi".into())]).await,
        );

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].sender, Sender::Bot);
        assert_eq!(received[0].content, "Session expired");
    }

    #[tokio::test]
    async fn unreachable_server_emits_nothing() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let events = run_commands(
            &format!("http://127.0.0.1:{port}"),
            vec![ChatCommand::CreateSession, ChatCommand::EndSession],
        )
        .await;
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn slow_reply_does_not_block_later_ones() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .and(body_json(json!({"text": "slow"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"text": "first"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .and(body_json(json!({"text": "fast"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "second"})))
            .mount(&server)
            .await;

        let received = messages(
            run_commands(
                &server.uri(),
                vec![
                    ChatCommand::SendMessage("slow".into()),
                    ChatCommand::SendMessage("fast".into()),
                ],
            )
            .await,
        );

        let contents: Vec<_> = received.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["second", "first"]);
    }
}
