use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatEvent};

use super::components::{chat_area, input_bar, session_bar};
use super::state::AppState;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChatApp {
    title: String,
    state: AppState,
    command_sender: mpsc::Sender<ChatCommand>,
    event_receiver: mpsc::Receiver<ChatEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        title: String,
        command_sender: mpsc::Sender<ChatCommand>,
        event_receiver: mpsc::Receiver<ChatEvent>,
    ) -> Self {
        Self::with_channels(title, command_sender, event_receiver)
    }

    /// Builds the app and opens a session right away.
    fn with_channels(
        title: String,
        command_sender: mpsc::Sender<ChatCommand>,
        event_receiver: mpsc::Receiver<ChatEvent>,
    ) -> Self {
        let mut app = Self {
            title,
            state: AppState::new(),
            command_sender,
            event_receiver,
        };
        app.send_command(ChatCommand::CreateSession);
        app
    }

    fn handle_chat_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ChatEvent::MessageReceived(message) => self.state.push_message(message),
            }
        }
    }

    fn submit(&mut self) {
        if let Some(text) = self.state.submit_input() {
            self.send_command(ChatCommand::SendMessage(text));
        }
    }

    fn end_session(&mut self) {
        self.send_command(ChatCommand::EndSession);
    }

    fn send_command(&mut self, command: ChatCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to chat worker: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_chat_events();

        egui::TopBottomPanel::top("session_bar").show(ctx, |ui| {
            if session_bar::render(ui, &self.title) {
                self.end_session();
            }
        });

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            if input_bar::render(ui, &mut self.state.input_text) {
                self.submit();
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat_area::render(ui, &self.state.messages);
        });

        // Replies arrive on the worker's schedule, not on user input.
        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
