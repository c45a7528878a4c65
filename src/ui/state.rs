use crate::common::ChatMessage;

/// Local state of the chat window.
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
        }
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Moves the typed text into the chat as the user's own bubble.
    ///
    /// Returns the text to send, or `None` when the input is empty. Only
    /// the empty string counts as empty; whitespace is sent as typed.
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input_text.is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input_text);
        self.push_message(ChatMessage::me(text.clone()));
        Some(text)
    }
}
