use crate::common::types::ChatMessage;

/// Events sent from the network worker up to the UI.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    MessageReceived(ChatMessage),
}
