pub mod commands;
pub mod error;
pub mod events;
pub mod types;

pub use commands::ChatCommand;
pub use error::ClientError;
pub use events::ChatEvent;
pub use types::{ChatMessage, Sender, TextPayload};
