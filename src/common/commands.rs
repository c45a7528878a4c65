/// Commands sent from the UI to the network worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Open a server-side session. Issued once when the window starts.
    CreateSession,
    SendMessage(String),
    /// Close the server-side session.
    EndSession,
}
