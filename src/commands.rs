//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the embedder should perform after an
//! update. The engine itself never draws or touches the disk.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Layout changed; the view should redraw
    Redraw,
    /// Panel sizes settled; persist them if the embedder keeps a session
    SaveSession,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SaveSession => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }

    /// Check if this command asks for the session to be persisted
    pub fn wants_save(&self) -> bool {
        match self {
            Cmd::SaveSession => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::wants_save),
            Cmd::None | Cmd::Redraw => false,
        }
    }
}
