//! Model types for the workspace
//!
//! The model holds all layout state. Mutations happen only through
//! `update::update()`, or directly through the panel API in tests and
//! embedders that bypass the message loop.

mod workspace;

pub use workspace::Workspace;
