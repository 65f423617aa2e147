//! Session crate for the movie table.
//!
//! Owns everything that changes while the table is on screen: the view,
//! the current criteria and the sort toggles. User actions arrive as
//! [`Command`]s and every command leaves a view ready to render.

pub mod command;
pub mod render;
pub mod session;

pub use command::Command;
pub use render::{display_rows, DisplayRow, JsonRenderer, Renderer, TextTableRenderer, NOT_AVAILABLE};
pub use session::MovieTableSession;
