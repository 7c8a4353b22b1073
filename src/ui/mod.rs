//! Terminal UI layer for interactive chat sessions.
//!
//! - [`chat_loop`]: terminal lifecycle, input mapping, and the loop that
//!   ties terminal events and model replies to [`crate::core::app`].
//! - [`renderer`] and [`layout`]: frame composition and transcript layout.
//! - [`theme`]: colors and styles.

pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod theme;
