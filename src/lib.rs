//! DSA Sage is a terminal chat client for a data-structures-and-algorithms
//! tutor hosted on the Gemini API.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the transcript, the UI state holder, configuration, and
//!   the single in-flight reply request.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//! - [`api`] defines the `generateContent` payloads and the HTTP client.
//! - [`auth`] stores and resolves the API key.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod auth;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
