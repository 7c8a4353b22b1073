pub mod app;
pub mod config;
pub mod constants;
pub mod keyring;
pub mod message;
pub mod reply;
pub mod transcript;
