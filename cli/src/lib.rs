//! Terminal client for the human-detection history service.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod output;
