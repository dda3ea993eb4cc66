//! Tank agent application.
//!
//! Wires configuration, logging and stdin/stdout into the headless agent.

pub mod config;
pub mod game_loop;
pub mod logging;

pub use tankbot_core as core;
