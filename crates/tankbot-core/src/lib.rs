//! Core types and definitions for the tank agent.
//!
//! This crate defines the vocabulary shared by the agent and the binary:
//! geometric types, object kinds, wire messages, actions, constants and errors.
//! It performs no I/O.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod messages;
pub mod objects;
pub mod types;

pub use error::AgentError;
