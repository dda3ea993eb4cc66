//! Headless agent for the tank match.
//!
//! Owns the local world model, runs the handshake and the per-turn protocol
//! over a [`transport::Transport`], and asks a pluggable
//! [`strategy::Strategy`] for the actions to send back. Completely
//! synchronous: one blocking read per protocol step.

pub mod guidance;
pub mod strategy;
pub mod transport;
pub mod turn_loop;
pub mod world;

pub use tankbot_core as core;
pub use turn_loop::TurnLoop;
pub use world::WorldModel;
