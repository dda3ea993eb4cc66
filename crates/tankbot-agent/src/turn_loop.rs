//! Protocol state machine: handshake, then one read/decide/respond cycle per
//! turn until the end-of-game sentinel.
//!
//! `TurnLoop` is the only writer of the [`WorldModel`]. Strategies see it
//! read-only, after all of a turn's updates and deletes have been applied.

use serde_json::Value;
use tracing::{debug, info, trace};

use tankbot_core::constants::{END_GAME_SIGNAL, END_INIT_SIGNAL};
use tankbot_core::messages::{Identity, InitUpdate, TurnUpdate};
use tankbot_core::AgentError;

use crate::strategy::Strategy;
use crate::transport::Transport;
use crate::world::WorldModel;

/// Sentinel messages marking protocol phase transitions, compared by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Signals {
    pub end_init: Value,
    pub end_game: Value,
}

impl Default for Signals {
    fn default() -> Self {
        Self {
            end_init: Value::String(END_INIT_SIGNAL.to_owned()),
            end_game: Value::String(END_GAME_SIGNAL.to_owned()),
        }
    }
}

/// Protocol phase after the handshake. The handshake itself runs inside
/// [`TurnLoop::handshake`], so a constructed loop is never mid-handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Steady,
    Terminated,
}

/// What happened over the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Turn messages applied (sentinels excluded).
    pub turns: u64,
    /// Non-empty action sets sent back.
    pub actions_sent: u64,
}

/// Drives the match over a transport with an injected strategy.
pub struct TurnLoop<T, S> {
    transport: T,
    strategy: S,
    signals: Signals,
    world: WorldModel,
    state: LoopState,
    summary: MatchSummary,
}

impl<T: Transport, S: Strategy> TurnLoop<T, S> {
    /// Run the handshake: read our tank id, then apply initialization
    /// messages until the end-of-initialization sentinel.
    ///
    /// Returns a loop in `Steady` state, or `Terminated` if the engine ended
    /// the game before initialization finished.
    pub fn handshake(mut transport: T, strategy: S, signals: Signals) -> Result<Self, AgentError> {
        debug!("waiting for tank identity");
        let identity = Identity::from_value(transport.read_message()?)?;
        info!(tank_id = %identity.tank_id, "received tank identity");

        let mut world = WorldModel::new(identity.tank_id);
        let mut init_messages = 0u32;
        let state = loop {
            let message = transport.read_message()?;
            if message == signals.end_init {
                break LoopState::Steady;
            }
            if message == signals.end_game {
                info!("game ended during initialization");
                break LoopState::Terminated;
            }

            let update = InitUpdate::from_value(message)?;
            for (id, object) in update.updated_objects {
                world.upsert(id, object);
            }
            init_messages += 1;
        };
        info!(init_messages, objects = world.len(), "initialization complete");

        Ok(Self {
            transport,
            strategy,
            signals,
            world,
            state,
            summary: MatchSummary::default(),
        })
    }

    /// Process one turn. After termination this returns immediately without
    /// touching the transport.
    pub fn step(&mut self) -> Result<LoopState, AgentError> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        let message = self.transport.read_message()?;
        if message == self.signals.end_game {
            info!(
                turns = self.summary.turns,
                actions_sent = self.summary.actions_sent,
                "game over"
            );
            self.state = LoopState::Terminated;
            return Ok(self.state);
        }

        let update = TurnUpdate::from_value(message)?;
        let (updated, deleted) = apply_update(&mut self.world, update);
        self.summary.turns += 1;
        debug!(turn = self.summary.turns, updated, deleted, "applied turn");

        let actions = self.strategy.decide(&self.world);
        if !actions.is_empty() {
            self.transport.post_message(&actions)?;
            self.summary.actions_sent += 1;
        }

        Ok(self.state)
    }

    /// Play turns until the end-of-game sentinel.
    pub fn run(&mut self) -> Result<MatchSummary, AgentError> {
        while self.step()? != LoopState::Terminated {}
        Ok(self.summary)
    }

    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn summary(&self) -> MatchSummary {
        self.summary
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Apply one turn: every update, then every delete.
///
/// Deletes run strictly after updates, so an id both updated and deleted in
/// the same message ends up deleted. Returns `(updated, deleted)` counts;
/// deletes of unknown ids are not counted.
pub fn apply_update(world: &mut WorldModel, update: TurnUpdate) -> (usize, usize) {
    let updated = update.updated_objects.len();
    for (id, object) in update.updated_objects {
        world.upsert(id, object);
    }

    let mut deleted = 0;
    for id in &update.deleted_objects {
        if world.remove(id.as_str()) {
            deleted += 1;
        } else {
            trace!(%id, "delete of unknown object ignored");
        }
    }
    (updated, deleted)
}
