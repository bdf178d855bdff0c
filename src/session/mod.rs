use std::collections::VecDeque;

use tracing::trace;

use crate::operations::{CommandInterpreter, Move};
use crate::render::{RenderParams, SceneMesh, TessellateLattice};
use crate::state::CubeLattice;
use crate::view::{ViewControls, ViewKey, ViewParams, ViewState};

/// Owns one lattice and its camera for the lifetime of a program.
///
/// Input handlers only [`enqueue`](Session::enqueue) command tokens and
/// toggle keys; [`update`](Session::update) is the single place where the
/// lattice is mutated, so a renderer reading between updates never sees a
/// turn in progress.
#[derive(Debug, Default)]
pub struct Session {
    lattice: CubeLattice,
    interpreter: CommandInterpreter,
    pending: VecDeque<String>,
    controls: ViewControls,
    view: ViewState,
    render: RenderParams,
}

impl Session {
    #[must_use]
    pub fn new(view: ViewParams, render: RenderParams) -> Self {
        Self {
            view: ViewState::new(view),
            render,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn lattice(&self) -> &CubeLattice {
        &self.lattice
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn controls(&self) -> &ViewControls {
        &self.controls
    }

    /// Number of tokens waiting for the next update.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Queues a command token for the next update.
    pub fn enqueue(&mut self, token: impl Into<String>) {
        self.pending.push_back(token.into());
    }

    /// Records a camera key press or release.
    pub fn set_key(&mut self, key: ViewKey, pressed: bool) {
        self.controls.set(key, pressed);
    }

    /// Applies queued commands in arrival order, then advances the camera by
    /// `elapsed` seconds. Returns the moves that were performed.
    pub fn update(&mut self, elapsed: f64) -> Vec<Move> {
        trace!(pending = self.pending.len(), "draining command queue");
        let mut applied = Vec::new();
        while let Some(token) = self.pending.pop_front() {
            if let Some(mv) = self.interpreter.execute(&mut self.lattice, &token) {
                applied.push(mv);
            }
        }
        self.view.advance(&self.controls, elapsed);
        applied
    }

    /// Tessellates the current lattice.
    #[must_use]
    pub fn scene(&self) -> SceneMesh {
        TessellateLattice::new(self.render).execute(&self.lattice)
    }
}
