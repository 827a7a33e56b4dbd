//! Caller-owned store: holds the current state and threads it through a reducer.
//!
//! There is no process-wide store. Whoever owns a [`Store`] owns its state;
//! each dispatch replaces it with the reducer's output.

use std::marker::PhantomData;

use anyhow::{Result, bail};
use tracing::{debug, warn};

use crate::core::reducer::Reducer;
use crate::core::types::Action;
use crate::core::validate::validate_action;

/// Actions a [`Store`] can accept.
pub trait Dispatchable {
    /// Short tag used in logs.
    fn kind(&self) -> &'static str;

    /// Payload problems that make the action unusable. Empty when valid.
    fn violations(&self) -> Vec<String> {
        Vec::new()
    }
}

impl Dispatchable for Action {
    fn kind(&self) -> &'static str {
        Action::kind(self)
    }

    fn violations(&self) -> Vec<String> {
        validate_action(self)
    }
}

pub struct Store<R, A>
where
    R: Reducer<A>,
{
    reducer: R,
    state: R::State,
    dispatched: u64,
    _action: PhantomData<fn(&A)>,
}

impl<R, A> Store<R, A>
where
    R: Reducer<A>,
    A: Dispatchable,
{
    /// Start from the reducer's default state.
    pub fn new(reducer: R) -> Self
    where
        R::State: Default,
    {
        Self::with_state(reducer, Default::default())
    }

    /// Start from a previously stored state.
    pub fn with_state(reducer: R, state: R::State) -> Self {
        Self {
            reducer,
            state,
            dispatched: 0,
            _action: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn into_state(self) -> R::State {
        self.state
    }

    /// Number of actions applied so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply `action` and keep the resulting state.
    ///
    /// Actions with payload violations are rejected and the state is left as is.
    pub fn dispatch(&mut self, action: &A) -> Result<&R::State> {
        let violations = action.violations();
        if !violations.is_empty() {
            warn!(
                action = action.kind(),
                violations = violations.len(),
                "rejecting action"
            );
            bail!(
                "invalid {} action:\n- {}",
                action.kind(),
                violations.join("\n- ")
            );
        }

        debug!(action = action.kind(), seq = self.dispatched, "dispatching action");
        self.state = self.reducer.reduce(Some(&self.state), action);
        self.dispatched += 1;
        Ok(&self.state)
    }
}
