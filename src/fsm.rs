use std::fmt;

use crate::error::DemoError;
use crate::renderer::Canvas;

/// Behavior hooks for one state variant acting on an owner `O`.
///
/// States carry no data of their own: every mutable field lives on the owner,
/// which is handed to each hook explicitly. Hooks that want a transition
/// return the next state instead of reaching back into the machine.
pub trait State<O>: Copy + PartialEq + fmt::Debug {
    /// Per-call context (clock reading and the like).
    type Ctx;
    type Event;

    fn enter(self, owner: &mut O, ctx: &Self::Ctx);

    fn exit(self, owner: &mut O, ctx: &Self::Ctx);

    /// Per-tick behavior. Returns `Some(next)` to change state.
    fn tick(self, owner: &mut O, ctx: &Self::Ctx) -> Option<Self>;

    fn draw(self, owner: &O, canvas: &mut dyn Canvas) -> Result<(), DemoError>;

    /// States that don't care about input keep the default and ignore it.
    fn handle_event(self, _owner: &mut O, _event: &Self::Event, _ctx: &Self::Ctx) -> Option<Self> {
        None
    }
}

/// Minimal finite-state-machine container.
///
/// The machine only tracks which state is active; the owner is passed in on
/// every call so it can live next to the machine in the same struct.
///
/// # Usage
/// ```ignore
/// let mut fsm = StateMachine::new();
/// fsm.start(MyState::Idle, &mut owner, &ctx);
/// // Each frame:
/// fsm.update(&mut owner, &ctx);
/// fsm.draw(&owner, &mut canvas)?;
/// ```
pub struct StateMachine<S> {
    current: Option<S>,
    previous: Option<S>,
    transitions: u64,
}

impl<S> StateMachine<S> {
    /// An unstarted machine. Call [`StateMachine::start`] before anything else.
    pub fn new() -> Self {
        Self {
            current: None,
            previous: None,
            transitions: 0,
        }
    }

    pub fn start<O>(&mut self, state: S, owner: &mut O, ctx: &<S as State<O>>::Ctx)
    where
        S: State<O>,
    {
        log::debug!("fsm start in {state:?}");
        self.current = Some(state);
        state.enter(owner, ctx);
    }

    pub fn update<O>(&mut self, owner: &mut O, ctx: &<S as State<O>>::Ctx)
    where
        S: State<O>,
    {
        let Some(state) = self.current else {
            log::warn!("fsm update before start, ignored");
            return;
        };
        if let Some(next) = state.tick(owner, ctx) {
            self.change_state(next, owner, ctx);
        }
    }

    pub fn draw<O>(&self, owner: &O, canvas: &mut dyn Canvas) -> Result<(), DemoError>
    where
        S: State<O>,
    {
        match self.current {
            Some(state) => state.draw(owner, canvas),
            None => Ok(()),
        }
    }

    /// Exit the current state (if any), then enter `next`.
    /// There is no same-state guard: re-entering runs the full exit + enter.
    pub fn change_state<O>(&mut self, next: S, owner: &mut O, ctx: &<S as State<O>>::Ctx)
    where
        S: State<O>,
    {
        if let Some(old) = self.current {
            old.exit(owner, ctx);
        }
        log::debug!("fsm {:?} -> {next:?}", self.current);
        self.previous = self.current.replace(next);
        self.transitions += 1;
        next.enter(owner, ctx);
    }

    pub fn handle_event<O>(&mut self, owner: &mut O, event: &<S as State<O>>::Event, ctx: &<S as State<O>>::Ctx)
    where
        S: State<O>,
    {
        let Some(state) = self.current else {
            return;
        };
        if let Some(next) = state.handle_event(owner, event, ctx) {
            self.change_state(next, owner, ctx);
        }
    }
}

impl<S> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy> StateMachine<S> {
    pub fn current(&self) -> Option<S> {
        self.current
    }

    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    /// Number of `change_state` calls since construction (`start` not counted).
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}
