//! The move queue. A `Session` owns the cube state and the pending moves and
//! commits them one at a time, either immediately (silent moves) or after the
//! presentation layer reports that the move's animation has finished.
//!
//! Nothing runs on its own: the host calls [`Session::frame`] after each
//! rendering pass and [`Session::transition_complete`] when an animation ends.

use std::{collections::VecDeque, mem};

use log::{debug, info, trace};

use crate::{
    facelet::Facelet,
    notation::MoveToken,
    permute::{apply_move, mark_in_transit},
    state::{CubeState, FaceletRecord, StateError},
    transition::{TransformClass, Transition},
};

/// Receives the notifications a session raises
pub trait Observer {
    /// A move was committed, animated or not
    fn move_finished(&mut self, _token: MoveToken) {}

    /// The queue drained and the cube is solved
    fn solved(&mut self) {}

    /// A transitional state is ready to be animated. The session waits for
    /// `transition_complete` before doing anything else.
    fn transition_started(&mut self, _transition: &Transition) {}
}

impl Observer for () {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QueuedMove {
    pub token: MoveToken,
    /// Silent moves are committed without an animation handshake
    pub silent: bool,
}

/// What the session is doing between calls
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    /// Running, with a processing step waiting for the next frame
    StepScheduled,
    /// Running, blocked on the animation of the presented transition
    Animating,
}

/// The outcome of one call to `Session::frame`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing was scheduled
    Idle,
    /// An animation is pending; nothing happened
    Blocked,
    /// A silent move was committed
    Committed(MoveToken),
    /// An animated move was presented
    Started(MoveToken),
    /// The queue was empty and the session went idle
    Drained { solved: bool },
}

#[derive(Debug)]
enum Phase {
    Idle,
    StepScheduled,
    Animating {
        next: CubeState,
        transition: Transition,
    },
}

/// A cube together with its queue of pending moves
pub struct Session<O: Observer = ()> {
    state: CubeState,
    queue: VecDeque<QueuedMove>,
    phase: Phase,
    observer: O,
}

impl<O: Observer> Session<O> {
    /// A new idle session holding a solved cube
    pub fn new(observer: O) -> Session<O> {
        Session {
            state: CubeState::solved(),
            queue: VecDeque::new(),
            phase: Phase::Idle,
            observer,
        }
    }

    /// Queue a single move. Returns `false`, and changes nothing, if the token
    /// is not valid notation.
    pub fn enqueue_move(&mut self, token: &str, silent: bool) -> bool {
        match token.parse::<MoveToken>() {
            Ok(token) => {
                self.push(token, silent);
                self.schedule_if_idle();
                true
            }
            Err(e) => {
                debug!(target: "intake", "Dropped move token {token:?}: {e}");
                false
            }
        }
    }

    /// Queue several moves in order, silently dropping invalid ones. Returns
    /// how many were queued.
    pub fn enqueue_moves<I, S>(&mut self, tokens: I, silent: bool) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut queued = 0;
        for token in tokens {
            let token = token.as_ref();
            match token.parse::<MoveToken>() {
                Ok(token) => {
                    self.push(token, silent);
                    queued += 1;
                }
                Err(e) => debug!(target: "intake", "Dropped move token {token:?}: {e}"),
            }
        }

        if queued > 0 {
            self.schedule_if_idle();
        }
        queued
    }

    /// Queue a whitespace separated move sequence such as `"R U R' U'"`
    pub fn enqueue_sequence(&mut self, moves: &str, silent: bool) -> usize {
        self.enqueue_moves(moves.split_whitespace(), silent)
    }

    fn push(&mut self, token: MoveToken, silent: bool) {
        trace!(target: "intake", "Queued move: token={token} silent={silent}");
        self.queue.push_back(QueuedMove { token, silent });
    }

    fn schedule_if_idle(&mut self) {
        if matches!(self.phase, Phase::Idle) {
            debug!(target: "session", "Starting: queued={}", self.queue.len());
            self.phase = Phase::StepScheduled;
        }
    }

    /// Run the scheduled processing step, if any. Call this once after each
    /// rendering pass.
    pub fn frame(&mut self) -> Step {
        match self.phase {
            Phase::Idle => return Step::Idle,
            Phase::Animating { .. } => return Step::Blocked,
            Phase::StepScheduled => {}
        }

        let Some(QueuedMove { token, silent }) = self.queue.pop_front() else {
            self.phase = Phase::Idle;
            let solved = self.state.is_solved();
            info!(target: "session", "Queue drained: solved={solved}");
            if solved {
                self.observer.solved();
            }
            return Step::Drained { solved };
        };

        let (next, touched) = apply_move(&self.state, token);

        if silent {
            debug!(target: "session", "Committed silent move: token={token}");
            self.state = next;
            self.observer.move_finished(token);
            return Step::Committed(token);
        }

        let transition = Transition {
            token,
            class: TransformClass::for_token(token),
            presented: mark_in_transit(&self.state, touched),
            touched,
        };
        debug!(
            target: "session",
            "Presenting move: token={token} class={} moving={}",
            transition.class,
            touched.len(),
        );
        self.observer.transition_started(&transition);
        self.phase = Phase::Animating { next, transition };

        Step::Started(token)
    }

    /// Signal that the presented transition finished animating. Commits the
    /// pending move and schedules the next step. Returns `false` if no
    /// transition was pending, e.g. because the session was reset meanwhile.
    pub fn transition_complete(&mut self) -> bool {
        match mem::replace(&mut self.phase, Phase::StepScheduled) {
            Phase::Animating { next, transition } => {
                debug!(target: "session", "Committed animated move: token={}", transition.token);
                self.state = next;
                self.observer.move_finished(transition.token);
                true
            }
            phase => {
                debug!(target: "session", "Ignoring stray transition completion");
                self.phase = phase;
                false
            }
        }
    }

    /// Call `frame` until the session is idle or waiting on an animation.
    /// Returns the number of frames run.
    pub fn run_until_blocked(&mut self) -> usize {
        let mut frames = 0;
        loop {
            frames += 1;
            match self.frame() {
                Step::Committed(_) => {}
                Step::Idle | Step::Blocked | Step::Started(_) | Step::Drained { .. } => {
                    return frames;
                }
            }
        }
    }

    /// Drop all pending work and return to a solved, idle cube
    pub fn reset(&mut self) {
        info!(target: "session", "Reset: discarded={}", self.queue.len());
        self.queue.clear();
        self.phase = Phase::Idle;
        self.state = CubeState::solved();
    }

    /// Replace the whole state from external records. On error nothing
    /// changes; on success the session is idle with an empty queue.
    pub fn set_state<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a FaceletRecord>,
    ) -> Result<(), StateError> {
        let state = CubeState::from_records(records)?;
        self.replace_state(state);
        Ok(())
    }

    /// Like `set_state`, for facelets that are already typed
    pub fn set_facelets(
        &mut self,
        facelets: impl IntoIterator<Item = Facelet>,
    ) -> Result<(), StateError> {
        let state = CubeState::from_facelets(facelets)?;
        self.replace_state(state);
        Ok(())
    }

    fn replace_state(&mut self, state: CubeState) {
        info!(target: "session", "State replaced: discarded={}", self.queue.len());
        self.queue.clear();
        self.phase = Phase::Idle;
        self.state = state;
    }

    /// The committed state. While a move animates this is still the state
    /// from before that move.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// An owned copy of the committed state
    pub fn snapshot(&self) -> CubeState {
        self.state.clone()
    }

    /// What the presentation layer should show: the transitional state while
    /// a move animates, the committed state otherwise
    pub fn presented(&self) -> &CubeState {
        match &self.phase {
            Phase::Animating { transition, .. } => &transition.presented,
            _ => &self.state,
        }
    }

    pub fn transition(&self) -> Option<&Transition> {
        match &self.phase {
            Phase::Animating { transition, .. } => Some(transition),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Idle => Status::Idle,
            Phase::StepScheduled => Status::StepScheduled,
            Phase::Animating { .. } => Status::Animating,
        }
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Moves still waiting, head first. The move being animated is not
    /// included.
    pub fn queued(&self) -> impl Iterator<Item = &QueuedMove> {
        self.queue.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

impl<O: Observer + Default> Default for Session<O> {
    fn default() -> Self {
        Session::new(O::default())
    }
}
