//! A 3x3x3 cube modelled as 54 facelets. Moves written in SiGN notation are
//! expanded into primitive quarter turns, each of which relocates facelets
//! according to a fixed rule table. A [`Session`] queues moves and commits
//! them one at a time, optionally waiting for a front-end to animate each.
//!
//! ```
//! use cube_core::Session;
//!
//! let mut session = Session::new(());
//! session.enqueue_sequence("R U R' U'", true);
//! session.run_until_blocked();
//! assert!(!session.is_solved());
//! ```

pub mod expand;
pub mod facelet;
pub mod geometry;
pub mod notation;
pub mod permute;
pub mod session;
pub mod state;
pub mod table;
pub mod transition;
pub mod view;

pub use facelet::{Color, Column, Face, Facelet, Position, Row};
pub use notation::{Modifier, MoveToken, NotationError, Primitive, Symbol};
pub use permute::{Touched, apply_move, apply_primitive, apply_sequence};
pub use session::{Observer, QueuedMove, Session, Status, Step};
pub use state::{CubeState, FaceletRecord, StateError, StateFile};
pub use transition::{TransformClass, Transition};
