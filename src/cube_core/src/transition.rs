//! Presentation hints for animating a move. None of this affects the logical
//! state; it only tells a front-end which way to rotate the moving cells and
//! for how long.

use std::{fmt, time::Duration};

use crate::{
    notation::{Modifier, MoveToken, Symbol},
    permute::Touched,
    state::CubeState,
};

/// Default duration of a quarter turn animation, in milliseconds
pub const DEFAULT_SPEED_MS: u64 = 200;
pub const DEFAULT_SPEED: Duration = Duration::from_millis(DEFAULT_SPEED_MS);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
    Half,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tempo {
    Fast,
    Slow,
}

/// How a move is animated: the rotation axis, the direction and the tempo
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransformClass {
    pub axis: Axis,
    pub spin: Spin,
    pub tempo: Tempo,
}

impl TransformClass {
    pub fn for_token(token: MoveToken) -> TransformClass {
        let (axis, clockwise) = match token.symbol {
            Symbol::U | Symbol::u | Symbol::y => (Axis::Y, true),
            Symbol::D | Symbol::d | Symbol::E => (Axis::Y, false),
            Symbol::R | Symbol::r | Symbol::x => (Axis::X, true),
            Symbol::L | Symbol::l | Symbol::M => (Axis::X, false),
            Symbol::F | Symbol::f | Symbol::S | Symbol::z => (Axis::Z, true),
            Symbol::B | Symbol::b => (Axis::Z, false),
        };

        let (spin, tempo) = match (token.modifier, clockwise) {
            (Modifier::Double, _) => (Spin::Half, Tempo::Slow),
            (Modifier::None, true) | (Modifier::Prime, false) => (Spin::Clockwise, Tempo::Fast),
            (Modifier::None, false) | (Modifier::Prime, true) => {
                (Spin::CounterClockwise, Tempo::Fast)
            }
        };

        TransformClass { axis, spin, tempo }
    }

    /// How long the animation runs given the duration of a quarter turn
    pub fn duration(self, speed: Duration) -> Duration {
        match self.tempo {
            Tempo::Fast => speed,
            Tempo::Slow => speed * 2,
        }
    }
}

/// Renders as CSS class names, e.g. `move-fast move-ycc`
impl fmt::Display for TransformClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tempo = match self.tempo {
            Tempo::Fast => "fast",
            Tempo::Slow => "slow",
        };
        let axis = match self.axis {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        let spin = match self.spin {
            Spin::Clockwise => "c",
            Spin::CounterClockwise => "cc",
            Spin::Half => "2",
        };

        write!(f, "move-{tempo} move-{axis}{spin}")
    }
}

/// A move in the middle of being animated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub token: MoveToken,
    pub class: TransformClass,
    /// The pre-move state with the moving facelets flagged in transit
    pub presented: CubeState,
    pub touched: Touched,
}
