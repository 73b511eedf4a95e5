use std::fmt;

use crate::{
    expand::expand,
    notation::{MoveToken, Primitive},
    state::CubeState,
    table::rules_for,
};

/// A set of facelet indices, one bit per facelet
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Touched(u64);

impl Touched {
    pub fn insert(&mut self, index: usize) {
        self.0 |= 1u64 << index;
    }

    pub fn contains(self, index: usize) -> bool {
        self.0 & (1u64 << index) != 0
    }

    pub fn union(self, other: Touched) -> Touched {
        Touched(self.0 | other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..u64::BITS as usize).filter(move |&i| self.contains(i))
    }
}

impl fmt::Debug for Touched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Apply one quarter turn. Every facelet is matched against the rule list as
/// it stood before the turn, so a facelet moved by one rule is never picked
/// up again by a later one.
pub fn apply_primitive(state: &CubeState, primitive: Primitive) -> (CubeState, Touched) {
    let rules = rules_for(primitive);
    let mut next = state.clone();
    let mut touched = Touched::default();

    for (index, (before, after)) in state
        .facelets()
        .iter()
        .zip(next.facelets_mut())
        .enumerate()
    {
        let position = before.position();
        if let Some(rule) = rules.iter().find(|rule| rule.source.matches(position)) {
            after.set_position(rule.destination.relocate(position));
            touched.insert(index);
        }
    }

    (next, touched)
}

/// Apply a whole move, folding its primitive turns over `state`. Only the
/// final state is returned; `touched` is every facelet moved by any step.
pub fn apply_move(state: &CubeState, token: MoveToken) -> (CubeState, Touched) {
    expand(token).into_iter().fold(
        (state.clone(), Touched::default()),
        |(state, touched), primitive| {
            let (next, moved) = apply_primitive(&state, primitive);
            (next, touched.union(moved))
        },
    )
}

/// Apply a sequence of moves in order
pub fn apply_sequence(
    state: &CubeState,
    tokens: impl IntoIterator<Item = MoveToken>,
) -> CubeState {
    tokens
        .into_iter()
        .fold(state.clone(), |state, token| apply_move(&state, token).0)
}

/// The state presented while a move animates: the pre-move facelets with
/// exactly the touched ones flagged as in transit
pub fn mark_in_transit(state: &CubeState, touched: Touched) -> CubeState {
    let mut marked = state.clone();
    for (index, facelet) in marked.facelets_mut().iter_mut().enumerate() {
        facelet.in_transit = touched.contains(index);
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        facelet::{Color, Column, Face, Position, Row},
        notation::parse_moves,
    };

    fn token(s: &str) -> MoveToken {
        s.parse().unwrap()
    }

    #[test]
    fn colors_stay_with_their_facelet() {
        let solved = CubeState::solved();
        let (turned, touched) = apply_primitive(&solved, Primitive::U);
        assert_eq!(touched.len(), 21);
        for (before, after) in solved.facelets().iter().zip(turned.facelets()) {
            assert_eq!(before.color, after.color);
        }
    }

    #[test]
    fn u_moves_front_row_to_left() {
        let (turned, _) = apply_primitive(&CubeState::solved(), Primitive::U);
        for column in Column::ALL {
            let facelet = turned.at(Position::new(Face::L, Row::Top, column)).unwrap();
            assert_eq!(facelet.color, Color::Green);
        }
        let facelet = turned
            .at(Position::new(Face::L, Row::Middle, Column::Left))
            .unwrap();
        assert_eq!(facelet.color, Color::Orange);
    }

    #[test]
    fn slices_touch_twelve() {
        for primitive in [Primitive::M, Primitive::E, Primitive::S] {
            let (_, touched) = apply_primitive(&CubeState::solved(), primitive);
            assert_eq!(touched.len(), 12, "{primitive}");
        }
    }

    #[test]
    fn touched_unions_across_steps() {
        let (_, touched) = apply_move(&CubeState::solved(), token("r"));
        // R layer plus M layer
        assert_eq!(touched.len(), 33);
        let (_, touched) = apply_move(&CubeState::solved(), token("x"));
        assert_eq!(touched.len(), 54);
    }

    #[test]
    fn double_equals_two_singles() {
        let solved = CubeState::solved();
        let twice = apply_sequence(&solved, parse_moves("F F"));
        let double = apply_move(&solved, token("F2")).0;
        assert_eq!(twice, double);
    }

    #[test]
    fn transit_flags_follow_touched() {
        let solved = CubeState::solved();
        let (_, touched) = apply_move(&solved, token("E"));
        let marked = mark_in_transit(&solved, touched);
        for (index, facelet) in marked.facelets().iter().enumerate() {
            assert_eq!(facelet.in_transit, touched.contains(index));
            assert_eq!(facelet.position(), solved.facelets()[index].position());
        }
        assert_eq!(marked.facelets().iter().filter(|f| f.in_transit).count(), 12);
    }

    #[test]
    fn touched_iterates_in_order() {
        let mut touched = Touched::default();
        assert!(touched.is_empty());
        touched.insert(53);
        touched.insert(0);
        touched.insert(17);
        assert_eq!(touched.iter().collect::<Vec<_>>(), vec![0, 17, 53]);
        assert_eq!(format!("{touched:?}"), "{0, 17, 53}");
    }
}
