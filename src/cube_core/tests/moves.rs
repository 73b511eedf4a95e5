use cube_core::{
    Color, CubeState, Face, Facelet, MoveToken, Position, Symbol, apply_move, apply_sequence,
    notation::{Modifier, parse_moves},
};
use itertools::Itertools;
use log::info;

const SCRAMBLES: [&str; 4] = [
    "R U R' U' R' F R2 U' R' U' R U R' F'",
    "x y2 M' E2 S u' d2 r l' f b2 z'",
    "F2 B2 L2 R2 U2 D2",
    "M2 E2 S2 x' R U2 r' y L d' b2 E",
];

/// A scrambled, non-canonical state to run properties against
fn scrambled(i: usize) -> CubeState {
    apply_sequence(&CubeState::solved(), parse_moves(SCRAMBLES[i % SCRAMBLES.len()]))
}

fn assert_structurally_valid(state: &CubeState) {
    assert_eq!(state.facelets().len(), 54);

    let positions = state.facelets().iter().map(Facelet::position).counts();
    assert_eq!(positions.len(), 54);
    assert!(Position::all().all(|position| positions.get(&position) == Some(&1)));

    let colors = state.facelets().iter().map(|f| f.color).counts();
    for color in Color::ALL {
        assert_eq!(colors.get(&color), Some(&9), "{color}");
    }
}

#[test_log::test]
fn test_scrambles_keep_invariants() {
    for i in 0..SCRAMBLES.len() {
        let state = scrambled(i);
        assert_structurally_valid(&state);
        assert!(!state.is_solved(), "{}", SCRAMBLES[i]);

        for token in MoveToken::all() {
            assert_structurally_valid(&apply_move(&state, token).0);
        }
    }
}

#[test_log::test]
fn test_quarter_turn_periodicity() {
    for symbol in Symbol::ALL {
        let token = MoveToken::new(symbol, Modifier::None);
        for i in 0..SCRAMBLES.len() {
            let state = scrambled(i);
            let after = apply_sequence(&state, [token; 4]);
            assert_eq!(
                after.colors_by_position(),
                state.colors_by_position(),
                "{token}^4"
            );
        }
    }
}

#[test_log::test]
fn test_modifier_consistency() {
    let state = scrambled(1);
    let colors = state.colors_by_position();

    for symbol in Symbol::ALL {
        let single = MoveToken::new(symbol, Modifier::None);
        let prime = MoveToken::new(symbol, Modifier::Prime);
        let double = MoveToken::new(symbol, Modifier::Double);

        assert_eq!(
            apply_sequence(&state, [single, prime]).colors_by_position(),
            colors,
            "{symbol} {symbol}'"
        );
        assert_eq!(
            apply_sequence(&state, [prime, single]).colors_by_position(),
            colors,
            "{symbol}' {symbol}"
        );
        assert_eq!(
            apply_sequence(&state, [double, double]).colors_by_position(),
            colors,
            "{symbol}2 {symbol}2"
        );
        assert_eq!(
            apply_move(&state, double).0.colors_by_position(),
            apply_sequence(&state, [single, single]).colors_by_position(),
            "{symbol}2"
        );
    }
}

#[test_log::test]
fn test_single_turns_leave_solved() {
    for token in MoveToken::all() {
        let moved = apply_move(&CubeState::solved(), token).0;
        let whole_cube = matches!(token.symbol, Symbol::x | Symbol::y | Symbol::z);
        info!("Checking {token}");
        assert_eq!(moved.is_solved(), whole_cube, "{token}");
    }
}

#[test_log::test]
fn test_sexy_move_order() {
    let sexy = parse_moves("R U R' U'");
    let solved = CubeState::solved();

    let mut state = solved.clone();
    for n in 1..=6 {
        state = apply_sequence(&state, sexy.iter().copied());
        assert_eq!(state.is_solved(), n == 6, "after {n} repetitions");
    }
    assert_eq!(state.colors_by_position(), solved.colors_by_position());
}

#[test_log::test]
fn test_wide_moves_are_face_plus_slice() {
    let state = scrambled(0);
    for (wide, expanded) in [
        ("u", "U E'"),
        ("d", "D E"),
        ("r", "R M'"),
        ("l", "L M"),
        ("f", "F S"),
        ("b", "B S'"),
        ("x", "R L' M'"),
        ("y", "U D' E'"),
        ("z", "F S B'"),
    ] {
        assert_eq!(
            apply_sequence(&state, parse_moves(wide)).colors_by_position(),
            apply_sequence(&state, parse_moves(expanded)).colors_by_position(),
            "{wide} = {expanded}"
        );
    }
}

#[test_log::test]
fn test_rotations_relabel_faces() {
    // After y the front face holds what was on the right
    let state = scrambled(2);
    let rotated = apply_move(&state, "y".parse().unwrap()).0;

    let before = state.colors_by_position();
    let after = rotated.colors_by_position();
    for (front, right) in Position::all()
        .filter(|p| p.face == Face::F)
        .zip(Position::all().filter(|p| p.face == Face::R))
    {
        assert_eq!(after[front.index()], before[right.index()]);
    }
}
