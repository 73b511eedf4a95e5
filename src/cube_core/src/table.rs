//! The notation table: relocation rules for every primitive turn and the
//! primitive sequences behind every composite move.
//!
//! Face grids are read as seen from outside the cube. The side faces have
//! their top row against `U`, `U` has its bottom row against `F`, `D` has its
//! top row against `F`, and `B`'s left column sits against `R`. Within one
//! primitive no cell matches more than one source pattern; the tests in
//! `geometry` check every table against a rotation of sticker coordinates.

use crate::{
    facelet::{Column, Face, Position, Row},
    notation::{Primitive, Symbol},
};

/// A partial position. `None` matches anything in a source pattern and keeps
/// the current value in a destination pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    pub face: Option<Face>,
    pub row: Option<Row>,
    pub column: Option<Column>,
}

impl Pattern {
    pub fn matches(&self, position: Position) -> bool {
        self.face.is_none_or(|face| face == position.face)
            && self.row.is_none_or(|row| row == position.row)
            && self.column.is_none_or(|column| column == position.column)
    }

    /// Overwrite the specified fields of `position`
    pub fn relocate(&self, position: Position) -> Position {
        Position {
            face: self.face.unwrap_or(position.face),
            row: self.row.unwrap_or(position.row),
            column: self.column.unwrap_or(position.column),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rule {
    pub source: Pattern,
    pub destination: Pattern,
}

macro_rules! face {
    (_) => {
        None
    };
    ($v:ident) => {
        Some(Face::$v)
    };
}

macro_rules! row {
    (_) => {
        None
    };
    ($v:ident) => {
        Some(Row::$v)
    };
}

macro_rules! column {
    (_) => {
        None
    };
    ($v:ident) => {
        Some(Column::$v)
    };
}

macro_rules! rules {
    ($($sf:tt $sr:tt $sc:tt => $df:tt $dr:tt $dc:tt;)*) => {
        &[$(Rule {
            source: Pattern { face: face!($sf), row: row!($sr), column: column!($sc) },
            destination: Pattern { face: face!($df), row: row!($dr), column: column!($dc) },
        }),*]
    };
}

/// A face turn: the face's own grid rotates clockwise, followed by the ring
/// of neighbouring cells. The centre keeps its place but still counts as
/// moved.
macro_rules! face_turn {
    ($face:ident; $($ring:tt)*) => {
        rules! {
            $face Top Left => _ Top Right;
            $face Top Center => _ Middle Right;
            $face Top Right => _ Bottom Right;
            $face Middle Right => _ Bottom Center;
            $face Bottom Right => _ Bottom Left;
            $face Bottom Center => _ Middle Left;
            $face Bottom Left => _ Top Left;
            $face Middle Left => _ Top Center;
            $face Middle Center => _ _ _;
            $($ring)*
        }
    };
}

static U_RULES: &[Rule] = face_turn! { U;
    F Top _ => L _ _;
    L Top _ => B _ _;
    B Top _ => R _ _;
    R Top _ => F _ _;
};

static D_RULES: &[Rule] = face_turn! { D;
    F Bottom _ => R _ _;
    L Bottom _ => F _ _;
    B Bottom _ => L _ _;
    R Bottom _ => B _ _;
};

static R_RULES: &[Rule] = face_turn! { R;
    F _ Right => U _ _;
    D _ Right => F _ _;
    U Top Right => B Bottom Left;
    U Middle Right => B Middle Left;
    U Bottom Right => B Top Left;
    B Top Left => D Bottom Right;
    B Middle Left => D Middle Right;
    B Bottom Left => D Top Right;
};

static L_RULES: &[Rule] = face_turn! { L;
    F _ Left => D _ _;
    U _ Left => F _ _;
    D Top Left => B Bottom Right;
    D Middle Left => B Middle Right;
    D Bottom Left => B Top Right;
    B Top Right => U Bottom Left;
    B Middle Right => U Middle Left;
    B Bottom Right => U Top Left;
};

static F_RULES: &[Rule] = face_turn! { F;
    L Top Right => U Bottom Right;
    L Middle Right => U Bottom Center;
    L Bottom Right => U Bottom Left;
    U Bottom Left => R Top Left;
    U Bottom Center => R Middle Left;
    U Bottom Right => R Bottom Left;
    R Top Left => D Top Right;
    R Middle Left => D Top Center;
    R Bottom Left => D Top Left;
    D Top Left => L Top Right;
    D Top Center => L Middle Right;
    D Top Right => L Bottom Right;
};

static B_RULES: &[Rule] = face_turn! { B;
    R Top Right => U Top Left;
    R Middle Right => U Top Center;
    R Bottom Right => U Top Right;
    U Top Left => L Bottom Left;
    U Top Center => L Middle Left;
    U Top Right => L Top Left;
    L Top Left => D Bottom Left;
    L Middle Left => D Bottom Center;
    L Bottom Left => D Bottom Right;
    D Bottom Right => R Top Right;
    D Bottom Center => R Middle Right;
    D Bottom Left => R Bottom Right;
};

// Slices turn in the direction of the face named in brackets: M [L], E [D],
// S [F].

static M_RULES: &[Rule] = rules! {
    U _ Center => F _ _;
    F _ Center => D _ _;
    B Top Center => U Bottom _;
    B Middle Center => U _ _;
    B Bottom Center => U Top _;
    D Top Center => B Bottom _;
    D Middle Center => B _ _;
    D Bottom Center => B Top _;
};

static E_RULES: &[Rule] = rules! {
    F Middle _ => R _ _;
    L Middle _ => F _ _;
    B Middle _ => L _ _;
    R Middle _ => B _ _;
};

static S_RULES: &[Rule] = rules! {
    L Top Center => U Middle Right;
    L Middle Center => U Middle Center;
    L Bottom Center => U Middle Left;
    U Middle Left => R Top Center;
    U Middle Center => R Middle Center;
    U Middle Right => R Bottom Center;
    R Top Center => D Middle Right;
    R Middle Center => D Middle Center;
    R Bottom Center => D Middle Left;
    D Middle Left => L Top Center;
    D Middle Center => L Middle Center;
    D Middle Right => L Bottom Center;
};

/// The ordered relocation rules of one quarter turn
pub fn rules_for(primitive: Primitive) -> &'static [Rule] {
    match primitive {
        Primitive::U => U_RULES,
        Primitive::D => D_RULES,
        Primitive::R => R_RULES,
        Primitive::L => L_RULES,
        Primitive::F => F_RULES,
        Primitive::B => B_RULES,
        Primitive::M => M_RULES,
        Primitive::E => E_RULES,
        Primitive::S => S_RULES,
    }
}

/// The primitives making up one quarter turn of a composite move, or `None`
/// if `symbol` is itself a primitive
pub fn definition_for(symbol: Symbol) -> Option<&'static [Primitive]> {
    use crate::notation::Primitive as P;

    let definition: &'static [Primitive] = match symbol {
        Symbol::u => &[P::U, P::E, P::E, P::E],
        Symbol::d => &[P::D, P::E],
        Symbol::r => &[P::R, P::M, P::M, P::M],
        Symbol::l => &[P::L, P::M],
        Symbol::f => &[P::F, P::S],
        Symbol::b => &[P::B, P::S, P::S, P::S],
        Symbol::x => &[P::R, P::L, P::L, P::L, P::M, P::M, P::M],
        Symbol::y => &[P::U, P::D, P::D, P::D, P::E, P::E, P::E],
        Symbol::z => &[P::F, P::S, P::B, P::B, P::B],
        _ => return None,
    };

    Some(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_patterns_are_mutually_exclusive() {
        for primitive in Primitive::ALL {
            for position in Position::all() {
                let matching = rules_for(primitive)
                    .iter()
                    .filter(|rule| rule.source.matches(position))
                    .count();
                assert!(
                    matching <= 1,
                    "{position} matches {matching} rules of {primitive}"
                );
            }
        }
    }

    #[test]
    fn rules_cover_one_layer() {
        for primitive in Primitive::ALL {
            let moved = Position::all()
                .filter(|&position| {
                    rules_for(primitive)
                        .iter()
                        .any(|rule| rule.source.matches(position))
                })
                .count();
            let expected = match primitive {
                Primitive::M | Primitive::E | Primitive::S => 12,
                _ => 21,
            };
            assert_eq!(moved, expected, "{primitive}");
        }
    }

    #[test]
    fn primitives_have_no_definition() {
        for primitive in Primitive::ALL {
            assert_eq!(definition_for(primitive.symbol()), None);
        }
        for symbol in Symbol::ALL {
            let definition = definition_for(symbol);
            assert_eq!(definition.is_none(), symbol.as_primitive().is_some());
            if let Some(definition) = definition {
                assert!((2..=7).contains(&definition.len()), "{symbol}");
            }
        }
    }

    #[test]
    fn patterns_match_and_relocate() {
        let pattern = Pattern {
            face: Some(Face::F),
            row: Some(Row::Top),
            column: None,
        };
        let position = Position::new(Face::F, Row::Top, Column::Center);
        assert!(pattern.matches(position));
        assert!(!pattern.matches(Position::new(Face::F, Row::Middle, Column::Center)));

        let destination = Pattern {
            face: Some(Face::L),
            ..Pattern::default()
        };
        assert_eq!(
            destination.relocate(position),
            Position::new(Face::L, Row::Top, Column::Center)
        );
    }
}
