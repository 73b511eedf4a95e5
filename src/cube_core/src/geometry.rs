//! Sticker coordinates. Every position is a point on the surface of the
//! 3x3x3 cube plus the outward normal of its face; every primitive turn is a
//! quarter rotation of one layer about a principal axis. This is independent
//! of the hand-written notation table and is used to check it.
//!
//! `x` points toward `R`, `y` toward `U` and `z` toward `F`.

use crate::{
    facelet::{Column, Face, Position, Row},
    notation::Primitive,
};

pub type Vec3 = [i8; 3];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sticker {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Sticker {
    pub fn of(position: Position) -> Sticker {
        let dr = position.row as i8 - 1;
        let dc = position.column as i8 - 1;

        let (point, normal) = match position.face {
            Face::U => ([dc, 1, dr], [0, 1, 0]),
            Face::D => ([dc, -1, -dr], [0, -1, 0]),
            Face::F => ([dc, -dr, 1], [0, 0, 1]),
            Face::B => ([-dc, -dr, -1], [0, 0, -1]),
            Face::R => ([1, -dr, -dc], [1, 0, 0]),
            Face::L => ([-1, -dr, dc], [-1, 0, 0]),
        };

        Sticker { point, normal }
    }

    /// The position this sticker sits at, or `None` if the normal does not
    /// point along an axis
    pub fn position(self) -> Option<Position> {
        let [x, y, z] = self.point;

        let (face, dr, dc) = match self.normal {
            [0, 1, 0] => (Face::U, z, x),
            [0, -1, 0] => (Face::D, -z, x),
            [0, 0, 1] => (Face::F, -y, x),
            [0, 0, -1] => (Face::B, -y, -x),
            [1, 0, 0] => (Face::R, -y, -z),
            [-1, 0, 0] => (Face::L, -y, z),
            _ => return None,
        };

        Some(Position {
            face,
            row: *Row::ALL.get(usize::try_from(dr + 1).ok()?)?,
            column: *Column::ALL.get(usize::try_from(dc + 1).ok()?)?,
        })
    }
}

/// The axis a primitive turns about, the layer it turns along that axis, and
/// the quarter rotation it applies
fn turn(primitive: Primitive) -> (usize, i8, fn(Vec3) -> Vec3) {
    // Clockwise as seen from the named face
    fn up([x, y, z]: Vec3) -> Vec3 {
        [-z, y, x]
    }
    fn down([x, y, z]: Vec3) -> Vec3 {
        [z, y, -x]
    }
    fn right([x, y, z]: Vec3) -> Vec3 {
        [x, z, -y]
    }
    fn left([x, y, z]: Vec3) -> Vec3 {
        [x, -z, y]
    }
    fn front([x, y, z]: Vec3) -> Vec3 {
        [y, -x, z]
    }
    fn back([x, y, z]: Vec3) -> Vec3 {
        [-y, x, z]
    }

    match primitive {
        Primitive::U => (1, 1, up),
        Primitive::E => (1, 0, down),
        Primitive::D => (1, -1, down),
        Primitive::R => (0, 1, right),
        Primitive::M => (0, 0, left),
        Primitive::L => (0, -1, left),
        Primitive::F => (2, 1, front),
        Primitive::S => (2, 0, front),
        Primitive::B => (2, -1, back),
    }
}

/// Where `primitive` takes the sticker at `position`, or `None` if the
/// sticker is outside the turning layer
pub fn destination(position: Position, primitive: Primitive) -> Option<Position> {
    let (axis, layer, rotate) = turn(primitive);
    let sticker = Sticker::of(position);

    if sticker.point[axis] != layer {
        return None;
    }

    Sticker {
        point: rotate(sticker.point),
        normal: rotate(sticker.normal),
    }
    .position()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        permute::apply_primitive,
        state::CubeState,
        table::rules_for,
    };

    #[test]
    fn stickers_round_trip() {
        for position in Position::all() {
            assert_eq!(Sticker::of(position).position(), Some(position));
        }
    }

    #[test]
    fn notation_table_agrees_with_rotation() {
        for primitive in Primitive::ALL {
            for position in Position::all() {
                let from_table = rules_for(primitive)
                    .iter()
                    .find(|rule| rule.source.matches(position))
                    .map(|rule| rule.destination.relocate(position));
                assert_eq!(
                    from_table,
                    destination(position, primitive),
                    "{primitive} at {position}"
                );
            }
        }
    }

    #[test]
    fn applier_moves_exactly_the_layer() {
        let solved = CubeState::solved();
        for primitive in Primitive::ALL {
            let (next, touched) = apply_primitive(&solved, primitive);
            for (index, (before, after)) in
                solved.facelets().iter().zip(next.facelets()).enumerate()
            {
                match destination(before.position(), primitive) {
                    Some(position) => {
                        assert!(touched.contains(index));
                        assert_eq!(after.position(), position);
                    }
                    None => {
                        assert!(!touched.contains(index));
                        assert_eq!(after, before);
                    }
                }
            }
        }
    }

    #[test]
    fn off_axis_normals_have_no_position() {
        let sticker = Sticker {
            point: [1, 1, 1],
            normal: [1, 1, 0],
        };
        assert_eq!(sticker.position(), None);
    }
}
