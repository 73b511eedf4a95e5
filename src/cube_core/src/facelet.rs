use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the six faces of the cube
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    R,
    L,
    F,
    B,
}

impl Face {
    /// Every face, in the canonical order used to lay out the solved state
    pub const ALL: [Self; 6] = {
        let v = [Face::U, Face::D, Face::R, Face::L, Face::F, Face::B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color this face carries on a solved cube
    pub fn home_color(self) -> Color {
        Color::ALL[self as usize]
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Face::U => "U",
            Face::D => "D",
            Face::R => "R",
            Face::L => "L",
            Face::F => "F",
            Face::B => "B",
        }
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "D" => Ok(Face::D),
            "R" => Ok(Face::R),
            "L" => Ok(Face::L),
            "F" => Ok(Face::F),
            "B" => Ok(Face::B),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Row {
    pub const ALL: [Self; 3] = [Row::Top, Row::Middle, Row::Bottom];

    pub fn name(self) -> &'static str {
        match self {
            Row::Top => "top",
            Row::Middle => "middle",
            Row::Bottom => "bottom",
        }
    }
}

impl FromStr for Row {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Row::Top),
            "middle" => Ok(Row::Middle),
            "bottom" => Ok(Row::Bottom),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub const ALL: [Self; 3] = [Column::Left, Column::Center, Column::Right];

    pub fn name(self) -> &'static str {
        match self {
            Column::Left => "left",
            Column::Center => "center",
            Column::Right => "right",
        }
    }
}

impl FromStr for Column {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Column::Left),
            "center" => Ok(Column::Center),
            "right" => Ok(Column::Right),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The sticker palette. Indexed in the same order as `Face::ALL`, so
/// `Color::ALL[face as usize]` is the solved color of `face`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "yellow" => Ok(Color::Yellow),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `(face, row, column)` key of a cell. Every cube state covers each of
/// the 54 positions exactly once.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub face: Face,
    pub row: Row,
    pub column: Column,
}

impl Position {
    pub const fn new(face: Face, row: Row, column: Column) -> Position {
        Position { face, row, column }
    }

    /// All 54 positions in canonical order: faces as in `Face::ALL`, rows top
    /// to bottom, columns left to right
    pub fn all() -> impl Iterator<Item = Position> {
        Face::ALL.into_iter().flat_map(|face| {
            Row::ALL.into_iter().flat_map(move |row| {
                Column::ALL
                    .into_iter()
                    .map(move |column| Position::new(face, row, column))
            })
        })
    }

    /// Index of this position in the canonical order
    pub fn index(self) -> usize {
        self.face as usize * 9 + self.row as usize * 3 + self.column as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.face, self.row, self.column)
    }
}

/// A single sticker. The color travels with the facelet; moves only rewrite
/// where it sits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: Row,
    pub column: Column,
    pub color: Color,
    /// Set only on the transitional state presented while a move animates
    pub in_transit: bool,
}

impl Facelet {
    pub fn new(position: Position, color: Color) -> Facelet {
        Facelet {
            face: position.face,
            row: position.row,
            column: position.column,
            color,
            in_transit: false,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.face, self.row, self.column)
    }

    pub fn set_position(&mut self, position: Position) {
        self.face = position.face;
        self.row = position.row;
        self.column = position.column;
    }
}
