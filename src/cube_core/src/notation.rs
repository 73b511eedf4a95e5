//! SiGN-style move tokens: a turn symbol with an optional `'` or `2` suffix.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A single quarter turn of a face or a middle slice. These are the only
/// moves with their own relocation rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    U,
    D,
    R,
    L,
    F,
    B,
    M,
    E,
    S,
}

impl Primitive {
    pub const ALL: [Self; 9] = [
        Primitive::U,
        Primitive::D,
        Primitive::R,
        Primitive::L,
        Primitive::F,
        Primitive::B,
        Primitive::M,
        Primitive::E,
        Primitive::S,
    ];

    pub fn symbol(self) -> Symbol {
        match self {
            Primitive::U => Symbol::U,
            Primitive::D => Symbol::D,
            Primitive::R => Symbol::R,
            Primitive::L => Symbol::L,
            Primitive::F => Symbol::F,
            Primitive::B => Symbol::B,
            Primitive::M => Symbol::M,
            Primitive::E => Symbol::E,
            Primitive::S => Symbol::S,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.symbol(), f)
    }
}

/// Every turn symbol the notation accepts
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    U,
    D,
    R,
    L,
    F,
    B,
    u,
    d,
    r,
    l,
    f,
    b,
    M,
    E,
    S,
    x,
    y,
    z,
}

impl Symbol {
    pub const ALL: [Self; 18] = [
        Symbol::U,
        Symbol::D,
        Symbol::R,
        Symbol::L,
        Symbol::F,
        Symbol::B,
        Symbol::u,
        Symbol::d,
        Symbol::r,
        Symbol::l,
        Symbol::f,
        Symbol::b,
        Symbol::M,
        Symbol::E,
        Symbol::S,
        Symbol::x,
        Symbol::y,
        Symbol::z,
    ];

    pub fn from_char(c: char) -> Option<Symbol> {
        Some(match c {
            'U' => Symbol::U,
            'D' => Symbol::D,
            'R' => Symbol::R,
            'L' => Symbol::L,
            'F' => Symbol::F,
            'B' => Symbol::B,
            'u' => Symbol::u,
            'd' => Symbol::d,
            'r' => Symbol::r,
            'l' => Symbol::l,
            'f' => Symbol::f,
            'b' => Symbol::b,
            'M' => Symbol::M,
            'E' => Symbol::E,
            'S' => Symbol::S,
            'x' => Symbol::x,
            'y' => Symbol::y,
            'z' => Symbol::z,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::U => 'U',
            Symbol::D => 'D',
            Symbol::R => 'R',
            Symbol::L => 'L',
            Symbol::F => 'F',
            Symbol::B => 'B',
            Symbol::u => 'u',
            Symbol::d => 'd',
            Symbol::r => 'r',
            Symbol::l => 'l',
            Symbol::f => 'f',
            Symbol::b => 'b',
            Symbol::M => 'M',
            Symbol::E => 'E',
            Symbol::S => 'S',
            Symbol::x => 'x',
            Symbol::y => 'y',
            Symbol::z => 'z',
        }
    }

    /// The primitive this symbol names, or `None` for wide turns and
    /// whole-cube rotations
    pub fn as_primitive(self) -> Option<Primitive> {
        Some(match self {
            Symbol::U => Primitive::U,
            Symbol::D => Primitive::D,
            Symbol::R => Primitive::R,
            Symbol::L => Primitive::L,
            Symbol::F => Primitive::F,
            Symbol::B => Primitive::B,
            Symbol::M => Primitive::M,
            Symbol::E => Primitive::E,
            Symbol::S => Primitive::S,
            _ => return None,
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    #[default]
    None,
    Prime,
    Double,
}

impl Modifier {
    pub const ALL: [Self; 3] = [Modifier::None, Modifier::Prime, Modifier::Double];

    /// How many quarter turns this modifier stands for. A prime is three
    /// quarter turns rather than a negative one.
    pub fn quarter_turns(self) -> usize {
        match self {
            Modifier::None => 1,
            Modifier::Prime => 3,
            Modifier::Double => 2,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }
}

/// A validated move such as `R`, `u'` or `x2`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub symbol: Symbol,
    pub modifier: Modifier,
}

impl MoveToken {
    pub const fn new(symbol: Symbol, modifier: Modifier) -> MoveToken {
        MoveToken { symbol, modifier }
    }

    /// All 54 valid tokens
    pub fn all() -> impl Iterator<Item = MoveToken> {
        Symbol::ALL.into_iter().flat_map(|symbol| {
            Modifier::ALL
                .into_iter()
                .map(move |modifier| MoveToken::new(symbol, modifier))
        })
    }

    pub fn quarter_turns(self) -> usize {
        self.modifier.quarter_turns()
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol, self.modifier.suffix())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Empty move token")]
    Empty,
    #[error("Unknown turn symbol in `{0}`")]
    UnknownSymbol(String),
    #[error("Invalid modifier in `{0}`, expected nothing, `'` or `2`")]
    InvalidModifier(String),
}

impl FromStr for MoveToken {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = match chars.next() {
            Some(c) => Symbol::from_char(c)
                .ok_or_else(|| NotationError::UnknownSymbol(s.to_owned()))?,
            None => return Err(NotationError::Empty),
        };

        let modifier = match chars.as_str() {
            "" => Modifier::None,
            "'" => Modifier::Prime,
            "2" => Modifier::Double,
            _ => return Err(NotationError::InvalidModifier(s.to_owned())),
        };

        Ok(MoveToken { symbol, modifier })
    }
}

/// Parse a whitespace separated move sequence, keeping only the valid tokens
pub fn parse_moves(moves: &str) -> Vec<MoveToken> {
    moves
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect()
}
