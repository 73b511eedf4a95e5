use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facelet::{Color, Face, Facelet, Position};

pub const FACELET_COUNT: usize = 54;
pub const FACELETS_PER_COLOR: usize = 9;

/// The 54 facelets of a cube. The index of a facelet is its identity: moves
/// rewrite where a facelet sits, never where it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    facelets: Vec<Facelet>,
}

/// A loosely typed facelet as it arrives from outside, e.g. from a state
/// file. Every field is optional so that validation can say exactly what is
/// wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceletRecord {
    #[serde(alias = "side", skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    #[serde(alias = "vPos", skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
    #[serde(alias = "hPos", skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&Facelet> for FaceletRecord {
    fn from(facelet: &Facelet) -> Self {
        FaceletRecord {
            face: Some(facelet.face.to_string()),
            row: Some(facelet.row.to_string()),
            column: Some(facelet.column.to_string()),
            color: Some(facelet.color.to_string()),
        }
    }
}

/// The facelet records of a whole cube, in the shape used by state files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFile {
    pub facelets: Vec<FaceletRecord>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("A cube state needs exactly 54 facelets but got {0}")]
    WrongFaceletCount(usize),
    #[error("Facelet {index} is missing the `{field}` field")]
    MissingField { index: usize, field: &'static str },
    #[error("Encountered invalid value for face: {0}")]
    InvalidFace(String),
    #[error("Encountered invalid value for row: {0}")]
    InvalidRow(String),
    #[error("Encountered invalid value for column: {0}")]
    InvalidColumn(String),
    #[error("Encountered invalid value for color: {0}")]
    InvalidColor(String),
    #[error("Color {0} appears more than 9 times")]
    ColorOverused(Color),
    #[error("Encountered duplicate facelet: {0}")]
    DuplicatePosition(Position),
}

/// Tracks the structural invariants while a state is assembled
struct Validator {
    color_counts: [usize; 6],
    seen: HashSet<Position>,
}

impl Validator {
    fn new() -> Validator {
        Validator {
            color_counts: [0; 6],
            seen: HashSet::with_capacity(FACELET_COUNT),
        }
    }

    fn admit(&mut self, position: Position, color: Color) -> Result<(), StateError> {
        let count = &mut self.color_counts[color as usize];
        if *count >= FACELETS_PER_COLOR {
            return Err(StateError::ColorOverused(color));
        }
        *count += 1;

        if !self.seen.insert(position) {
            return Err(StateError::DuplicatePosition(position));
        }

        Ok(())
    }
}

fn required<'a>(
    field: &'a Option<String>,
    index: usize,
    name: &'static str,
) -> Result<&'a str, StateError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(StateError::MissingField { index, field: name }),
    }
}

impl CubeState {
    /// The canonical solved cube: 9 contiguous facelets per face in the order
    /// of `Position::all`, each face in its home color
    pub fn solved() -> CubeState {
        CubeState {
            facelets: Position::all()
                .map(|position| Facelet::new(position, position.face.home_color()))
                .collect(),
        }
    }

    /// Build a state from typed facelets, checking the count, the per color
    /// budget and that no position is occupied twice. Transit flags are
    /// cleared.
    pub fn from_facelets(
        facelets: impl IntoIterator<Item = Facelet>,
    ) -> Result<CubeState, StateError> {
        let facelets = facelets.into_iter().collect_vec();
        if facelets.len() != FACELET_COUNT {
            return Err(StateError::WrongFaceletCount(facelets.len()));
        }

        let mut validator = Validator::new();
        let mut facelets = facelets;
        for facelet in &mut facelets {
            validator.admit(facelet.position(), facelet.color)?;
            facelet.in_transit = false;
        }

        Ok(CubeState { facelets })
    }

    /// Build a state from untyped records. Each record is checked for missing
    /// fields, then every field's domain, then the color budget, then
    /// duplicate positions; the first failure aborts the whole assignment.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a FaceletRecord>,
    ) -> Result<CubeState, StateError> {
        let records = records.into_iter().collect_vec();
        if records.len() != FACELET_COUNT {
            return Err(StateError::WrongFaceletCount(records.len()));
        }

        let mut validator = Validator::new();
        let mut facelets = Vec::with_capacity(FACELET_COUNT);

        for (index, record) in records.into_iter().enumerate() {
            let face = required(&record.face, index, "face")?;
            let row = required(&record.row, index, "row")?;
            let column = required(&record.column, index, "column")?;
            let color = required(&record.color, index, "color")?;

            let position = Position {
                face: face
                    .parse()
                    .map_err(|()| StateError::InvalidFace(face.to_owned()))?,
                row: row
                    .parse()
                    .map_err(|()| StateError::InvalidRow(row.to_owned()))?,
                column: column
                    .parse()
                    .map_err(|()| StateError::InvalidColumn(column.to_owned()))?,
            };
            let color = color
                .parse()
                .map_err(|()| StateError::InvalidColor(color.to_owned()))?;

            validator.admit(position, color)?;
            facelets.push(Facelet::new(position, color));
        }

        Ok(CubeState { facelets })
    }

    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }

    pub fn into_facelets(self) -> Vec<Facelet> {
        self.facelets
    }

    /// The external form of this state, one record per facelet in storage
    /// order
    pub fn to_records(&self) -> Vec<FaceletRecord> {
        self.facelets.iter().map(FaceletRecord::from).collect()
    }

    /// The facelet sitting at `position`
    pub fn at(&self, position: Position) -> Option<&Facelet> {
        self.facelets.iter().find(|f| f.position() == position)
    }

    /// Colors laid out by position in canonical order, which makes states
    /// comparable regardless of how their facelets are stored
    pub fn colors_by_position(&self) -> [Color; FACELET_COUNT] {
        let mut colors = [Color::White; FACELET_COUNT];
        for facelet in &self.facelets {
            colors[facelet.position().index()] = facelet.color;
        }
        colors
    }

    /// Whether every face shows a single color. Two faces sharing a color
    /// still count as solved.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            self.facelets
                .iter()
                .filter(|f| f.face == face)
                .map(|f| f.color)
                .all_equal()
        })
    }

    pub(crate) fn facelets_mut(&mut self) -> &mut [Facelet] {
        &mut self.facelets
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::{Column, Row};

    fn solved_records() -> Vec<FaceletRecord> {
        CubeState::solved().to_records()
    }

    #[test]
    fn solved_cube_is_solved() {
        let cube = CubeState::solved();
        assert_eq!(cube.facelets().len(), FACELET_COUNT);
        assert!(cube.is_solved());
        assert!(cube.facelets().iter().all(|f| !f.in_transit));
    }

    #[test]
    fn solved_ignores_which_color_each_face_has() {
        // Every face uniform, but U and D swapped colors
        let facelets = CubeState::solved().into_facelets().into_iter().map(|mut f| {
            f.color = match f.face {
                Face::U => Color::Yellow,
                Face::D => Color::White,
                _ => f.color,
            };
            f
        });
        assert!(CubeState::from_facelets(facelets).unwrap().is_solved());
    }

    #[test]
    fn rejects_wrong_cardinality() {
        let records = solved_records();
        assert_eq!(
            CubeState::from_records(&records[..53]),
            Err(StateError::WrongFaceletCount(53))
        );
    }

    #[test]
    fn rejects_missing_fields() {
        let mut records = solved_records();
        records[4].row = None;
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::MissingField {
                index: 4,
                field: "row"
            })
        );

        let mut records = solved_records();
        records[0].color = Some(String::new());
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::MissingField {
                index: 0,
                field: "color"
            })
        );
    }

    #[test]
    fn rejects_out_of_domain_values() {
        let mut records = solved_records();
        records[10].face = Some("Q".to_owned());
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::InvalidFace("Q".to_owned()))
        );

        let mut records = solved_records();
        records[10].row = Some("center".to_owned());
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::InvalidRow("center".to_owned()))
        );

        let mut records = solved_records();
        records[10].column = Some("middle".to_owned());
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::InvalidColumn("middle".to_owned()))
        );

        let mut records = solved_records();
        records[10].color = Some("purple".to_owned());
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::InvalidColor("purple".to_owned()))
        );
    }

    #[test]
    fn rejects_tenth_color() {
        let mut records = solved_records();
        // The last record gets white, the tenth white sticker
        records[53].color = Some("white".to_owned());
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::ColorOverused(Color::White))
        );
    }

    #[test]
    fn rejects_duplicate_position() {
        let mut records = solved_records();
        // Move U middle left onto U top left, colors stay balanced
        records[3].row = Some("top".to_owned());
        records[3].column = Some("left".to_owned());
        assert_eq!(
            CubeState::from_records(&records),
            Err(StateError::DuplicatePosition(Position::new(
                Face::U,
                Row::Top,
                Column::Left
            )))
        );
    }

    #[test]
    fn typed_facelets_are_checked_too() {
        let mut facelets = CubeState::solved().into_facelets();
        facelets[1].column = Column::Left;
        assert!(matches!(
            CubeState::from_facelets(facelets),
            Err(StateError::DuplicatePosition(_))
        ));
    }

    #[test]
    fn records_round_trip_in_any_order() {
        let mut records = solved_records();
        records.reverse();
        let cube = CubeState::from_records(&records).unwrap();
        assert_eq!(
            cube.colors_by_position(),
            CubeState::solved().colors_by_position()
        );
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let record: FaceletRecord = toml::from_str(
            r#"
            side = "F"
            vPos = "middle"
            hPos = "center"
            color = "green"
            "#,
        )
        .unwrap();
        assert_eq!(record.face.as_deref(), Some("F"));
        assert_eq!(record.row.as_deref(), Some("middle"));
        assert_eq!(record.column.as_deref(), Some("center"));
    }

    #[test]
    fn state_file_round_trips_through_toml() {
        let file = StateFile {
            facelets: solved_records(),
        };
        let text = toml::to_string(&file).unwrap();
        let parsed: StateFile = toml::from_str(&text).unwrap();
        assert_eq!(parsed, file);
        assert!(CubeState::from_records(&parsed.facelets).unwrap().is_solved());
    }
}
