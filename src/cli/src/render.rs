use cube_core::{Color, Column, CubeState, Face, Facelet, Position, Row, view::Orientation};
use itertools::Itertools;
use owo_colors::OwoColorize;

/// Width of one face in the net, including the gap after it
const FACE_WIDTH: usize = 7;

/// The unfolded cube, one band of faces per entry
const NET: [&[Option<Face>]; 3] = [
    &[None, Some(Face::U)],
    &[Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    &[None, Some(Face::D)],
];

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (240, 240, 240),
        Color::Yellow => (250, 210, 0),
        Color::Red => (200, 20, 30),
        Color::Orange => (255, 120, 0),
        Color::Green => (0, 160, 70),
        Color::Blue => (0, 80, 200),
    }
}

fn cell(facelet: Option<&Facelet>) -> String {
    let Some(facelet) = facelet else {
        return "??".to_owned();
    };

    let (r, g, b) = rgb(facelet.color);
    if facelet.in_transit {
        "░░".black().on_truecolor(r, g, b).to_string()
    } else {
        "  ".on_truecolor(r, g, b).to_string()
    }
}

/// The camera pose and the faces it looks at, nearest first
pub fn camera(orientation: &Orientation) -> String {
    format!(
        "camera rot_x={} rot_y={} facing {}",
        orientation.rot_x,
        orientation.rot_y,
        orientation.facing().iter().join(" "),
    )
}

fn label(slot: Option<Face>, facing: &[Face]) -> String {
    let Some(face) = slot else {
        return " ".repeat(FACE_WIDTH);
    };

    let padding = " ".repeat(FACE_WIDTH - face.symbol().len());
    if facing.contains(&face) {
        format!("{}{padding}", face.bold().underline())
    } else {
        format!("{}{padding}", face.dimmed())
    }
}

/// Draw `state` as an unfolded net. Facelets in transit are hatched. With
/// labels on, the faces the camera looks at are highlighted.
pub fn net(state: &CubeState, labels: bool, orientation: &Orientation) -> String {
    let mut by_position = [None; 54];
    for facelet in state.facelets() {
        by_position[facelet.position().index()] = Some(facelet);
    }

    let mut out = String::new();
    if labels {
        out.push_str(&camera(orientation));
        out.push('\n');
    }

    let facing = orientation.facing();
    for band in NET {
        if labels {
            let line = band.iter().map(|&slot| label(slot, &facing)).join("");
            out.push_str(line.trim_end());
            out.push('\n');
        }

        for row in Row::ALL {
            for slot in band {
                match slot {
                    Some(face) => {
                        for column in Column::ALL {
                            let position = Position::new(*face, row, column);
                            out.push_str(&cell(by_position[position.index()]));
                        }
                        out.push(' ');
                    }
                    None => out.push_str(&" ".repeat(FACE_WIDTH)),
                }
            }
            out.push('\n');
        }
    }

    out
}
