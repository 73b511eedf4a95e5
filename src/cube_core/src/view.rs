//! Camera orientation. Gestures only ever turn the camera; they have no
//! access to the cube state or the move queue.

use serde::{Deserialize, Serialize};

use crate::facelet::Face;

/// Width and height, in pixels, at which the cube is drawn at scale 1
pub const REFERENCE_SIZE: f64 = 500.0;

/// Degrees of rotation per pixel dragged
const DRAG_SENSITIVITY: f64 = 0.5;

/// Rotation of the camera around the cube, in degrees within [-180, 180]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orientation {
    pub rot_x: f64,
    pub rot_y: f64,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation {
            rot_x: -25.0,
            rot_y: -35.0,
        }
    }
}

impl Orientation {
    pub fn set(&mut self, rot_x: f64, rot_y: f64) {
        self.rot_x = rot_x;
        self.rot_y = rot_y;
    }

    /// The faces turned toward the camera, most directly facing first.
    ///
    /// The cube is rotated about `x` by `rot_x` after being rotated about `y`
    /// by `rot_y`, in screen coordinates where `y` points down and `z` points
    /// at the viewer.
    pub fn facing(&self) -> Vec<Face> {
        let (sin_x, cos_x) = self.rot_x.to_radians().sin_cos();
        let (sin_y, cos_y) = self.rot_y.to_radians().sin_cos();

        let mut facing = Face::ALL
            .into_iter()
            .filter_map(|face| {
                let [x, y, z] = screen_normal(face);
                let z = -x * sin_y + z * cos_y;
                let depth = y * sin_x + z * cos_x;
                (depth > 1e-9).then_some((face, depth))
            })
            .collect::<Vec<_>>();

        facing.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        facing.into_iter().map(|(face, _)| face).collect()
    }
}

fn screen_normal(face: Face) -> [f64; 3] {
    match face {
        Face::U => [0.0, -1.0, 0.0],
        Face::D => [0.0, 1.0, 0.0],
        Face::R => [1.0, 0.0, 0.0],
        Face::L => [-1.0, 0.0, 0.0],
        Face::F => [0.0, 0.0, 1.0],
        Face::B => [0.0, 0.0, -1.0],
    }
}

fn wrap(degrees: f64) -> f64 {
    if degrees > 180.0 {
        degrees - 360.0
    } else if degrees < -180.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Turns a drag into camera rotation. Horizontal drags are reversed while
/// the cube is upside down, so the cube keeps following the pointer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DragTracker {
    reversed: bool,
}

impl DragTracker {
    pub fn start(&mut self, orientation: &Orientation) {
        self.reversed = orientation.rot_x < -90.0 || orientation.rot_x > 90.0;
    }

    /// Apply a drag delta in pixels
    pub fn track(&self, orientation: &mut Orientation, dx: f64, dy: f64) {
        orientation.rot_x = wrap(orientation.rot_x - dy * DRAG_SENSITIVITY);

        let ddx = dx * DRAG_SENSITIVITY;
        orientation.rot_y = wrap(if self.reversed {
            orientation.rot_y - ddx
        } else {
            orientation.rot_y + ddx
        });
    }
}

/// A drag gesture as reported by a front-end
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Gesture {
    Start,
    Track { dx: f64, dy: f64 },
    End,
}

/// Something that produces gestures, such as a pointer or touch handler.
/// Sources are polled by the host and drive the camera only.
pub trait GestureSource {
    fn next_gesture(&mut self) -> Option<Gesture>;

    /// Feed every pending gesture into `orientation`
    fn drain_into(&mut self, tracker: &mut DragTracker, orientation: &mut Orientation) {
        while let Some(gesture) = self.next_gesture() {
            match gesture {
                Gesture::Start => tracker.start(orientation),
                Gesture::Track { dx, dy } => tracker.track(orientation, dx, dy),
                Gesture::End => {}
            }
        }
    }
}

impl<I: Iterator<Item = Gesture>> GestureSource for I {
    fn next_gesture(&mut self) -> Option<Gesture> {
        self.next()
    }
}

/// How much to scale the cube to fit a viewport
pub fn scale_factor(width: f64, height: f64) -> f64 {
    (width / REFERENCE_SIZE).min(height / REFERENCE_SIZE)
}
