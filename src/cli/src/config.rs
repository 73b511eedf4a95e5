use std::{fs, iter, path::Path, time::Duration};

use color_eyre::eyre::WrapErr;
use cube_core::{
    transition::DEFAULT_SPEED_MS,
    view::{DragTracker, Gesture, GestureSource, Orientation},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Front-end settings. Every field may be left out of the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// How long a quarter turn animates, in milliseconds. Half turns take
    /// twice as long.
    pub speed_ms: u64,
    /// Print face letters above the net
    pub face_labels: bool,
    pub orientation: Orientation,
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            speed_ms: DEFAULT_SPEED_MS,
            face_labels: true,
            orientation: Orientation::default(),
        }
    }
}

impl CubeConfig {
    pub fn load(path: Option<&Path>) -> color_eyre::Result<CubeConfig> {
        let Some(path) = path else {
            debug!(target: "config", "No configuration file given, using defaults");
            return Ok(CubeConfig::default());
        };

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = toml::from_str::<CubeConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;

        debug!(
            target: "config",
            "Loaded configuration: speed_ms={} face_labels={} rot_x={} rot_y={}",
            config.speed_ms,
            config.face_labels,
            config.orientation.rot_x,
            config.orientation.rot_y,
        );
        Ok(config)
    }

    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Turn the camera by one drag gesture passing through each delta
    pub fn drag(&mut self, deltas: &[(f64, f64)]) {
        if deltas.is_empty() {
            return;
        }

        let mut gestures = iter::once(Gesture::Start)
            .chain(deltas.iter().map(|&(dx, dy)| Gesture::Track { dx, dy }))
            .chain(iter::once(Gesture::End));
        gestures.drain_into(&mut DragTracker::default(), &mut self.orientation);

        debug!(
            target: "config",
            "Dragged camera: rot_x={} rot_y={}",
            self.orientation.rot_x,
            self.orientation.rot_y,
        );
    }
}
