//! In-memory canvas that records draw calls.
//!
//! Useful for integration tests, batch processing and handing a scene to an
//! external plotting tool as JSON.

use std::path::Path;

use dqplot_core::canvas::{Canvas, Style};
use dqplot_core::{Result, SurfaceGrid};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Point {
        position: DVec3,
        style: Style,
    },
    Quiver {
        origin: DVec3,
        direction: DVec3,
        length: f64,
        style: Style,
    },
    Segment {
        start: DVec3,
        end: DVec3,
        style: Style,
    },
    Surface {
        surface: SurfaceGrid,
        style: Style,
    },
    Label {
        position: DVec3,
        text: String,
        style: Style,
    },
}

/// A [`Canvas`] that keeps every draw call in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn num_points(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Point { .. }))
    }

    pub fn num_quivers(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Quiver { .. }))
    }

    pub fn num_segments(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Segment { .. }))
    }

    pub fn num_surfaces(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Surface { .. }))
    }

    pub fn num_labels(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Label { .. }))
    }

    /// Serializes the recorded scene to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a scene previously written by [`RecordingCanvas::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the recorded scene to `path` as JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!(
            "saved {} draw commands to {}",
            self.commands.len(),
            path.display()
        );
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn point(&mut self, position: DVec3, style: &Style) {
        self.commands.push(DrawCommand::Point {
            position,
            style: style.clone(),
        });
    }

    fn quiver(&mut self, origin: DVec3, direction: DVec3, length: f64, style: &Style) {
        self.commands.push(DrawCommand::Quiver {
            origin,
            direction,
            length,
            style: style.clone(),
        });
    }

    fn segment(&mut self, start: DVec3, end: DVec3, style: &Style) {
        self.commands.push(DrawCommand::Segment {
            start,
            end,
            style: style.clone(),
        });
    }

    fn surface(&mut self, surface: &SurfaceGrid, style: &Style) {
        self.commands.push(DrawCommand::Surface {
            surface: surface.clone(),
            style: style.clone(),
        });
    }

    fn label(&mut self, position: DVec3, text: &str, style: &Style) {
        self.commands.push(DrawCommand::Label {
            position,
            text: text.to_string(),
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dqplot_core::canvas::colors;
    use dqplot_core::grid::Grid;

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        let style = Style::new(colors::RED);
        canvas.point(DVec3::ZERO, &style);
        canvas.segment(DVec3::ZERO, DVec3::X, &style);
        canvas.quiver(DVec3::ZERO, DVec3::Y, 0.1, &style);
        canvas.label(DVec3::ZERO, "origin", &style);

        assert_eq!(canvas.len(), 4);
        assert_eq!(canvas.num_points(), 1);
        assert_eq!(canvas.num_segments(), 1);
        assert_eq!(canvas.num_quivers(), 1);
        assert_eq!(canvas.num_labels(), 1);
        assert!(matches!(canvas.commands()[1], DrawCommand::Segment { .. }));

        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut canvas = RecordingCanvas::new();
        let surface =
            SurfaceGrid::new(Grid::zeros(2, 2), Grid::zeros(2, 2), Grid::zeros(2, 2)).unwrap();
        canvas.surface(&surface, &Style::new(colors::BLUE).with_alpha(0.5));
        canvas.segment(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0), &Style::default());

        let json = canvas.to_json().unwrap();
        assert!(json.contains("\"kind\": \"surface\""));
        assert_eq!(RecordingCanvas::from_json(&json).unwrap(), canvas);
    }
}
