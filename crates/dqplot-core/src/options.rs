//! Configuration options for plotting.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::canvas::{colors, Style};
use crate::error::{ensure_positive, DqPlotError, Result};

/// How a dual quaternion is interpreted when plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawMode {
    /// A reference frame (unit dual quaternion).
    #[default]
    Pose,
    /// A Plücker line.
    Line,
    /// A plane.
    Plane,
}

/// Sampling and size of the cylinder drawn at a revolute joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    /// Extent along the local z-axis, centered on the joint.
    pub height: f64,
    pub radius: f64,
    /// Samples around the axis, seam included.
    pub angular_segments: usize,
    /// Samples along the axis.
    pub axial_segments: usize,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            height: 0.07,
            radius: 0.02,
            angular_segments: 20,
            axial_segments: 20,
        }
    }
}

impl CylinderParams {
    /// Checks that the sizes are positive and each direction has at least two samples.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("height", self.height)?;
        ensure_positive("radius", self.radius)?;
        for (name, count) in [
            ("angular_segments", self.angular_segments),
            ("axial_segments", self.axial_segments),
        ] {
            if count < 2 {
                return Err(DqPlotError::InvalidParameter {
                    name,
                    reason: format!("needs at least 2 samples, got {count}"),
                });
            }
        }
        Ok(())
    }
}

/// Appearance of a serial manipulator drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainStyle {
    /// Style of the segments connecting the joints.
    pub link: Style,
    /// Length of the frame axes drawn at each joint.
    pub frame_length: f64,
    pub joint_marker: CylinderParams,
    pub joint_style: Style,
}

impl Default for ChainStyle {
    fn default() -> Self {
        Self {
            link: Style::new(colors::BLACK).with_line_width(3.0),
            frame_length: 0.1,
            joint_marker: CylinderParams::default(),
            joint_style: Style::new(colors::RED)
                .with_alpha(0.8)
                .with_line_width(0.0),
        }
    }
}

impl ChainStyle {
    /// Sets the link style from a format string such as `"k-"` or `"b--"`,
    /// keeping the current link width.
    pub fn with_linespec(mut self, spec: &str) -> Result<Self> {
        self.link = Style::from_linespec(spec)?.with_line_width(self.link.line_width);
        Ok(self)
    }
}

/// Options recognized by the plot facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Interpretation of a dual quaternion.
    pub mode: DrawMode,
    /// Frame axis length, line half-length or plane side length.
    pub scale: f64,
    /// Axis length of the frame drawn with a plane.
    pub frame_length: f64,
    /// Color of lines and planes.
    pub color: Vec3,
    /// Format string for lines, such as `"r"` or `"b--"`. Overrides `color`.
    pub linespec: Option<String>,
    /// Label drawn at a frame's origin.
    pub name: Option<String>,
    /// Joint configuration for kinematic chains.
    pub q: Option<Vec<f64>>,
    pub chain: ChainStyle,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            mode: DrawMode::Pose,
            scale: 0.1,
            frame_length: 0.1,
            color: colors::RED,
            linespec: None,
            name: None,
            q: None,
            chain: ChainStyle::default(),
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for drawing a line.
    #[must_use]
    pub fn line() -> Self {
        Self::default().with_mode(DrawMode::Line)
    }

    /// Options for drawing a plane.
    #[must_use]
    pub fn plane() -> Self {
        Self::default().with_mode(DrawMode::Plane)
    }

    /// Options for drawing a kinematic chain at configuration `q`.
    #[must_use]
    pub fn chain(q: Vec<f64>) -> Self {
        Self::default().with_q(q)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_frame_length(mut self, frame_length: f64) -> Self {
        self.frame_length = frame_length;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_linespec(mut self, linespec: impl Into<String>) -> Self {
        self.linespec = Some(linespec.into());
        self
    }

    /// Style for lines: the parsed `linespec` when set, else a solid line in `color`.
    pub fn line_style(&self) -> Result<Style> {
        match &self.linespec {
            Some(spec) => Style::from_linespec(spec),
            None => Ok(Style::new(self.color)),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_q(mut self, q: Vec<f64>) -> Self {
        self.q = Some(q);
        self
    }

    #[must_use]
    pub fn with_chain_style(mut self, chain: ChainStyle) -> Self {
        self.chain = chain;
        self
    }

    /// Loads options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
