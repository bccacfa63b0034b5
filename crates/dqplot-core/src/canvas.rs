//! Drawing styles and the canvas trait that receives computed geometry.
//!
//! Nothing in dqplot rasterizes. Decomposers compute points, directions and
//! surface grids, then hand them to a [`Canvas`] owned by the caller.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{DqPlotError, Result};
use crate::grid::SurfaceGrid;

/// Named colors used by the default styles.
pub mod colors {
    use glam::Vec3;

    pub const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const GREEN: Vec3 = Vec3::new(0.0, 0.5, 0.0);
    pub const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const CYAN: Vec3 = Vec3::new(0.0, 0.75, 0.75);
    pub const MAGENTA: Vec3 = Vec3::new(0.75, 0.0, 0.75);
    pub const YELLOW: Vec3 = Vec3::new(0.75, 0.75, 0.0);
    pub const BLACK: Vec3 = Vec3::ZERO;
    pub const WHITE: Vec3 = Vec3::ONE;
}

/// Stroke pattern for lines and arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// Markers only.
    None,
}

/// Marker drawn at points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Point,
    Cross,
    Circle,
}

/// Appearance of a single draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// RGB color in `[0, 1]`.
    pub color: Vec3,
    pub line_style: LineStyle,
    pub line_width: f32,
    /// Opacity (0.0 = transparent, 1.0 = opaque).
    pub alpha: f32,
    pub marker: Option<Marker>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: colors::BLACK,
            line_style: LineStyle::Solid,
            line_width: 1.0,
            alpha: 1.0,
            marker: None,
        }
    }
}

impl Style {
    /// Creates a solid style of the given color.
    #[must_use]
    pub fn new(color: Vec3) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Parses a matplotlib-style format string such as `"r"`, `"k-"`, `"b--"` or `"kx"`.
    ///
    /// A marker without an explicit line style draws markers only.
    pub fn from_linespec(spec: &str) -> Result<Self> {
        let mut style = Style::default();
        let mut line_style = None;
        let mut rest = spec;

        while let Some(c) = rest.chars().next() {
            let (consumed, parsed) = match c {
                '-' if rest.starts_with("--") => (2, Some(LineStyle::Dashed)),
                '-' if rest.starts_with("-.") => (2, Some(LineStyle::DashDot)),
                '-' => (1, Some(LineStyle::Solid)),
                ':' => (1, Some(LineStyle::Dotted)),
                _ => (1, None),
            };
            if parsed.is_some() {
                line_style = parsed;
            } else {
                match c {
                    'r' => style.color = colors::RED,
                    'g' => style.color = colors::GREEN,
                    'b' => style.color = colors::BLUE,
                    'c' => style.color = colors::CYAN,
                    'm' => style.color = colors::MAGENTA,
                    'y' => style.color = colors::YELLOW,
                    'k' => style.color = colors::BLACK,
                    'w' => style.color = colors::WHITE,
                    '.' => style.marker = Some(Marker::Point),
                    'x' => style.marker = Some(Marker::Cross),
                    'o' => style.marker = Some(Marker::Circle),
                    other => {
                        return Err(DqPlotError::InvalidParameter {
                            name: "linespec",
                            reason: format!("unrecognized character '{other}' in \"{spec}\""),
                        })
                    }
                }
            }
            rest = &rest[consumed..];
        }

        style.line_style = match (line_style, style.marker) {
            (Some(ls), _) => ls,
            (None, Some(_)) => LineStyle::None,
            (None, None) => LineStyle::Solid,
        };
        Ok(style)
    }
}

/// The rendering collaborator.
///
/// Implementations own the scene; dqplot only calls into them after every
/// computation for a primitive has succeeded.
pub trait Canvas {
    /// Draws a single point marker.
    fn point(&mut self, position: DVec3, style: &Style);

    /// Draws an arrow from `origin` along `direction`, normalized to `length`.
    fn quiver(&mut self, origin: DVec3, direction: DVec3, length: f64, style: &Style);

    /// Draws a straight segment.
    fn segment(&mut self, start: DVec3, end: DVec3, style: &Style);

    /// Draws a parametric surface.
    fn surface(&mut self, surface: &SurfaceGrid, style: &Style);

    /// Draws a text label. Canvases without text support ignore it.
    fn label(&mut self, _position: DVec3, _text: &str, _style: &Style) {}
}
