//! Render surface boundary.
//!
//! The engine never talks to a graphics API directly. Systems and scene
//! hooks draw through [`RenderSurface`], a small set of immediate-mode
//! primitives plus the surface size. Colors are passed through as strings.
//!
//! [`RecordingSurface`] is the headless implementation: it stores every call
//! as a [`DrawCommand`] so tests (and the headless binary) can inspect what a
//! frame drew.

use serde::Serialize;

/// Immediate-mode drawing primitives.
pub trait RenderSurface {
    /// Surface width in pixels.
    fn width(&self) -> f64;
    /// Surface height in pixels.
    fn height(&self) -> f64;

    fn clear(&mut self, color: &str);
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str);
    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: &str);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        color: String,
    },
    StrokeCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    StrokeLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        color: String,
    },
}

/// Headless surface that records draw calls.
///
/// `clear` empties the recording, so after a frame the surface holds exactly
/// what that frame drew.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: &str) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            color: color.to_string(),
        });
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.commands.push(DrawCommand::StrokeCircle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) {
        self.commands.push(DrawCommand::StrokeLine {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut s = RecordingSurface::new(800, 600);
        s.stroke_circle(1.0, 2.0, 3.0, "red");
        s.draw_text("hi", 0.0, 0.0, "black");
        assert_eq!(s.commands().len(), 2);
        assert!(matches!(s.commands()[0], DrawCommand::StrokeCircle { .. }));
        assert!(matches!(&s.commands()[1], DrawCommand::Text { text, .. } if text == "hi"));
    }

    #[test]
    fn test_clear_resets_recording() {
        let mut s = RecordingSurface::new(10, 10);
        s.stroke_line(0.0, 0.0, 1.0, 1.0, "red");
        s.clear("white");
        assert_eq!(
            s.commands(),
            &[DrawCommand::Clear {
                color: "white".into()
            }]
        );
    }

    #[test]
    fn test_reports_size() {
        let s = RecordingSurface::new(640, 360);
        assert_eq!(s.width(), 640.0);
        assert_eq!(s.height(), 360.0);
    }
}
