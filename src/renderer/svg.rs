//! SVG markup builder

use std::fmt;

use super::geometry::{BezierPath, Canvas, Circle, Transform};
use super::SvgConfig;

/// Attribute value for rect width/height
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// User units, written without a suffix
    Units(f64),
    /// Percentage of the viewport
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Units(v) => write!(f, "{}", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Presentation attributes for a text element
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: u16,
    pub letter_spacing: f64,
    /// CSS font-family fallback list
    pub font_family: String,
    pub fill: String,
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    root_fill: Option<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            root_fill: None,
            elements: vec![],
            indent: 1,
        }
    }

    /// Set a `fill` attribute on the root element
    pub fn with_root_fill(mut self, fill: impl Into<String>) -> Self {
        self.root_fill = Some(fill.into());
        self
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a comment, dropped unless comments are enabled
    pub fn add_comment(&mut self, text: &str) {
        if !self.config.comments {
            return;
        }
        self.elements
            .push(format!("{}<!-- {} -->", self.indent_str(), text.replace("--", "- -")));
    }

    /// Add a filled rectangle, optionally with rounded corners
    pub fn add_rect(&mut self, width: Length, height: Length, corner_radius: Option<f64>, fill: &str) {
        let corners = corner_radius
            .map(|r| format!(r#" rx="{}" ry="{}""#, r, r))
            .unwrap_or_default();

        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}"{} fill="{}"/>"#,
            self.indent_str(),
            width,
            height,
            corners,
            escape_attr(fill)
        ));
    }

    /// Add a filled circle
    pub fn add_circle(&mut self, circle: &Circle, fill: &str) {
        self.elements.push(format!(
            r#"{}<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            circle.center.x,
            circle.center.y,
            circle.radius,
            escape_attr(fill)
        ));
    }

    /// Add a filled bezier path
    pub fn add_path(&mut self, path: &BezierPath, fill: &str) {
        self.elements.push(format!(
            r#"{}<path d="{}" fill="{}"/>"#,
            self.indent_str(),
            path.to_path_data(),
            escape_attr(fill)
        ));
    }

    /// Add a text element with its baseline at (x, y)
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" font-size="{}" font-weight="{}" letter-spacing="{}" font-family="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            x,
            y,
            style.font_size,
            style.font_weight,
            style.letter_spacing,
            escape_attr(&style.font_family),
            escape_attr(&style.fill),
            escape_xml(text)
        ));
    }

    /// Open a group element with an optional transform
    pub fn start_group(&mut self, transform: Option<&Transform>) {
        let transform_attr = transform
            .map(|t| format!(r#" transform="{}""#, t))
            .unwrap_or_default();

        self.elements
            .push(format!("{}<g{}>", self.indent_str(), transform_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, canvas: &Canvas) -> String {
        let nl = self.newline();
        let (vb_x, vb_y, vb_w, vb_h) = canvas.viewbox;

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let fill_attr = self
            .root_fill
            .as_deref()
            .map(|f| format!(r#" fill="{}""#, escape_attr(f)))
            .unwrap_or_default();
        svg.push_str(&format!(
            r#"<svg width="{}" height="{}" viewBox="{} {} {} {}"{} xmlns="http://www.w3.org/2000/svg">"#,
            canvas.width, canvas.height, vb_x, vb_y, vb_w, vb_h, fill_attr
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Escape special XML characters in text content
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Escape a double-quoted attribute value; single quotes stay literal
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}
