//! Fixed geometry of the Emberly symbol
//!
//! The symbol is drawn in a 256x256 design frame: a circular spark above two
//! embracing arms, each arm a closed chain of cubic beziers. Every template
//! that shows the symbol reuses these coordinates verbatim.

use std::fmt;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A circle by center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// One cubic bezier segment: two control points and an end point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl Cubic {
    const fn new(c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            c1: Point::new(c1.0, c1.1),
            c2: Point::new(c2.0, c2.1),
            end: Point::new(end.0, end.1),
        }
    }
}

/// A closed path made of cubic segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPath {
    pub start: Point,
    pub segments: &'static [Cubic],
}

impl BezierPath {
    /// SVG path data, e.g. `M129 112 C 98 112, 72 134, 63 163 ... Z`
    pub fn to_path_data(&self) -> String {
        let mut d = format!("M{} {}", self.start.x, self.start.y);
        for seg in self.segments {
            d.push_str(&format!(
                " C {} {}, {} {}, {} {}",
                seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.end.x, seg.end.y
            ));
        }
        d.push_str(" Z");
        d
    }
}

/// The three shapes that make up the symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolGeometry {
    pub spark: Circle,
    pub left_arm: BezierPath,
    pub right_arm: BezierPath,
}

const LEFT_ARM: [Cubic; 5] = [
    Cubic::new((98.0, 112.0), (72.0, 134.0), (63.0, 163.0)),
    Cubic::new((56.0, 186.0), (63.0, 209.0), (81.0, 223.0)),
    Cubic::new((97.0, 235.0), (121.0, 236.0), (142.0, 226.0)),
    Cubic::new((120.0, 214.0), (106.0, 197.0), (103.0, 178.0)),
    Cubic::new((100.0, 160.0), (108.0, 142.0), (129.0, 129.0)),
];

const RIGHT_ARM: [Cubic; 5] = [
    Cubic::new((158.0, 112.0), (184.0, 134.0), (193.0, 163.0)),
    Cubic::new((200.0, 186.0), (193.0, 209.0), (175.0, 223.0)),
    Cubic::new((159.0, 235.0), (135.0, 236.0), (114.0, 226.0)),
    Cubic::new((136.0, 214.0), (150.0, 197.0), (153.0, 178.0)),
    Cubic::new((156.0, 160.0), (148.0, 142.0), (127.0, 129.0)),
];

/// The Emberly "embrace" symbol
pub const EMBRACE: SymbolGeometry = SymbolGeometry {
    spark: Circle {
        center: Point::new(128.0, 76.0),
        radius: 26.0,
    },
    left_arm: BezierPath {
        start: Point::new(129.0, 112.0),
        segments: &LEFT_ARM,
    },
    right_arm: BezierPath {
        start: Point::new(127.0, 112.0),
        segments: &RIGHT_ARM,
    },
};

/// Side length of the design frame the symbol is drawn in
pub const SYMBOL_FRAME: f64 = 256.0;

/// A translate plus optional uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Point,
    pub scale: Option<f64>,
}

impl Transform {
    pub const fn translate(x: f64, y: f64) -> Self {
        Self {
            translate: Point::new(x, y),
            scale: None,
        }
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{})", self.translate.x, self.translate.y)?;
        if let Some(scale) = self.scale {
            write!(f, " scale({})", scale)?;
        }
        Ok(())
    }
}

/// Root element size and coordinate frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// viewBox as (min-x, min-y, width, height)
    pub viewbox: (f64, f64, f64, f64),
}

impl Canvas {
    /// A canvas whose viewBox matches its pixel size
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            viewbox: (0.0, 0.0, width, height),
        }
    }

    /// Override the viewBox size, keeping the origin at zero
    pub const fn with_viewbox(mut self, width: f64, height: f64) -> Self {
        self.viewbox = (0.0, 0.0, width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_arm_path_data() {
        assert_eq!(
            EMBRACE.left_arm.to_path_data(),
            "M129 112 C 98 112, 72 134, 63 163 C 56 186, 63 209, 81 223 \
             C 97 235, 121 236, 142 226 C 120 214, 106 197, 103 178 \
             C 100 160, 108 142, 129 129 Z"
        );
    }

    #[test]
    fn test_right_arm_path_data() {
        assert_eq!(
            EMBRACE.right_arm.to_path_data(),
            "M127 112 C 158 112, 184 134, 193 163 C 200 186, 193 209, 175 223 \
             C 159 235, 135 236, 114 226 C 136 214, 150 197, 153 178 \
             C 156 160, 148 142, 127 129 Z"
        );
    }

    #[test]
    fn test_arms_share_vertical_profile() {
        for (l, r) in LEFT_ARM.iter().zip(RIGHT_ARM.iter()) {
            assert_eq!(l.c1.y, r.c1.y);
            assert_eq!(l.c2.y, r.c2.y);
            assert_eq!(l.end.y, r.end.y);
        }
        assert_eq!(EMBRACE.left_arm.start.y, EMBRACE.right_arm.start.y);
    }

    #[test]
    fn test_transform_display() {
        assert_eq!(
            Transform::translate(70.0, 72.0).with_scale(1.15).to_string(),
            "translate(70,72) scale(1.15)"
        );
        assert_eq!(Transform::translate(0.0, 0.0).to_string(), "translate(0,0)");
    }

    #[test]
    fn test_canvas_viewbox() {
        let canvas = Canvas::new(1024.0, 1024.0).with_viewbox(SYMBOL_FRAME, SYMBOL_FRAME);
        assert_eq!(canvas.width, 1024.0);
        assert_eq!(canvas.viewbox, (0.0, 0.0, 256.0, 256.0));
    }
}
