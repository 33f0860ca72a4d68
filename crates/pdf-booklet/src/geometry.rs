use crate::types::Orientation;

/// Size of a source page in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
}

/// Output sheet for two source pages side by side
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    /// Orientation the renderer is asked to produce
    pub orientation: Orientation,
}

impl PageGeometry {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_dimensions(self.width_pt, self.height_pt)
    }

    /// Paper holding two pages side by side.
    ///
    /// Landscape sources give `(2w, h)`. Portrait sources give `(h, 2w)`, the
    /// same paper rotated. The target orientation is always flipped.
    pub fn output_sheet(&self) -> SheetGeometry {
        let orientation = self.orientation();
        let (width_pt, height_pt) = match orientation {
            Orientation::Landscape => (2.0 * self.width_pt, self.height_pt),
            Orientation::Portrait => (self.height_pt, 2.0 * self.width_pt),
        };
        SheetGeometry {
            width_pt,
            height_pt,
            orientation: orientation.opposite(),
        }
    }
}

impl SheetGeometry {
    /// pdfjam `--papersize` value, e.g. `{1224pt, 792pt}`
    pub fn papersize_arg(&self) -> String {
        format!("{{{}pt, {}pt}}", self.width_pt, self.height_pt)
    }
}
