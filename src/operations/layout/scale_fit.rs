use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, OperationError, Result, UvError};
use crate::math::{Axis, BoundingBox2, UvTransform, TOLERANCE};

use super::{AlignmentContext, LayoutSolver};

/// Which group extent every shell is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleFitMode {
    MaxU,
    MinU,
    MaxV,
    MinV,
}

impl ScaleFitMode {
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            ScaleFitMode::MaxU | ScaleFitMode::MinU => Axis::U,
            ScaleFitMode::MaxV | ScaleFitMode::MinV => Axis::V,
        }
    }

    fn target(self, ctx: &AlignmentContext) -> f64 {
        match self {
            ScaleFitMode::MaxU | ScaleFitMode::MaxV => ctx.max_extent(self.axis()),
            ScaleFitMode::MinU | ScaleFitMode::MinV => ctx.min_extent(self.axis()),
        }
    }
}

impl FromStr for ScaleFitMode {
    type Err = OperationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "maxu" => Ok(ScaleFitMode::MaxU),
            "minu" => Ok(ScaleFitMode::MinU),
            "maxv" => Ok(ScaleFitMode::MaxV),
            "minv" => Ok(ScaleFitMode::MinV),
            _ => Err(OperationError::InvalidMode {
                family: "scalefit",
                mode: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ScaleFitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScaleFitMode::MaxU => "maxu",
            ScaleFitMode::MinU => "minu",
            ScaleFitMode::MaxV => "maxv",
            ScaleFitMode::MinV => "minv",
        })
    }
}

/// Scales every shell about its own center so its width or height matches
/// the largest or smallest in the group.
#[derive(Debug, Clone, Copy)]
pub struct ScaleFit {
    mode: ScaleFitMode,
}

impl ScaleFit {
    /// Creates a new `ScaleFit` layout.
    #[must_use]
    pub fn new(mode: ScaleFitMode) -> Self {
        Self { mode }
    }
}

impl LayoutSolver for ScaleFit {
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>> {
        let ctx = AlignmentContext::new(boxes)?;
        let axis = self.mode.axis();
        let target = self.mode.target(&ctx);

        boxes
            .iter()
            .map(|bbox| {
                let extent = bbox.extent(axis);
                if extent < TOLERANCE {
                    return Err(UvError::from(GeometryError::Degenerate(format!(
                        "shell has zero {axis} extent and cannot be scaled to fit"
                    ))));
                }
                // The pivot carries both coordinates even though only one
                // axis scales.
                Ok(UvTransform::scaling(axis.scale(target / extent), bbox.center()))
            })
            .collect()
    }
}
