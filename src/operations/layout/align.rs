use std::fmt;
use std::str::FromStr;

use crate::error::{OperationError, Result};
use crate::math::{Axis, BoundingBox2, UvTransform};

use super::{AlignmentContext, LayoutSolver};

/// Which edge or center of the group a shell is moved onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignMode {
    MaxU,
    MinU,
    MaxV,
    MinV,
    CenterU,
    CenterV,
}

impl AlignMode {
    /// The axis along which shells move.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            AlignMode::MaxU | AlignMode::MinU | AlignMode::CenterU => Axis::U,
            AlignMode::MaxV | AlignMode::MinV | AlignMode::CenterV => Axis::V,
        }
    }

    /// The coordinate of `bbox` this mode lines up.
    #[must_use]
    pub fn anchor(self, bbox: &BoundingBox2) -> f64 {
        let axis = self.axis();
        match self {
            AlignMode::MaxU | AlignMode::MaxV => bbox.max_on(axis),
            AlignMode::MinU | AlignMode::MinV => bbox.min_on(axis),
            AlignMode::CenterU | AlignMode::CenterV => bbox.center_on(axis),
        }
    }
}

impl FromStr for AlignMode {
    type Err = OperationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "maxu" => Ok(AlignMode::MaxU),
            "minu" => Ok(AlignMode::MinU),
            "maxv" => Ok(AlignMode::MaxV),
            "minv" => Ok(AlignMode::MinV),
            "centeru" => Ok(AlignMode::CenterU),
            "centerv" => Ok(AlignMode::CenterV),
            _ => Err(OperationError::InvalidMode {
                family: "align",
                mode: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlignMode::MaxU => "maxu",
            AlignMode::MinU => "minu",
            AlignMode::MaxV => "maxv",
            AlignMode::MinV => "minv",
            AlignMode::CenterU => "centeru",
            AlignMode::CenterV => "centerv",
        })
    }
}

/// Moves every shell so its edge or center matches the group's.
#[derive(Debug, Clone, Copy)]
pub struct Align {
    mode: AlignMode,
}

impl Align {
    /// Creates a new `Align` layout.
    #[must_use]
    pub fn new(mode: AlignMode) -> Self {
        Self { mode }
    }
}

impl LayoutSolver for Align {
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>> {
        let ctx = AlignmentContext::new(boxes)?;
        let target = self.mode.anchor(ctx.bbox());
        Ok(boxes
            .iter()
            .map(|bbox| {
                UvTransform::translation_on(self.mode.axis(), target - self.mode.anchor(bbox))
            })
            .collect())
    }
}
