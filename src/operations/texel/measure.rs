use crate::error::Result;
use crate::math::LinearUnit;
use crate::topology::{MeshStore, Selection};

use super::{average_density, density, UvArea};

/// Texel density of a selection, in texels per display unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexelDensity {
    /// Sum over the selected components.
    pub density: f64,
    /// Mean over the selected components.
    pub average_density: f64,
    /// Number of components measured.
    pub components: usize,
}

/// Measures the texel density of every selected component.
///
/// Each component, expanded to the faces it covers, is one sample.
pub struct MeasureTexelDensity<'a> {
    selection: &'a Selection,
    texture_size: u32,
    unit: LinearUnit,
}

impl<'a> MeasureTexelDensity<'a> {
    /// Creates a new `MeasureTexelDensity` query.
    #[must_use]
    pub fn new(selection: &'a Selection, texture_size: u32) -> Self {
        Self {
            selection,
            texture_size,
            unit: LinearUnit::default(),
        }
    }

    /// Sets the display unit surface areas are measured in.
    #[must_use]
    pub fn with_unit(mut self, unit: LinearUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Measures one [`UvArea`] per non-empty selected component.
    ///
    /// # Errors
    ///
    /// Returns an error if a component references a missing mesh or face.
    pub fn samples(&self, store: &MeshStore) -> Result<Vec<UvArea>> {
        self.selection
            .components()
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| UvArea::measure(store, c.mesh(), c.to_faces(store)?, self.unit))
            .collect()
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty selection or a component without UV
    /// area.
    pub fn execute(&self, store: &MeshStore) -> Result<TexelDensity> {
        let areas = self.samples(store)?;
        Ok(TexelDensity {
            average_density: average_density(&areas, self.texture_size)?,
            density: density(&areas, self.texture_size)?,
            components: areas.len(),
        })
    }
}
