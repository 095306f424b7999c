use std::collections::{BTreeSet, HashMap};

use crate::error::{GeometryError, OperationError, Result};
use crate::math::{LinearUnit, UvTransform, Vector2};
use crate::operations::query::GetShells;
use crate::topology::{MeshId, MeshStore, Selection};

use super::{average_density, UvArea};

/// How a selection is split into measured components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Granularity {
    /// Every UV shell touched by the selection is one component.
    #[default]
    Shell,
    /// Every selected component, expanded to its faces, is one component.
    Selection,
}

/// Parameters of a texel density correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexelDensityParams {
    pub granularity: Granularity,
    /// Desired texels per unit length. `0.0` targets the average density of
    /// the measured components.
    pub target_density: f64,
    pub texture_size: u32,
}

impl Default for TexelDensityParams {
    fn default() -> Self {
        Self {
            granularity: Granularity::Shell,
            target_density: 0.0,
            texture_size: 1024,
        }
    }
}

/// A measured component and the UVs its correction scales.
struct Sample {
    area: UvArea,
    uvs: Vec<usize>,
}

/// Scales the UVs of each component so all reach one texel density.
///
/// Each component is scaled uniformly by
/// `ratio * texture_size / target_density` about the center of its UV
/// bounding box. Every factor is computed before any UV moves.
pub struct SetTexelDensity<'a> {
    selection: &'a Selection,
    params: TexelDensityParams,
    unit: LinearUnit,
}

impl<'a> SetTexelDensity<'a> {
    /// Creates a new `SetTexelDensity` operation.
    #[must_use]
    pub fn new(selection: &'a Selection, params: TexelDensityParams) -> Self {
        Self {
            selection,
            params,
            unit: LinearUnit::default(),
        }
    }

    /// Sets the display unit surface areas are measured in.
    #[must_use]
    pub fn with_unit(mut self, unit: LinearUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Executes the correction, returning the number of components scaled.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative or non-finite target, a zero texture
    /// size, an empty selection, or a component without UV area. The store
    /// is unchanged on error.
    pub fn execute(&self, store: &mut MeshStore) -> Result<usize> {
        let TexelDensityParams {
            target_density,
            texture_size,
            ..
        } = self.params;
        if !target_density.is_finite() || target_density < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "target density must be a non-negative number, got {target_density}"
            ))
            .into());
        }
        if texture_size == 0 {
            return Err(OperationError::InvalidInput("texture size must be positive".into()).into());
        }

        let samples = self.samples(store)?;
        if samples.is_empty() {
            return Err(OperationError::EmptySelection.into());
        }

        let target = if target_density > 0.0 {
            target_density
        } else {
            let areas: Vec<UvArea> = samples.iter().map(|s| s.area.clone()).collect();
            average_density(&areas, texture_size)?
        };
        if !(target > 0.0 && target.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "texel density target {target} is not a positive number"
            ))
            .into());
        }

        let mut plan: Vec<(MeshId, &[usize], UvTransform)> = Vec::with_capacity(samples.len());
        for sample in &samples {
            let factor = sample.area.ratio()? * f64::from(texture_size) / target;
            if !(factor > 0.0 && factor.is_finite()) {
                return Err(GeometryError::Degenerate(format!(
                    "component without surface area scales by {factor}"
                ))
                .into());
            }
            let pivot = store
                .mesh(sample.area.mesh())?
                .uv_bounding_box(&sample.uvs)?
                .center();
            plan.push((
                sample.area.mesh(),
                &sample.uvs,
                UvTransform::scaling(Vector2::new(factor, factor), pivot),
            ));
        }

        tracing::debug!(components = plan.len(), target, "setting texel density");
        for (mesh, uvs, transform) in &plan {
            store.mesh_mut(*mesh)?.transform_uvs(uvs, transform)?;
        }
        Ok(plan.len())
    }

    fn samples(&self, store: &MeshStore) -> Result<Vec<Sample>> {
        match self.params.granularity {
            Granularity::Shell => GetShells::new(self.selection)
                .execute(store)?
                .into_iter()
                .map(|shell| -> Result<Sample> {
                    let area =
                        UvArea::measure(store, shell.mesh(), shell.faces().to_vec(), self.unit)?;
                    Ok(Sample {
                        area,
                        uvs: shell.uvs().to_vec(),
                    })
                })
                .collect(),
            Granularity::Selection => self.component_samples(store),
        }
    }

    /// One sample per selected component. Faces and UVs already claimed by
    /// an earlier component on the same mesh are left out, so every UV is
    /// scaled at most once.
    fn component_samples(&self, store: &MeshStore) -> Result<Vec<Sample>> {
        let mut claimed: HashMap<MeshId, (BTreeSet<usize>, BTreeSet<usize>)> = HashMap::new();
        let mut samples = Vec::new();
        for component in self.selection.components() {
            if component.is_empty() {
                continue;
            }
            let mesh = component.mesh();
            let (claimed_faces, claimed_uvs) = claimed.entry(mesh).or_default();
            let faces: Vec<usize> = component
                .to_faces(store)?
                .into_iter()
                .filter(|f| claimed_faces.insert(*f))
                .collect();
            if faces.is_empty() {
                tracing::debug!(?mesh, "component overlaps an earlier one, merged");
                continue;
            }
            let uvs: Vec<usize> = store
                .mesh(mesh)?
                .uvs_of_faces(&faces)?
                .into_iter()
                .filter(|uv| claimed_uvs.insert(*uv))
                .collect();
            if uvs.is_empty() {
                continue;
            }
            let area = UvArea::measure(store, mesh, faces, self.unit)?;
            samples.push(Sample { area, uvs });
        }
        Ok(samples)
    }
}
