use crate::error::{GeometryError, Result};
use crate::math::triangle::{surface_fan_area, uv_fan_area};
use crate::math::LinearUnit;
use crate::topology::{MeshId, MeshStore};

/// UV area and world surface area accumulated over a fixed set of faces.
///
/// Measured once on construction; the totals never change afterwards.
#[derive(Debug, Clone)]
pub struct UvArea {
    mesh: MeshId,
    faces: Vec<usize>,
    uv_area: f64,
    surface_area: f64,
}

impl UvArea {
    /// Measures the given faces of a mesh.
    ///
    /// Surface side lengths are converted to `unit` before Heron's formula,
    /// so the ratio is expressed in texels per display unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is missing or a face index is invalid.
    pub fn measure(
        store: &MeshStore,
        mesh: MeshId,
        faces: Vec<usize>,
        unit: LinearUnit,
    ) -> Result<Self> {
        let data = store.mesh(mesh)?;
        let mut uv_area = 0.0;
        let mut surface_area = 0.0;
        for &face in &faces {
            uv_area += uv_fan_area(&data.polygon_uvs(face)?);
            surface_area += surface_fan_area(&data.polygon_points(face)?, unit);
        }
        Ok(Self {
            mesh,
            faces,
            uv_area,
            surface_area,
        })
    }

    #[must_use]
    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    #[must_use]
    pub fn faces(&self) -> &[usize] {
        &self.faces
    }

    #[must_use]
    pub fn uv_area(&self) -> f64 {
        self.uv_area
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Texels per unit length at a texture size of 1:
    /// `sqrt(surface_area / uv_area)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroUvArea` if the faces cover no UV area.
    pub fn ratio(&self) -> Result<f64> {
        if !(self.uv_area > 0.0 && self.uv_area.is_finite()) {
            return Err(GeometryError::ZeroUvArea {
                faces: self.faces.len(),
            }
            .into());
        }
        Ok((self.surface_area / self.uv_area).sqrt())
    }
}
