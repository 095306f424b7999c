use std::collections::BTreeSet;

use crate::error::{GeometryError, TopologyError};
use crate::math::{BoundingBox2, Point2, Point3, UvTransform};

slotmap::new_key_type! {
    /// Unique identifier for a mesh in the mesh store.
    pub struct MeshId;
}

/// A polygon face. Corner `i` uses vertex `vertices[i]` and UV `uvs[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    vertices: Vec<usize>,
    uvs: Vec<usize>,
}

impl Face {
    /// Creates a face from per-corner vertex and UV indices.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidFace` if the corner lists differ in
    /// length or hold fewer than three corners.
    pub fn new(vertices: Vec<usize>, uvs: Vec<usize>) -> Result<Self, TopologyError> {
        if vertices.len() != uvs.len() {
            return Err(TopologyError::InvalidFace(format!(
                "{} vertices but {} uvs",
                vertices.len(),
                uvs.len()
            )));
        }
        if vertices.len() < 3 {
            return Err(TopologyError::InvalidFace(format!(
                "a face needs at least 3 corners, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices, uvs })
    }

    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    #[must_use]
    pub fn uvs(&self) -> &[usize] {
        &self.uvs
    }
}

/// A polygon mesh with a single UV set.
///
/// World points are stored in internal units (centimetres).
#[derive(Debug, Clone)]
pub struct MeshData {
    name: String,
    points: Vec<Point3>,
    uvs: Vec<Point2>,
    faces: Vec<Face>,
}

impl MeshData {
    /// Creates a mesh, checking every face index against the point and UV
    /// arrays.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::IndexOutOfRange` if a face references a
    /// missing point or UV.
    pub fn new(
        name: impl Into<String>,
        points: Vec<Point3>,
        uvs: Vec<Point2>,
        faces: Vec<Face>,
    ) -> Result<Self, TopologyError> {
        for face in &faces {
            check_indices("vertex", face.vertices(), points.len())?;
            check_indices("uv", face.uvs(), uvs.len())?;
        }
        Ok(Self {
            name: name.into(),
            points,
            uvs,
            faces,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn uvs(&self) -> &[Point2] {
        &self.uvs
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the face at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn face(&self, index: usize) -> Result<&Face, TopologyError> {
        self.faces.get(index).ok_or(TopologyError::IndexOutOfRange {
            kind: "face",
            index,
            len: self.faces.len(),
        })
    }

    /// Returns the UV coordinate at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn uv(&self, index: usize) -> Result<Point2, TopologyError> {
        self.uvs.get(index).copied().ok_or(TopologyError::IndexOutOfRange {
            kind: "uv",
            index,
            len: self.uvs.len(),
        })
    }

    /// Replaces the whole UV array, as when restoring an undo snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the new array has a different length.
    pub fn set_uvs(&mut self, uvs: Vec<Point2>) -> Result<(), TopologyError> {
        if uvs.len() != self.uvs.len() {
            return Err(TopologyError::IndexOutOfRange {
                kind: "uv",
                index: uvs.len(),
                len: self.uvs.len(),
            });
        }
        self.uvs = uvs;
        Ok(())
    }

    /// Returns the UV coordinates of a face's corners, in corner order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face index is out of range.
    pub fn polygon_uvs(&self, face: usize) -> Result<Vec<Point2>, TopologyError> {
        Ok(self.face(face)?.uvs.iter().map(|&i| self.uvs[i]).collect())
    }

    /// Returns the world positions of a face's corners, in corner order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face index is out of range.
    pub fn polygon_points(&self, face: usize) -> Result<Vec<Point3>, TopologyError> {
        Ok(self
            .face(face)?
            .vertices
            .iter()
            .map(|&i| self.points[i])
            .collect())
    }

    /// Groups UVs into shells: UVs used by a common face share a shell.
    ///
    /// Returns the number of shells and the shell id of every UV. Ids are
    /// dense and numbered in order of each shell's lowest UV index.
    #[must_use]
    pub fn uv_shell_ids(&self) -> (usize, Vec<usize>) {
        let mut parent: Vec<usize> = (0..self.uvs.len()).collect();
        for face in &self.faces {
            let first = face.uvs[0];
            for &uv in &face.uvs[1..] {
                union(&mut parent, first, uv);
            }
        }

        let mut ids = vec![usize::MAX; self.uvs.len()];
        let mut root_ids = vec![usize::MAX; self.uvs.len()];
        let mut count = 0;
        for uv in 0..self.uvs.len() {
            let root = find(&mut parent, uv);
            if root_ids[root] == usize::MAX {
                root_ids[root] = count;
                count += 1;
            }
            ids[uv] = root_ids[root];
        }
        (count, ids)
    }

    /// Faces with at least one corner using a UV in `uvs`.
    #[must_use]
    pub fn faces_using_uvs(&self, uvs: &BTreeSet<usize>) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.uvs.iter().any(|uv| uvs.contains(uv)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Faces with at least one corner on a vertex in `vertices`.
    #[must_use]
    pub fn faces_using_vertices(&self, vertices: &BTreeSet<usize>) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.vertices.iter().any(|v| vertices.contains(v)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Sorted, de-duplicated UV indices used by the given faces.
    ///
    /// # Errors
    ///
    /// Returns an error if a face index is out of range.
    pub fn uvs_of_faces(&self, faces: &[usize]) -> Result<Vec<usize>, TopologyError> {
        let mut set = BTreeSet::new();
        for &f in faces {
            set.extend(self.face(f)?.uvs.iter().copied());
        }
        Ok(set.into_iter().collect())
    }

    /// UV indices at corners whose vertex is in `vertices`.
    #[must_use]
    pub fn uvs_of_vertices(&self, vertices: &BTreeSet<usize>) -> Vec<usize> {
        let mut set = BTreeSet::new();
        for face in &self.faces {
            for (v, uv) in face.vertices.iter().zip(&face.uvs) {
                if vertices.contains(v) {
                    set.insert(*uv);
                }
            }
        }
        set.into_iter().collect()
    }

    /// Bounding box of the given UVs.
    ///
    /// # Errors
    ///
    /// Returns an error if `uvs` is empty or holds an out-of-range index.
    pub fn uv_bounding_box(&self, uvs: &[usize]) -> crate::Result<BoundingBox2> {
        check_indices("uv", uvs, self.uvs.len())?;
        BoundingBox2::from_points(uvs.iter().map(|&i| &self.uvs[i])).ok_or_else(|| {
            GeometryError::Degenerate("bounding box of an empty uv set".into()).into()
        })
    }

    /// Applies `transform` to each of the given UVs in place.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range; nothing is moved then.
    pub fn transform_uvs(
        &mut self,
        uvs: &[usize],
        transform: &UvTransform,
    ) -> Result<(), TopologyError> {
        check_indices("uv", uvs, self.uvs.len())?;
        for &i in uvs {
            self.uvs[i] = transform.apply(&self.uvs[i]);
        }
        Ok(())
    }
}

fn check_indices(kind: &'static str, indices: &[usize], len: usize) -> Result<(), TopologyError> {
    match indices.iter().find(|&&i| i >= len) {
        Some(&index) => Err(TopologyError::IndexOutOfRange { kind, index, len }),
        None => Ok(()),
    }
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Lower index wins so roots stay stable.
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[hi] = lo;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn uv(u: f64, v: f64) -> Point2 {
        Point2::new(u, v)
    }

    /// Two quads sharing an edge in 3D but split into two UV islands, plus
    /// a third quad welded in UV to the second.
    fn split_strip() -> MeshData {
        let points = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0),
            p(2.0, 1.0),
            p(3.0, 1.0),
        ];
        let uvs = vec![
            // island A
            uv(0.0, 0.0),
            uv(1.0, 0.0),
            uv(1.0, 1.0),
            uv(0.0, 1.0),
            // island B
            uv(2.0, 0.0),
            uv(3.0, 0.0),
            uv(3.0, 1.0),
            uv(2.0, 1.0),
            uv(4.0, 0.0),
            uv(4.0, 1.0),
        ];
        let faces = vec![
            Face::new(vec![0, 1, 5, 4], vec![0, 1, 2, 3]).unwrap(),
            Face::new(vec![1, 2, 6, 5], vec![4, 5, 6, 7]).unwrap(),
            Face::new(vec![2, 3, 7, 6], vec![5, 8, 9, 6]).unwrap(),
        ];
        MeshData::new("strip", points, uvs, faces).unwrap()
    }

    #[test]
    fn face_validation() {
        assert!(Face::new(vec![0, 1], vec![0, 1]).is_err());
        assert!(Face::new(vec![0, 1, 2], vec![0, 1]).is_err());
        assert!(Face::new(vec![0, 1, 2], vec![0, 1, 2]).is_ok());
    }

    #[test]
    fn mesh_rejects_out_of_range() {
        let face = Face::new(vec![0, 1, 5], vec![0, 1, 2]).unwrap();
        let result = MeshData::new(
            "bad",
            vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)],
            vec![uv(0.0, 0.0), uv(1.0, 0.0), uv(0.0, 1.0)],
            vec![face],
        );
        assert!(matches!(
            result,
            Err(TopologyError::IndexOutOfRange { kind: "vertex", index: 5, .. })
        ));
    }

    #[test]
    fn shell_ids_follow_uv_connectivity() {
        let mesh = split_strip();
        let (count, ids) = mesh.uv_shell_ids();
        assert_eq!(count, 2);
        assert_eq!(&ids[0..4], &[0, 0, 0, 0]);
        assert!(ids[4..].iter().all(|&id| id == 1));
    }

    #[test]
    fn face_and_uv_conversions() {
        let mesh = split_strip();
        let touching: BTreeSet<usize> = [5].into_iter().collect();
        assert_eq!(mesh.faces_using_uvs(&touching), vec![1, 2]);
        assert_eq!(mesh.uvs_of_faces(&[0]).unwrap(), vec![0, 1, 2, 3]);
        let verts: BTreeSet<usize> = [1].into_iter().collect();
        assert_eq!(mesh.faces_using_vertices(&verts), vec![0, 1]);
        assert_eq!(mesh.uvs_of_vertices(&verts), vec![1, 4]);
    }

    #[test]
    fn transform_moves_only_listed_uvs() {
        let mut mesh = split_strip();
        mesh.transform_uvs(&[0, 1], &UvTransform::translation(crate::math::Vector2::new(1.0, 0.0)))
            .unwrap();
        assert!((mesh.uvs()[0].x - 1.0).abs() < TOLERANCE);
        assert!((mesh.uvs()[1].x - 2.0).abs() < TOLERANCE);
        assert!((mesh.uvs()[2].x - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn transform_out_of_range_moves_nothing() {
        let mut mesh = split_strip();
        let before = mesh.uvs().to_vec();
        let t = UvTransform::translation(crate::math::Vector2::new(1.0, 0.0));
        assert!(mesh.transform_uvs(&[0, 99], &t).is_err());
        assert_eq!(mesh.uvs(), before.as_slice());
    }

    #[test]
    fn uv_bounding_box_of_island() {
        let mesh = split_strip();
        let bbox = mesh.uv_bounding_box(&[4, 5, 6, 7, 8, 9]).unwrap();
        assert!((bbox.width() - 2.0).abs() < TOLERANCE);
        assert!(mesh.uv_bounding_box(&[]).is_err());
    }
}
