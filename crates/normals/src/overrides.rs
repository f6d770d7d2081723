//! Sparse per-vertex normal overrides.

use glam::Vec3;
use polymesh::VertexId;
use std::collections::HashMap;

/// Mapping from vertex to the normal every loop of that vertex should take.
///
/// Produced by aggregation or direction setting and consumed by
/// [`crate::merge_overrides`]. Keys are unique and order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalOverrides {
    normals: HashMap<VertexId, Vec3>,
}

impl NormalOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override of a vertex, replacing any previous one
    pub fn insert(&mut self, vertex_id: VertexId, normal: Vec3) {
        self.normals.insert(vertex_id, normal);
    }

    pub fn get(&self, vertex_id: VertexId) -> Option<Vec3> {
        self.normals.get(&vertex_id).copied()
    }

    pub fn contains(&self, vertex_id: VertexId) -> bool {
        self.normals.contains_key(&vertex_id)
    }

    pub fn len(&self) -> usize {
        self.normals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Vec3)> + '_ {
        self.normals.iter().map(|(&v, &n)| (v, n))
    }

    /// Dense lookup table indexed by vertex, `None` where no override exists.
    ///
    /// Overrides for vertices outside `0..vertex_count` are dropped.
    pub fn to_dense(&self, vertex_count: usize) -> Vec<Option<Vec3>> {
        let mut dense = vec![None; vertex_count];
        for (&vertex_id, &normal) in &self.normals {
            if let Some(slot) = dense.get_mut(vertex_id.0 as usize) {
                *slot = Some(normal);
            }
        }
        dense
    }
}

impl FromIterator<(VertexId, Vec3)> for NormalOverrides {
    fn from_iter<T: IntoIterator<Item = (VertexId, Vec3)>>(iter: T) -> Self {
        Self {
            normals: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces() {
        let mut overrides = NormalOverrides::new();
        overrides.insert(VertexId(3), Vec3::X);
        overrides.insert(VertexId(3), Vec3::Y);
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get(VertexId(3)), Some(Vec3::Y));
        assert!(!overrides.contains(VertexId(0)));
    }

    #[test]
    fn test_to_dense() {
        let overrides: NormalOverrides =
            [(VertexId(1), Vec3::Z), (VertexId(9), Vec3::X)].into_iter().collect();
        let dense = overrides.to_dense(3);
        assert_eq!(dense, vec![None, Some(Vec3::Z), None]);
    }
}
