use peak_core::Vertex;

use crate::graph::UndirectedGraph;

/// Dense view of an [`UndirectedGraph`] in which vertex `i` is the `i`-th
/// smallest vertex and every neighbor list is a sorted slice of indices.
#[derive(Debug, Clone)]
pub struct IndexedAdjacency<'a, V: Vertex> {
    vertices: Vec<&'a V>,
    neighbors: Vec<Vec<usize>>,
}

impl<'a, V: Vertex> IndexedAdjacency<'a, V> {
    /// Builds the view for `graph`.
    pub fn new(graph: &'a UndirectedGraph<V>) -> Self {
        let vertices: Vec<&'a V> = graph.vertices().collect();
        let neighbors: Vec<Vec<usize>> = vertices
            .iter()
            .map(|&vertex| {
                // Neighbor sets iterate in vertex order, so the mapped indices stay sorted.
                graph
                    .neighbors(vertex)
                    .map(|set| {
                        set.iter()
                            .filter_map(|neighbor| vertices.binary_search(&neighbor).ok())
                            .collect::<Vec<usize>>()
                    })
                    .unwrap_or_default()
            })
            .collect();
        Self {
            vertices,
            neighbors,
        }
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the view holds no vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex stored at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn vertex(&self, index: usize) -> &'a V {
        self.vertices[index]
    }

    /// Returns the index of `vertex`, if present.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.binary_search(&vertex).ok()
    }

    /// Returns the sorted neighbor indices of `index`.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Returns the degree of `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors[index].len()
    }

    /// Maps a sequence of indices back to owned vertices.
    pub fn resolve(&self, indices: &[usize]) -> Vec<V> {
        indices
            .iter()
            .map(|&index| self.vertices[index].clone())
            .collect()
    }
}
