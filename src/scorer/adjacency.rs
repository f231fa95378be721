use crate::codec::BinaryCodec;
use crate::distance::is_adjacent;
use crate::table::GenotypeId;
use rayon::prelude::*;

/// Genotype adjacency relation (edit distance 1), as neighbour lists.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    neighbours: Vec<Vec<GenotypeId>>,
}

impl AdjacencyGraph {
    /// Compares the binary form of every genotype pair once.
    pub fn build(codec: &BinaryCodec) -> Self {
        let encoded = codec.encode_all();

        let neighbours = (0..encoded.len())
            .into_par_iter()
            .map(|g1| {
                let a = encoded[g1].as_bytes();
                encoded
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| is_adjacent(a, other.as_bytes()))
                    .map(|(g2, _)| g2 as GenotypeId)
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { neighbours }
    }

    pub fn genotype_count(&self) -> usize {
        self.neighbours.len()
    }

    #[inline]
    pub fn neighbours(&self, id: GenotypeId) -> &[GenotypeId] {
        &self.neighbours[id as usize]
    }

    /// Number of ordered adjacent pairs.
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(Vec::len).sum()
    }
}
