pub mod adjacency;
pub mod types;

pub use self::adjacency::AdjacencyGraph;
pub use self::types::{EnergyBreakdown, OrderingPolicy, PairCounting};

use crate::codec::BinaryCodec;
use crate::consts::{NON_SKIP_PENALTY, PARALLEL_THRESHOLD, SIZE_ORDER_PENALTY, SKIP_PENALTY};
use crate::error::{GpError, GpResult};
use crate::table::{GpTable, PhenotypeId};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Energy of a table under one ordering policy. Lower is better, 0 is optimal.
pub struct EnergyScorer {
    codec: BinaryCodec,
    policy: OrderingPolicy,
    counting: PairCounting,
    adjacency: AdjacencyGraph,
    parallel: bool,
}

impl EnergyScorer {
    pub fn new(genotype_bits: u32, policy: OrderingPolicy, counting: PairCounting) -> Self {
        let codec = BinaryCodec::new(genotype_bits);
        let adjacency = AdjacencyGraph::build(&codec);
        let parallel = codec.genotype_count() >= PARALLEL_THRESHOLD;

        if counting == PairCounting::Unordered {
            warn!("Scoring each genotype pair once: energies are on half the usual adjacency scale");
        }
        debug!(
            "Scorer ready: {} genotypes, {} ordered adjacent pairs, policy {}",
            codec.genotype_count(),
            adjacency.edge_count(),
            policy
        );

        Self {
            codec,
            policy,
            counting,
            adjacency,
            parallel,
        }
    }

    pub fn codec(&self) -> &BinaryCodec {
        &self.codec
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn counting(&self) -> PairCounting {
        self.counting
    }

    pub fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn score(&self, table: &GpTable) -> GpResult<f64> {
        Ok(self.score_details(table)?.total)
    }

    pub fn score_details(&self, table: &GpTable) -> GpResult<EnergyBreakdown> {
        if table.genotype_bits() != self.codec.bits() {
            return Err(GpError::Validation(format!(
                "Table holds {}-bit genotypes, scorer expects {}",
                table.genotype_bits(),
                self.codec.bits()
            )));
        }

        let pmap = table.phenotype_map();
        let (skips, non_skips) = if self.parallel {
            self.count_pairs_parallel(&pmap)
        } else {
            self.count_pairs(&pmap)
        };

        let adjacency_energy = match self.policy {
            OrderingPolicy::StronglyOrdered => skips as f64 * SKIP_PENALTY,
            OrderingPolicy::MinimallyOrdered => non_skips as f64 * NON_SKIP_PENALTY,
        };

        let size_violations = table
            .buckets()
            .windows(2)
            .filter(|w| w[0].len() <= w[1].len())
            .count() as u32;
        let size_energy = size_violations as f64 * SIZE_ORDER_PENALTY;

        Ok(EnergyBreakdown {
            skips,
            non_skips,
            size_violations,
            adjacency_energy,
            size_energy,
            total: adjacency_energy + size_energy,
        })
    }

    /// `(skips, non_skips)` for the adjacent pairs starting at `g1`.
    #[inline]
    fn count_row(&self, pmap: &[PhenotypeId], g1: usize) -> (u64, u64) {
        let p1 = pmap[g1];
        let mut skips = 0;
        let mut non_skips = 0;

        for &g2 in self.adjacency.neighbours(g1 as u32) {
            if self.counting == PairCounting::Unordered && (g2 as usize) < g1 {
                continue;
            }
            if p1.abs_diff(pmap[g2 as usize]) > 1 {
                skips += 1;
            } else {
                non_skips += 1;
            }
        }
        (skips, non_skips)
    }

    fn count_pairs(&self, pmap: &[PhenotypeId]) -> (u64, u64) {
        (0..pmap.len())
            .map(|g1| self.count_row(pmap, g1))
            .fold((0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    }

    // Integer counts: the reduction order cannot change the result.
    fn count_pairs_parallel(&self, pmap: &[PhenotypeId]) -> (u64, u64) {
        (0..pmap.len())
            .into_par_iter()
            .map(|g1| self.count_row(pmap, g1))
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    }
}
