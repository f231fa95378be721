pub mod persist;

use crate::codec::BinaryCodec;
use crate::error::{GpError, GpResult};

pub type GenotypeId = u32;
pub type PhenotypeId = usize;

/// Genotype-phenotype table: `P` ordered buckets partitioning `0..2^L`.
///
/// Bucket position is the phenotype index, i.e. its complexity rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpTable {
    genotype_bits: u32,
    buckets: Vec<Vec<GenotypeId>>,
}

impl GpTable {
    /// Builds a table from explicit buckets, checking the partition invariant.
    pub fn from_buckets(genotype_bits: u32, buckets: Vec<Vec<GenotypeId>>) -> GpResult<Self> {
        let table = Self {
            genotype_bits,
            buckets,
        };
        table.validate()?;
        Ok(table)
    }

    /// Skips validation; callers must uphold the partition invariant.
    pub(crate) fn from_buckets_unchecked(genotype_bits: u32, buckets: Vec<Vec<GenotypeId>>) -> Self {
        Self {
            genotype_bits,
            buckets,
        }
    }

    pub fn genotype_bits(&self) -> u32 {
        self.genotype_bits
    }

    pub fn genotype_count(&self) -> usize {
        1usize << self.genotype_bits
    }

    pub fn phenotype_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn buckets(&self) -> &[Vec<GenotypeId>] {
        &self.buckets
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut Vec<Vec<GenotypeId>> {
        &mut self.buckets
    }

    pub fn bucket_sizes(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    pub fn total_genotypes(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Bucket holding `id`, by linear scan.
    pub fn phenotype_of(&self, id: GenotypeId) -> Option<PhenotypeId> {
        self.buckets.iter().position(|b| b.contains(&id))
    }

    /// Dense lookup: `map[id] == phenotype index`.
    pub fn phenotype_map(&self) -> Vec<PhenotypeId> {
        let mut map = vec![0; self.genotype_count()];
        for (pid, bucket) in self.buckets.iter().enumerate() {
            for &gid in bucket {
                map[gid as usize] = pid;
            }
        }
        map
    }

    /// True when bucket sizes strictly decrease with phenotype index.
    pub fn is_size_monotonic(&self) -> bool {
        self.buckets.windows(2).all(|w| w[0].len() > w[1].len())
    }

    pub fn validate(&self) -> GpResult<()> {
        if self.buckets.is_empty() {
            return Err(GpError::Validation("Table has no phenotype buckets".into()));
        }

        let codec = BinaryCodec::new(self.genotype_bits);
        let mut seen = vec![false; codec.genotype_count()];

        for (pid, bucket) in self.buckets.iter().enumerate() {
            for &gid in bucket {
                if !codec.contains(gid) {
                    return Err(GpError::OutOfRange {
                        id: gid,
                        bits: self.genotype_bits,
                    });
                }
                if std::mem::replace(&mut seen[gid as usize], true) {
                    return Err(GpError::Validation(format!(
                        "Genotype {} placed twice (again in phenotype {})",
                        gid, pid
                    )));
                }
            }
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(GpError::Validation(format!(
                "Genotype {} is not assigned to any phenotype",
                missing
            )));
        }
        Ok(())
    }
}
