use crate::error::{GpError, GpResult};
use crate::table::{GenotypeId, GpTable};
use fastrand::Rng;

/// Assigns every genotype, in ascending order, to a uniformly random bucket.
/// Buckets may come out empty.
pub fn random_table(rng: &mut Rng, genotype_bits: u32, phenotypes: usize) -> GpResult<GpTable> {
    if phenotypes == 0 {
        return Err(GpError::Config("Phenotype count must be positive".into()));
    }

    let mut buckets: Vec<Vec<GenotypeId>> = vec![Vec::new(); phenotypes];
    for gid in 0..(1usize << genotype_bits) {
        buckets[rng.usize(0..phenotypes)].push(gid as GenotypeId);
    }

    Ok(GpTable::from_buckets_unchecked(genotype_bits, buckets))
}

/// Moves one random genotype between two distinct buckets and re-ranks the
/// buckets by descending size (stable). The input table is left untouched.
pub fn mutate(table: &GpTable, rng: &mut Rng) -> GpResult<GpTable> {
    let phenotypes = table.phenotype_count();
    if phenotypes < 2 {
        return Err(GpError::Invariant(format!(
            "Cannot move a genotype between {} bucket(s)",
            phenotypes
        )));
    }

    // Only buckets that stay non-empty after a removal may donate.
    let sources: Vec<usize> = table
        .buckets()
        .iter()
        .enumerate()
        .filter(|(_, b)| b.len() > 1)
        .map(|(pid, _)| pid)
        .collect();
    if sources.is_empty() {
        return Err(GpError::Invariant(
            "Every bucket holds at most one genotype; no legal move".into(),
        ));
    }

    let src = sources[rng.usize(0..sources.len())];
    let mut dst = rng.usize(0..phenotypes - 1);
    if dst >= src {
        dst += 1;
    }

    let mut next = table.clone();
    let buckets = next.buckets_mut();

    let pick = rng.usize(0..buckets[src].len());
    let moved = buckets[src].remove(pick);
    buckets[dst].push(moved);

    buckets.sort_by(|a, b| b.len().cmp(&a.len()));

    if next.total_genotypes() != table.total_genotypes() {
        return Err(GpError::Invariant(format!(
            "Mutation changed genotype count from {} to {}",
            table.total_genotypes(),
            next.total_genotypes()
        )));
    }
    debug_assert!(next.validate().is_ok());

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutate_refuses_all_singletons() {
        let table = GpTable::from_buckets(1, vec![vec![0], vec![1]]).unwrap();
        let mut rng = Rng::with_seed(1);
        assert!(matches!(
            mutate(&table, &mut rng),
            Err(GpError::Invariant(_))
        ));
    }

    #[test]
    fn test_mutate_resorts_by_size() {
        let table = GpTable::from_buckets(2, vec![vec![0, 1], vec![2, 3]]).unwrap();
        let mut rng = Rng::with_seed(7);
        let next = mutate(&table, &mut rng).unwrap();
        assert_eq!(next.bucket_sizes(), vec![3, 1]);
        assert_eq!(table.bucket_sizes(), vec![2, 2]);
    }
}
