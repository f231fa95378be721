/// Energy added per adjacent genotype pair that skips a phenotype (strongly ordered).
pub const SKIP_PENALTY: f64 = 1.0;

/// Energy added per adjacent genotype pair that does not skip (minimally ordered).
pub const NON_SKIP_PENALTY: f64 = 0.5;

/// Energy added per consecutive bucket pair whose sizes are not strictly decreasing.
pub const SIZE_ORDER_PENALTY: f64 = 5.0;

/// Largest genotype width accepted by the configuration layer.
/// Adjacency setup is quadratic in `2^L`.
pub const MAX_GENOTYPE_BITS: u32 = 12;

/// Genotype count at which energy evaluation fans out across rayon workers.
pub const PARALLEL_THRESHOLD: usize = 512;

/// Default output file consumed by the plotting tools.
pub const DEFAULT_OUTPUT: &str = "gptable.csv";

pub const CSV_HEADER_GENOTYPE: &str = "GTYPE";
pub const CSV_HEADER_PHENOTYPE: &str = "PTYPE_ID";
