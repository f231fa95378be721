use crate::reports;
use clap::Args;
use gptable::error::GpResult;
use gptable::scorer::{EnergyScorer, OrderingPolicy, PairCounting};
use gptable::table::persist;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Table file in GTYPE,PTYPE_ID format
    pub table: PathBuf,

    /// Phenotype count, if trailing phenotypes may be empty
    #[arg(long)]
    pub phenotypes: Option<usize>,

    #[arg(long, default_value_t = PairCounting::Ordered)]
    pub pair_counting: PairCounting,
}

pub fn run(args: InspectArgs) -> GpResult<()> {
    info!("📂 Loading table: {:?}", args.table);
    let table = persist::load_table(&args.table, args.phenotypes)?;

    let results = OrderingPolicy::iter()
        .map(|policy| {
            let scorer = EnergyScorer::new(table.genotype_bits(), policy, args.pair_counting);
            scorer.score_details(&table).map(|d| (policy, d))
        })
        .collect::<GpResult<Vec<_>>>()?;

    reports::print_buckets("LOADED", &table);
    reports::print_energies(&results);
    Ok(())
}
