use crate::reports;
use clap::{ArgMatches, Args};
use gptable::config::Config;
use gptable::consts::DEFAULT_OUTPUT;
use gptable::error::GpResult;
use gptable::optimizer::{OptimizationOptions, Optimizer, ProgressCallback};
use gptable::scorer::EnergyScorer;
use gptable::table::persist;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file with table/search parameters; explicit flags win
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, generation: usize, temp: f64, current: f64, best: f64) -> bool {
        info!(
            "Gen {:6} | T {:.4} | Current: {:.2} | Best: {:.2}",
            generation, temp, current, best
        );
        true
    }
}

pub fn run(args: SearchArgs, matches: &ArgMatches) -> GpResult<()> {
    let config = match &args.config_file {
        Some(path) => {
            info!("📂 Loading config from: {:?}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(&args.config, matches);
            file_config
        }
        None => args.config.clone(),
    };
    config.validate()?;

    info!(
        "🧬 {} genotypes ({} bits) into {} phenotypes, policy {}",
        1usize << config.table.genotype_bits,
        config.table.genotype_bits,
        config.table.phenotypes,
        config.search.policy
    );

    let scorer = Arc::new(EnergyScorer::new(
        config.table.genotype_bits,
        config.search.policy,
        config.search.pair_counting,
    ));

    let mut options = OptimizationOptions::from(&config);
    if let Some(t) = args.time {
        options.max_time = Some(Duration::from_secs(t));
    }

    info!(
        "🔥 Annealing for {} generations (T {} -> {})",
        options.generations, options.temp_init, options.temp_final
    );
    let optimizer = Optimizer::new(scorer.clone(), options);
    let result = optimizer.run(args.seed, CliLogger)?;
    let details = scorer.score_details(&result.best)?;

    persist::save_table(&result.best, &args.output)?;
    info!("💾 Saved best table to {:?}", args.output);

    reports::print_search_summary(&result, &details);
    reports::print_buckets("OPTIMIZED", &result.best);
    Ok(())
}
