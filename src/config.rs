use crate::consts::MAX_GENOTYPE_BITS;
use crate::error::{GpError, GpResult};
use crate::optimizer::CoolingSchedule;
use crate::scorer::{OrderingPolicy, PairCounting};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub table: TableParams,
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableParams {
    /// Genotype length L; genotypes are numbered 0 to 2^L - 1.
    #[arg(long, default_value_t = 5)]
    pub genotype_bits: u32,
    /// Phenotype count P; phenotypes are numbered 0 to P - 1 by complexity.
    #[arg(long, default_value_t = 4)]
    pub phenotypes: usize,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            genotype_bits: 5,
            phenotypes: 4,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = OrderingPolicy::MinimallyOrdered)]
    pub policy: OrderingPolicy,
    #[arg(long, default_value_t = PairCounting::Ordered)]
    pub pair_counting: PairCounting,
    #[arg(long, default_value_t = 1.0)]
    pub temp_init: f64,
    #[arg(long, default_value_t = 0.01)]
    pub temp_final: f64,
    #[arg(long, default_value_t = 10_000)]
    pub generations: usize,
    #[arg(long, default_value_t = 1000)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            policy: OrderingPolicy::MinimallyOrdered,
            pair_counting: PairCounting::Ordered,
            temp_init: 1.0,
            temp_final: 0.01,
            generations: 10_000,
            report_interval: 1000,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GpResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed on the command line over `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(table.genotype_bits);
        update_if_present!(table.phenotypes);

        update_if_present!(search.policy);
        update_if_present!(search.pair_counting);
        update_if_present!(search.temp_init);
        update_if_present!(search.temp_final);
        update_if_present!(search.generations);
        update_if_present!(search.report_interval);
    }

    pub fn validate(&self) -> GpResult<()> {
        let bits = self.table.genotype_bits;
        if !(1..=MAX_GENOTYPE_BITS).contains(&bits) {
            return Err(GpError::Config(format!(
                "genotype_bits must be between 1 and {} (got {})",
                MAX_GENOTYPE_BITS, bits
            )));
        }

        let genotypes = 1usize << bits;
        let phenotypes = self.table.phenotypes;
        if phenotypes < 2 {
            return Err(GpError::Config(format!(
                "phenotypes must be at least 2 (got {})",
                phenotypes
            )));
        }
        // With P < 2^L some bucket always holds two genotypes, so a move exists.
        if phenotypes >= genotypes {
            return Err(GpError::Config(format!(
                "phenotypes ({}) must be fewer than the {} genotypes",
                phenotypes, genotypes
            )));
        }

        CoolingSchedule::new(
            self.search.temp_init,
            self.search.temp_final,
            self.search.generations,
        )?;
        Ok(())
    }
}
