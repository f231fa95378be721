use super::anneal::{self, CoolingSchedule};
use super::mutation;
use crate::config::Config;
use crate::error::GpResult;
use crate::scorer::EnergyScorer;
use crate::table::GpTable;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub phenotypes: usize,
    pub temp_init: f64,
    pub temp_final: f64,
    pub generations: usize,
    /// Generations between progress callbacks; 0 disables them.
    pub report_interval: usize,
    pub max_time: Option<Duration>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            phenotypes: cfg.table.phenotypes,
            temp_init: cfg.search.temp_init,
            temp_final: cfg.search.temp_final,
            generations: cfg.search.generations,
            report_interval: cfg.search.report_interval,
            max_time: None, // Set manually if needed
        }
    }
}

/// A trait for receiving updates during optimization.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(
        &self,
        generation: usize,
        temperature: f64,
        current_energy: f64,
        best_energy: f64,
    ) -> bool;
}

pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_progress(&self, _: usize, _: f64, _: f64, _: f64) -> bool {
        true
    }
}

/// Snapshot of the chain after one generation.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub current: Arc<GpTable>,
    pub current_energy: f64,
    pub best: Arc<GpTable>,
    pub best_energy: f64,
}

impl SearchState {
    pub fn new(initial: GpTable, energy: f64) -> Self {
        let current = Arc::new(initial);
        Self {
            best: Arc::clone(&current),
            current,
            current_energy: energy,
            best_energy: energy,
        }
    }

    /// Next state given a scored candidate. The second value reports
    /// whether the best table was replaced.
    pub fn advance(self, candidate: GpTable, candidate_energy: f64, accepted: bool) -> (Self, bool) {
        let (current, current_energy) = if accepted {
            (Arc::new(candidate), candidate_energy)
        } else {
            (self.current, self.current_energy)
        };

        if current_energy < self.best_energy {
            let next = Self {
                best: Arc::clone(&current),
                best_energy: current_energy,
                current,
                current_energy,
            };
            (next, true)
        } else {
            let next = Self {
                current,
                current_energy,
                best: self.best,
                best_energy: self.best_energy,
            };
            (next, false)
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub best: GpTable,
    pub best_energy: f64,
    pub initial_energy: f64,
    pub generations_run: usize,
    pub accepted: usize,
    pub improvements: usize,
    pub stopped_early: bool,
}

impl OptimizationResult {
    pub fn is_perfect(&self) -> bool {
        self.best_energy == 0.0
    }
}

pub struct Optimizer {
    scorer: Arc<EnergyScorer>,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<EnergyScorer>, options: OptimizationOptions) -> Self {
        Self { scorer, options }
    }

    pub fn scorer(&self) -> &EnergyScorer {
        &self.scorer
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        seed: Option<u64>,
        callback: CB,
    ) -> GpResult<OptimizationResult> {
        let mut rng = if let Some(s) = seed {
            debug!("Seeding search with {}", s);
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };
        self.run_with_rng(&mut rng, callback)
    }

    /// Runs one annealing chain. Initialization, mutation and acceptance
    /// all draw from `rng`, in that order.
    pub fn run_with_rng<CB: ProgressCallback>(
        &self,
        rng: &mut fastrand::Rng,
        callback: CB,
    ) -> GpResult<OptimizationResult> {
        let opts = &self.options;
        let schedule = CoolingSchedule::new(opts.temp_init, opts.temp_final, opts.generations)?;

        // 1. Initial table
        let initial = mutation::random_table(rng, self.scorer.codec().bits(), opts.phenotypes)?;
        let initial_energy = self.scorer.score(&initial)?;
        let mut state = SearchState::new(initial, initial_energy);

        let mut accepted_count = 0;
        let mut improvements = 0;
        let mut generations_run = 0;
        let mut stopped_early = false;
        let start_time = Instant::now();

        // 2. Main Loop
        // Exactly N moves: the last one runs at temperature(N - 1), so t_final
        // itself is never reached and energies are not step-for-step comparable
        // with runs that made N + 1 moves.
        for generation in 0..opts.generations {
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    debug!("Time budget reached at generation {}", generation);
                    stopped_early = true;
                    break;
                }
            }

            let temperature = schedule.temperature(generation);
            trace!(
                "Gen {:6} | T {:.4} | Current: {:.2} | Best: {:.2}",
                generation,
                temperature,
                state.current_energy,
                state.best_energy
            );

            let candidate = mutation::mutate(&state.current, rng)?;
            let candidate_energy = self.scorer.score(&candidate)?;
            let accepted = anneal::accept(rng, state.current_energy, candidate_energy, temperature);

            let (next, improved) = state.advance(candidate, candidate_energy, accepted);
            state = next;
            generations_run += 1;
            accepted_count += accepted as usize;
            improvements += improved as usize;

            if opts.report_interval > 0
                && generations_run % opts.report_interval == 0
                && !callback.on_progress(
                    generation,
                    temperature,
                    state.current_energy,
                    state.best_energy,
                )
            {
                debug!("Search cancelled by callback at generation {}", generation);
                stopped_early = true;
                break;
            }
        }

        // 3. Terminal verdict
        let SearchState {
            current,
            best,
            best_energy,
            ..
        } = state;
        drop(current);
        let best = Arc::try_unwrap(best).unwrap_or_else(|shared| (*shared).clone());

        if best_energy == 0.0 {
            info!("Perfect gptable found with ordering {}", self.scorer.policy());
        } else {
            info!(
                "Imperfect gptable found with ordering {} (energy {:.2})",
                self.scorer.policy(), best_energy
            );
        }

        Ok(OptimizationResult {
            best,
            best_energy,
            initial_energy,
            generations_run,
            accepted: accepted_count,
            improvements,
            stopped_early,
        })
    }
}
