use crate::error::{GpError, GpResult};
use fastrand::Rng;

/// Exponential cooling from `t_init` at step 0 to `t_final` at `steps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSchedule {
    pub t_init: f64,
    pub t_final: f64,
    pub steps: usize,
    tau: f64,
}

impl CoolingSchedule {
    pub fn new(t_init: f64, t_final: f64, steps: usize) -> GpResult<Self> {
        if !(t_init.is_finite() && t_final.is_finite()) || t_final <= 0.0 || t_final > t_init {
            return Err(GpError::Config(format!(
                "Temperatures must satisfy 0 < t_final <= t_init (got t_init={}, t_final={})",
                t_init, t_final
            )));
        }

        let ratio = (t_init / t_final).ln();
        // A flat schedule (steps == 0 or t_init == t_final) keeps t_init.
        let tau = if steps == 0 || ratio == 0.0 {
            f64::INFINITY
        } else {
            steps as f64 / ratio
        };

        Ok(Self {
            t_init,
            t_final,
            steps,
            tau,
        })
    }

    #[inline]
    pub fn temperature(&self, step: usize) -> f64 {
        self.t_init * (-(step as f64) / self.tau).exp()
    }
}

/// Metropolis criterion: improvements always pass, worse candidates pass
/// with probability `exp(-delta / temperature)`.
#[inline]
pub fn accept(rng: &mut Rng, current: f64, candidate: f64, temperature: f64) -> bool {
    if candidate < current {
        return true;
    }
    let delta = candidate - current;
    (-delta / temperature).exp() > rng.f64()
}
