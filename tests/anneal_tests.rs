use fastrand::Rng;
use gptable::optimizer::{accept, CoolingSchedule};
use proptest::prelude::*;

#[test]
fn test_default_schedule_endpoints() {
    let schedule = CoolingSchedule::new(1.0, 0.01, 10_000).unwrap();
    assert_eq!(schedule.temperature(0), 1.0);
    assert!((schedule.temperature(5_000) - 0.1).abs() < 1e-9);
    assert!((schedule.temperature(10_000) - 0.01).abs() < 1e-9);
}

#[test]
fn test_equal_energy_is_always_accepted() {
    // exp(0) = 1 beats every draw in [0, 1)
    let mut rng = Rng::with_seed(5);
    for _ in 0..1000 {
        assert!(accept(&mut rng, 10.0, 10.0, 0.01));
    }
}

#[test]
fn test_large_uphill_moves_are_rejected_when_cold() {
    let mut rng = Rng::with_seed(5);
    let accepted = (0..1000)
        .filter(|_| accept(&mut rng, 0.0, 50.0, 0.01))
        .count();
    assert_eq!(accepted, 0);
}

#[test]
fn test_acceptance_rate_tracks_boltzmann_factor() {
    let mut rng = Rng::with_seed(17);
    let trials = 20_000;
    let accepted = (0..trials)
        .filter(|_| accept(&mut rng, 1.0, 2.0, 1.0))
        .count();
    let rate = accepted as f64 / trials as f64;
    let expected = (-1.0f64).exp();
    assert!((rate - expected).abs() < 0.02, "rate {} vs {}", rate, expected);
}

proptest! {
    #[test]
    fn test_temperature_monotonic_and_bounded(
        t_final in 0.001f64..1.0,
        scale in 1.0f64..1000.0,
        steps in 1usize..100_000,
        a in 0usize..100_000,
        b in 0usize..100_000
    ) {
        let t_init = t_final * scale;
        let schedule = CoolingSchedule::new(t_init, t_final, steps).unwrap();
        let (lo, hi) = (a.min(b).min(steps), a.max(b).min(steps));

        prop_assert!(schedule.temperature(lo) >= schedule.temperature(hi));
        prop_assert!(schedule.temperature(hi) > 0.0);
        prop_assert_eq!(schedule.temperature(0), t_init);
        prop_assert!((schedule.temperature(steps) - t_final).abs() <= 1e-9 * t_init);
    }

    #[test]
    fn test_improvements_always_accepted(
        seed in any::<u64>(),
        current in 0.0f64..100.0,
        gain in 0.001f64..50.0,
        temperature in 0.0001f64..10.0
    ) {
        let mut rng = Rng::with_seed(seed);
        prop_assert!(accept(&mut rng, current, current - gain, temperature));
    }
}
