//! Unit and statistical tests for pp-inference.

use pp_core::{HawkesRealization, PpError, Realization};

use crate::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn params(baseline: f64, alpha: f64, decay: f64) -> HawkesParams {
    HawkesParams::new(baseline, alpha, decay).unwrap()
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

/// Small hand-written sequence with uneven gaps.
fn sample_times() -> Vec<f64> {
    vec![0.3, 0.35, 1.2, 2.0, 2.05, 2.1, 4.7, 6.3, 6.31, 9.0]
}

/// ℓ by direct O(n²) summation.
fn brute_force(times: &[f64], horizon: f64, p: HawkesParams) -> f64 {
    let observed: Vec<(f64, f64)> = times.iter().map(|&t| (t, p.alpha)).collect();
    let h = HawkesRealization::from_observed(horizon, &observed).unwrap();
    let log_sum: f64 = times.iter().map(|&t| h.intensity_at(p.baseline, p.decay, t).ln()).sum();
    let compensator = p.baseline * horizon
        + times
            .iter()
            .map(|&t| p.alpha / p.decay * (1.0 - (-p.decay * (horizon - t)).exp()))
            .sum::<f64>();
    log_sum - compensator
}

// ── HawkesLikelihood ──────────────────────────────────────────────────────────

#[cfg(test)]
mod hawkes {
    use super::*;

    #[test]
    fn empty_sequence_is_minus_baseline_times_horizon() {
        let lik = HawkesLikelihood::from_times(&[], 5.0).unwrap();
        assert!(lik.is_empty());
        assert_eq!(lik.log_likelihood(params(2.0, 0.5, 1.0)).unwrap(), -10.0);
        assert_eq!(lik.evaluate(params(2.0, 0.5, 1.0)).unwrap().value, -10.0);
    }

    #[test]
    fn recursion_matches_direct_sum() {
        let times = sample_times();
        let lik = HawkesLikelihood::from_times(&times, 10.0).unwrap();
        for p in [params(1.0, 0.5, 1.0), params(0.2, 1.5, 3.0), params(3.0, 0.0, 0.7)] {
            let expected = brute_force(&times, 10.0, p);
            let got = lik.log_likelihood(p).unwrap();
            assert!(close(got, expected, 1e-12), "{got} vs {expected}");
            let eval = lik.evaluate(p).unwrap();
            assert!(close(eval.value, expected, 1e-12), "{} vs {expected}", eval.value);
        }
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let lik = HawkesLikelihood::from_times(&sample_times(), 10.0).unwrap();
        let p = params(0.8, 0.6, 1.3);
        let grad = lik.gradient(p).unwrap();
        let h = 1e-6;
        let ll = |b: f64, a: f64, d: f64| lik.log_likelihood(params(b, a, d)).unwrap();
        let numeric = [
            (ll(p.baseline + h, p.alpha, p.decay) - ll(p.baseline - h, p.alpha, p.decay)) / (2.0 * h),
            (ll(p.baseline, p.alpha + h, p.decay) - ll(p.baseline, p.alpha - h, p.decay)) / (2.0 * h),
            (ll(p.baseline, p.alpha, p.decay + h) - ll(p.baseline, p.alpha, p.decay - h)) / (2.0 * h),
        ];
        for (g, n) in grad.iter().zip(numeric) {
            assert!(close(*g, n, 1e-5), "analytic {g}, numeric {n}");
        }
    }

    #[test]
    fn marked_matches_constant_when_marks_are_equal() {
        let observed: Vec<(f64, f64)> = sample_times().into_iter().map(|t| (t, 0.7)).collect();
        let h = HawkesRealization::from_observed(10.0, &observed).unwrap();
        let lik = HawkesLikelihood::new(&h).unwrap();
        let constant = lik.log_likelihood(params(1.1, 0.7, 2.0)).unwrap();
        let marked = lik.marked_log_likelihood(1.1, 2.0).unwrap();
        assert!(close(constant, marked, 1e-12));
    }

    #[test]
    fn marked_uses_each_event_mark() {
        let h = HawkesRealization::from_observed(3.0, &[(1.0, 2.0), (2.0, 0.0)]).unwrap();
        let lik = HawkesLikelihood::new(&h).unwrap();
        // λ(1⁻) = 1, λ(2⁻) = 1 + 2e⁻¹; Λ = 3 + 2(1 - e⁻²).
        let e = std::f64::consts::E;
        let expected = (1.0 + 2.0 / e).ln() - (3.0 + 2.0 * (1.0 - e.powi(-2)));
        assert!(close(lik.marked_log_likelihood(1.0, 1.0).unwrap(), expected, 1e-12));
    }

    #[test]
    fn unmarked_sequence_has_no_marked_likelihood() {
        let lik = HawkesLikelihood::from_times(&[1.0], 2.0).unwrap();
        assert!(matches!(lik.marked_log_likelihood(1.0, 1.0), Err(PpError::InvalidRealization(_))));
    }

    #[test]
    fn zero_intensity_at_an_event_is_impossible() {
        let lik = HawkesLikelihood::from_times(&[1.0, 2.0], 3.0).unwrap();
        assert_eq!(lik.log_likelihood(params(0.0, 0.5, 1.0)).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(HawkesParams::new(-1.0, 0.5, 1.0).is_err());
        assert!(HawkesParams::new(1.0, -0.5, 1.0).is_err());
        assert!(HawkesParams::new(1.0, 0.5, 0.0).is_err());
        assert!(HawkesParams::new(f64::NAN, 0.5, 1.0).is_err());

        let lik = HawkesLikelihood::from_times(&[1.0], 2.0).unwrap();
        let bad = HawkesParams { baseline: 1.0, alpha: 0.5, decay: -1.0 };
        assert!(lik.log_likelihood(bad).is_err());
        assert!(lik.evaluate(bad).is_err());
    }

    #[test]
    fn invalid_sequences_rejected() {
        assert!(HawkesLikelihood::from_times(&[2.0, 1.0], 5.0).is_err());
        assert!(HawkesLikelihood::from_times(&[1.0, 6.0], 5.0).is_err());
        assert!(HawkesLikelihood::from_times(&[], 0.0).is_err());

        let h = HawkesRealization::from_observed(10.0, &[(1.0, 0.5), (8.0, 0.5)]).unwrap();
        assert!(HawkesLikelihood::with_horizon(&h, 5.0).is_err());
        assert_eq!(HawkesLikelihood::with_horizon(&h, 20.0).unwrap().horizon(), 20.0);
    }

    #[test]
    fn agrees_with_sampled_intensities() {
        use pp_core::{Sampler, StreamRng};
        use pp_temporal::HawkesExp;

        let process = HawkesExp::constant(50.0, 0.6, 1.5, 0.8).unwrap();
        let r = process.sample(&mut StreamRng::new(3)).unwrap();
        assert!(!r.is_empty());

        let log_sum: f64 = r.events().iter().map(|e| e.intensity.ln()).sum();
        let compensator = 0.8 * 50.0
            + r.times().iter().map(|&t| 0.6 / 1.5 * (1.0 - (-1.5 * (50.0 - t)).exp())).sum::<f64>();
        let lik = HawkesLikelihood::new(&r).unwrap();
        let got = lik.log_likelihood(params(0.8, 0.6, 1.5)).unwrap();
        assert!(close(got, log_sum - compensator, 1e-9));
    }

    #[test]
    fn grid_search_recovers_parameters() {
        use pp_core::{Sampler, StreamRng};
        use pp_temporal::HawkesExp;

        let process = HawkesExp::constant(4_000.0, 0.4, 1.0, 1.0).unwrap();
        let r = process.sample(&mut StreamRng::new(2024)).unwrap();
        let lik = HawkesLikelihood::new(&r).unwrap();

        let truth = lik.log_likelihood(params(1.0, 0.4, 1.0)).unwrap();
        for far in [params(1.0, 0.05, 1.0), params(1.0, 0.9, 1.0), params(1.0, 0.4, 8.0)] {
            assert!(truth > lik.log_likelihood(far).unwrap());
        }

        let mut best = (f64::NEG_INFINITY, 0.0, 0.0);
        for alpha in [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7] {
            for decay in [0.25, 0.5, 1.0, 2.0, 4.0] {
                let ll = lik.log_likelihood(params(1.0, alpha, decay)).unwrap();
                if ll > best.0 {
                    best = (ll, alpha, decay);
                }
            }
        }
        let (_, alpha, decay) = best;
        assert!((0.5..=2.0).contains(&decay), "best decay {decay}");
        assert!((alpha / decay - 0.4).abs() <= 0.1, "best branching ratio {}", alpha / decay);
    }
}

// ── Poisson ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod poisson {
    use super::*;

    #[test]
    fn homogeneous_formula() {
        let r = Realization::new(10.0, vec![1.0, 4.0, 9.0]).unwrap();
        let ll = poisson_log_likelihood(&r, 0.3).unwrap();
        assert!(close(ll, 3.0 * 0.3f64.ln() - 3.0, 1e-12));
    }

    #[test]
    fn zero_rate() {
        let empty = Realization::empty(4.0);
        assert_eq!(poisson_log_likelihood(&empty, 0.0).unwrap(), 0.0);
        let r = Realization::new(4.0, vec![1.0]).unwrap();
        assert_eq!(poisson_log_likelihood(&r, 0.0).unwrap(), f64::NEG_INFINITY);
        assert!(poisson_log_likelihood(&r, -1.0).is_err());
    }

    #[test]
    fn mle_maximizes_likelihood() {
        let r = Realization::new(8.0, vec![0.5, 1.0, 3.0, 3.5, 7.0, 7.5]).unwrap();
        let mle = poisson_rate_mle(&r);
        assert!(close(mle, 0.75, 1e-12));
        let best = poisson_log_likelihood(&r, mle).unwrap();
        for rate in [0.5 * mle, 0.9 * mle, 1.1 * mle, 2.0 * mle] {
            assert!(best > poisson_log_likelihood(&r, rate).unwrap());
        }
    }

    #[test]
    fn inhomogeneous_reduces_to_homogeneous() {
        let r = Realization::new(10.0, vec![1.0, 4.0, 9.0]).unwrap();
        let ll = inhomogeneous_poisson_log_likelihood(&r, |_| 0.3, 3.0).unwrap();
        assert!(close(ll, poisson_log_likelihood(&r, 0.3).unwrap(), 1e-12));
    }

    #[test]
    fn inhomogeneous_rejects_bad_intensity() {
        let r = Realization::new(10.0, vec![1.0]).unwrap();
        let err = inhomogeneous_poisson_log_likelihood(&r, |_| f64::NAN, 1.0).unwrap_err();
        assert_eq!(err.kind(), pp_core::ErrorKind::NumericalInstability);
        assert!(inhomogeneous_poisson_log_likelihood(&r, |t| t, -1.0).is_err());
    }
}

// ── Kernels ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kernel {
    use super::*;

    #[test]
    fn gaussian_weights() {
        let k = GaussianKernel::new(2.0).unwrap();
        assert_eq!(k.weight(1.0, 1.0), 1.0);
        assert!(close(k.weight(0.0, 2.0), (-0.5f64).exp(), 1e-12));
        assert_eq!(k.weight(3.0, 5.0), k.weight(5.0, 3.0));
    }

    #[test]
    fn uniform_window_is_open() {
        let k = UniformKernel::new(1.0).unwrap();
        assert_eq!(k.weight(5.0, 5.9), 1.0);
        assert_eq!(k.weight(5.0, 6.0), 0.0);
        assert!(close(k.mass(0.5, 0.0, 10.0), 1.5, 1e-12));
        assert_eq!(k.mass(20.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn epanechnikov_is_translation_invariant() {
        let k = EpanechnikovKernel::new(1.0).unwrap();
        assert_eq!(k.weight(0.0, 0.0), 0.75);
        assert!(close(k.weight(10.0, 10.5), 0.5625, 1e-12));
        assert_eq!(k.weight(10.0, 11.5), 0.0);
    }

    #[test]
    fn bandwidth_must_be_positive() {
        assert!(GaussianKernel::new(0.0).is_err());
        assert!(UniformKernel::new(-1.0).is_err());
        assert!(EpanechnikovKernel::new(f64::INFINITY).is_err());
        assert_eq!(GaussianKernel::new(0.3).unwrap().bandwidth(), 0.3);
    }
}

// ── Estimators ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimator {
    use super::*;

    #[test]
    fn nadaraya_watson_reproduces_constants() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
        let y = vec![3.0; 20];
        let nw = NadarayaWatson::fit(GaussianKernel::new(0.7).unwrap(), &x, &y).unwrap();
        for x0 in [0.0, 2.3, 9.5, 15.0] {
            assert!(close(nw.predict(x0).unwrap(), 3.0, 1e-12));
        }
    }

    #[test]
    fn nadaraya_watson_symmetric_linear_fit() {
        // Symmetric design around x0 = 5: a linear trend averages to y(5).
        let x: Vec<f64> = (0..=10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&v| 2.0 * v + 1.0).collect();
        let nw = NadarayaWatson::fit(EpanechnikovKernel::new(3.0).unwrap(), &x, &y).unwrap();
        assert!(close(nw.predict(5.0).unwrap(), 11.0, 1e-12));
    }

    #[test]
    fn nadaraya_watson_without_weight_is_none() {
        let nw = NadarayaWatson::fit(UniformKernel::new(0.5).unwrap(), &[0.0, 1.0], &[1.0, 2.0])
            .unwrap();
        assert_eq!(nw.predict(0.2), Some(1.0));
        assert_eq!(nw.predict_many(&[10.0, 1.1]), vec![None, Some(2.0)]);
    }

    #[test]
    fn nadaraya_watson_rejects_bad_samples() {
        let k = GaussianKernel::new(1.0).unwrap();
        assert!(NadarayaWatson::fit(k, &[1.0, 2.0], &[1.0]).is_err());
        assert!(NadarayaWatson::fit(k, &[], &[]).is_err());
    }

    #[test]
    fn binned_counts_by_hand() {
        let a = Realization::new(4.0, vec![0.5, 1.5, 2.5]).unwrap();
        let b = Realization::new(4.0, vec![0.2, 3.9]).unwrap();
        let est = binned_intensity(&[a, b], &[0.0, 2.0, 4.0]).unwrap();
        assert_eq!(est, vec![0.75, 0.5]);
    }

    #[test]
    fn binned_rejects_bad_partitions() {
        let a = Realization::new(4.0, vec![1.0]).unwrap();
        assert!(binned_intensity(&[], &[0.0, 1.0]).is_err());
        assert!(binned_intensity(std::slice::from_ref(&a), &[0.0]).is_err());
        assert!(binned_intensity(std::slice::from_ref(&a), &[0.0, 2.0, 2.0]).is_err());
    }

    #[test]
    fn binned_estimate_tracks_intensity() {
        use pp_core::{Sampler, StreamRng};
        use pp_temporal::VariablePoisson;

        // λ(t) = 2 + t on [0, 4): the bin means are 2.5, 3.5, 4.5, 5.5.
        let process = VariablePoisson::new(4.0, |t| 2.0 + t, 6.0).unwrap();
        let runs: Vec<Realization> = (0..2_000)
            .map(|i| process.sample(&mut StreamRng::substream(8, i)).unwrap())
            .collect();
        let est = binned_intensity(&runs, &[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        for (got, want) in est.iter().zip([2.5, 3.5, 4.5, 5.5]) {
            assert!((got - want).abs() < 0.25, "estimate {got}, expected {want}");
        }
    }
}
