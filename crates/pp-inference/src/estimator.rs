//! Non-parametric intensity estimation.

use pp_core::{PpError, PpResult, Realization};

use crate::kernel::RegKernel;

/// Average intensity per bin over independent realizations.
///
/// `edges` is a strictly increasing partition `e_0 < e_1 < … < e_m`.  Bin
/// `k` covers `[e_k, e_{k+1})` and its estimate is the mean event count in
/// that bin divided by its width (Leemis, 2001).
pub fn binned_intensity(realizations: &[Realization], edges: &[f64]) -> PpResult<Vec<f64>> {
    if realizations.is_empty() {
        return Err(PpError::InvalidRealization("no realizations to average".to_string()));
    }
    if edges.len() < 2 {
        return Err(PpError::Config(format!("need at least two bin edges, got {}", edges.len())));
    }
    if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[0] >= w[1]) {
        return Err(PpError::Config("bin edges must be finite and strictly increasing".to_string()));
    }

    let mut counts = vec![0usize; edges.len() - 1];
    for r in realizations {
        let times = r.times();
        for (k, w) in edges.windows(2).enumerate() {
            let lo = times.partition_point(|&t| t < w[0]);
            let hi = times.partition_point(|&t| t < w[1]);
            counts[k] += hi - lo;
        }
    }

    let n = realizations.len() as f64;
    Ok(counts
        .iter()
        .zip(edges.windows(2))
        .map(|(&c, w)| c as f64 / n / (w[1] - w[0]))
        .collect())
}

/// Kernel-weighted average of observed samples:
///
/// ```text
/// ŷ(x0) = Σ K_h(x0, x_i) y_i / Σ K_h(x0, x_i)
/// ```
///
/// Typical use smooths binned intensity estimates (`x_i` the bin centres,
/// `y_i` the estimates).
#[derive(Clone, Debug)]
pub struct NadarayaWatson<K: RegKernel> {
    kernel: K,
    x:      Vec<f64>,
    y:      Vec<f64>,
}

impl<K: RegKernel> NadarayaWatson<K> {
    /// `x` and `y` must be non-empty and of equal length.
    pub fn fit(kernel: K, x: &[f64], y: &[f64]) -> PpResult<Self> {
        if x.len() != y.len() {
            return Err(PpError::Config(format!(
                "sample length mismatch: {} abscissae, {} values",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(PpError::Config("no samples to fit".to_string()));
        }
        Ok(Self { kernel, x: x.to_vec(), y: y.to_vec() })
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Prediction at `x0`, or `None` if no sample carries weight there.
    pub fn predict(&self, x0: f64) -> Option<f64> {
        let (num, den) = self.x.iter().zip(&self.y).fold((0.0, 0.0), |(num, den), (&xi, &yi)| {
            let w = self.kernel.weight(x0, xi);
            (num + w * yi, den + w)
        });
        (den > 0.0).then(|| num / den)
    }

    /// [`predict`](Self::predict) at every point of `xs`.
    pub fn predict_many(&self, xs: &[f64]) -> Vec<Option<f64>> {
        xs.iter().map(|&x0| self.predict(x0)).collect()
    }
}
