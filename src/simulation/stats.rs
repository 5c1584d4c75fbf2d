use serde::Serialize;

/// Aggregate statistics over one batch of independent trials.
///
/// Wins are strictly positive outcomes, pushes are zeros, losses are
/// strictly negative. Built once when the batch completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialStats {
    pub n: usize,
    pub wins: usize,
    pub pushes: usize,
    pub losses: usize,
    pub outcomes: Vec<f64>,
}

impl TrialStats {
    pub fn from_outcomes(outcomes: Vec<f64>) -> TrialStats {
        let wins = outcomes.iter().filter(|&&x| x > 0.0).count();
        let pushes = outcomes.iter().filter(|&&x| x == 0.0).count();
        let losses = outcomes.iter().filter(|&&x| x < 0.0).count();
        TrialStats {
            n: outcomes.len(),
            wins,
            pushes,
            losses,
            outcomes,
        }
    }

    /// Arithmetic mean of the outcomes; 0 for an empty batch.
    pub fn ev(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.outcomes.iter().sum::<f64>() / self.n as f64
    }

    /// Standard error of the mean, from the sample standard deviation
    /// (n - 1 denominator). 0 with fewer than two outcomes.
    pub fn standard_error(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let mean = self.ev();
        let variance = self
            .outcomes
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / (self.n - 1) as f64;
        variance.sqrt() / (self.n as f64).sqrt()
    }
}
