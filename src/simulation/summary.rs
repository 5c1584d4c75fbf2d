use crate::cards::CardValue;
use crate::rules::RulesConfig;
use crate::simulation::engine::EvEstimate;
use crate::simulation::presets::HandPreset;
use crate::simulation::stats::TrialStats;
use serde::Serialize;

/// Presentation-ready rates for one batch of outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub ev: f64,
    pub p_win: f64,
    pub p_push: f64,
    pub p_lose: f64,
    pub se: f64,
}

impl Summary {
    pub fn empty() -> Summary {
        Summary {
            n: 0,
            ev: 0.0,
            p_win: 0.0,
            p_push: 0.0,
            p_lose: 0.0,
            se: 0.0,
        }
    }

    pub fn from_stats(stats: &TrialStats) -> Summary {
        if stats.n == 0 {
            return Summary::empty();
        }
        let n = stats.n as f64;
        Summary {
            n: stats.n,
            ev: stats.ev(),
            p_win: stats.wins as f64 / n,
            p_push: stats.pushes as f64 / n,
            p_lose: stats.losses as f64 / n,
            se: stats.standard_error(),
        }
    }
}

/// Summarize a raw outcome sequence (mean, win/push/loss rates, standard
/// error). An empty slice yields the all-zero summary.
pub fn summarize_outcomes(outcomes: &[f64]) -> Summary {
    Summary::from_stats(&TrialStats::from_outcomes(outcomes.to_vec()))
}

/// Result row for one preset hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetResult {
    pub p1: CardValue,
    pub p2: CardValue,
    pub dealer_up: CardValue,
    pub summary: Summary,
}

impl PresetResult {
    pub fn new(preset: HandPreset, estimate: &EvEstimate) -> PresetResult {
        PresetResult {
            p1: preset.p1,
            p2: preset.p2,
            dealer_up: preset.dealer_up,
            summary: Summary::from_stats(&estimate.stats),
        }
    }
}

/// Keep only the rows played against a given dealer upcard value.
pub fn filter_by_dealer(results: &[PresetResult], dealer_up: CardValue) -> Vec<PresetResult> {
    results
        .iter()
        .filter(|r| r.dealer_up == dealer_up)
        .copied()
        .collect()
}

/// On-disk shape of a saved result table.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsFile {
    pub generated_at: String,
    pub trials_per_hand: usize,
    pub rules: RulesConfig,
    pub results: Vec<PresetResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty_outcomes() {
        assert_eq!(summarize_outcomes(&[]), Summary::empty());
    }

    #[test]
    fn test_summarize_outcomes_rates() {
        let summary = summarize_outcomes(&[1.0, 1.5, 0.0, -1.0]);
        assert_eq!(summary.n, 4);
        assert_eq!(summary.ev, 0.375);
        assert_eq!(summary.p_win, 0.5);
        assert_eq!(summary.p_push, 0.25);
        assert_eq!(summary.p_lose, 0.25);
        assert!(summary.se > 0.0);
    }

    #[test]
    fn test_rates_sum_to_one() {
        let summary = summarize_outcomes(&[1.0, -1.0, 0.0, -1.0, 1.2, 0.0, 1.0]);
        assert!((summary.p_win + summary.p_push + summary.p_lose - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_filter_by_dealer() {
        let row = |dealer_up: CardValue| PresetResult {
            p1: 10,
            p2: 6,
            dealer_up,
            summary: Summary::empty(),
        };
        let results = vec![row(6), row(9), row(6), row(11)];

        let against_six = filter_by_dealer(&results, 6);
        assert_eq!(against_six.len(), 2);
        assert!(against_six.iter().all(|r| r.dealer_up == 6));

        assert!(filter_by_dealer(&results, 2).is_empty());
    }
}
