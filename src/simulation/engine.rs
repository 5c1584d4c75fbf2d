use crate::cards::{hand_value, is_blackjack, is_valid_value, CardError, CardValue};
use crate::rng::SimRng;
use crate::rules::{ConfigError, PlayerPolicy, RulesConfig};
use crate::shoe::{Shoe, ShoeError};
use crate::simulation::policy::{play_dealer, play_player};
use crate::simulation::stats::TrialStats;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Card(#[from] CardError),
    #[error("shoe exhausted mid-trial: {0}")]
    Shoe(#[from] ShoeError),
}

/// Result of a Monte Carlo batch over one fixed deal.
#[derive(Debug, Clone, PartialEq)]
pub struct EvEstimate {
    /// Mean outcome per unit bet
    pub ev: f64,
    /// Standard error of the mean
    pub standard_error: f64,
    pub stats: TrialStats,
}

/// Play a single round to completion and return its payout.
///
/// The player receives `p1` and `p2`, the dealer the upcard plus a hole
/// card drawn from the shoe. A player natural resolves immediately: push
/// against a dealer natural, otherwise the configured blackjack payout.
/// Otherwise the player policy runs; if the player busts, the dealer
/// stands on the two cards already dealt and draws nothing further.
pub fn play_round(
    p1: CardValue,
    p2: CardValue,
    dealer_up: CardValue,
    rules: &RulesConfig,
    policy: PlayerPolicy,
    shoe: &mut Shoe,
) -> Result<f64, SimError> {
    let mut player = vec![p1, p2];
    let mut dealer = vec![dealer_up, shoe.draw()?];

    if is_blackjack(&player) {
        if is_blackjack(&dealer) {
            return Ok(0.0);
        }
        return Ok(rules.blackjack_payout.multiplier());
    }

    play_player(&mut player, dealer_up, policy, shoe)?;

    if hand_value(&player).total <= 21 {
        play_dealer(&mut dealer, rules, shoe)?;
    }

    Ok(resolve_outcome(&player, &dealer))
}

/// Compare final hands: player bust loses, then dealer bust wins, then
/// higher total wins, equal totals push.
fn resolve_outcome(player: &[CardValue], dealer: &[CardValue]) -> f64 {
    let player_total = hand_value(player).total;
    let dealer_total = hand_value(dealer).total;

    if player_total > 21 {
        return -1.0;
    }
    if dealer_total > 21 {
        return 1.0;
    }
    if player_total > dealer_total {
        1.0
    } else if player_total < dealer_total {
        -1.0
    } else {
        0.0
    }
}

/// Estimate the EV of a fixed deal over `n_trials` independent rounds.
///
/// One RNG drives the whole batch: with `seed` supplied the run is exactly
/// reproducible, otherwise the RNG is seeded from entropy. Every trial
/// builds its own freshly shuffled shoe. `n_trials == 0` yields an empty,
/// all-zero estimate.
pub fn simulate_ev(
    p1: CardValue,
    p2: CardValue,
    dealer_up: CardValue,
    n_trials: usize,
    rules: &RulesConfig,
    policy: PlayerPolicy,
    seed: Option<u64>,
) -> Result<EvEstimate, SimError> {
    rules.validate()?;
    for card in [p1, p2, dealer_up] {
        if !is_valid_value(card) {
            return Err(CardError::InvalidCard(card.to_string()).into());
        }
    }

    let mut rng = SimRng::new(seed);
    let mut outcomes = Vec::with_capacity(n_trials);
    for _ in 0..n_trials {
        let mut shoe = Shoe::new(rules.n_decks, &mut rng);
        outcomes.push(play_round(p1, p2, dealer_up, rules, policy, &mut shoe)?);
    }

    let stats = TrialStats::from_outcomes(outcomes);
    Ok(EvEstimate {
        ev: stats.ev(),
        standard_error: stats.standard_error(),
        stats,
    })
}
