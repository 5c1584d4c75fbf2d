use crate::cards::{hand_value, CardValue};
use crate::rules::{PlayerPolicy, RulesConfig};
use crate::shoe::{Shoe, ShoeError};

/// Play out the player's hand in place.
///
/// Baseline strategy: stand on hard 17 or better, hit everything below,
/// hit soft 17. A bust ends the loop. The dealer upcard is part of the
/// interface but the baseline strategy does not consult it.
pub fn play_player(
    hand: &mut Vec<CardValue>,
    _dealer_up: CardValue,
    policy: PlayerPolicy,
    shoe: &mut Shoe,
) -> Result<(), ShoeError> {
    match policy {
        PlayerPolicy::Baseline => loop {
            let value = hand_value(hand);
            if value.total > 21 {
                return Ok(());
            }
            if value.total > 17 {
                return Ok(());
            }
            if value.total == 17 && !value.soft {
                return Ok(());
            }
            hand.push(shoe.draw()?);
        },
    }
}

/// Play out the dealer's hand in place.
///
/// Stand above 17. On exactly 17, hit only a soft 17 under H17 rules.
/// Below 17, always hit. A bust ends the loop.
pub fn play_dealer(
    hand: &mut Vec<CardValue>,
    rules: &RulesConfig,
    shoe: &mut Shoe,
) -> Result<(), ShoeError> {
    loop {
        let value = hand_value(hand);
        if value.total > 21 {
            return Ok(());
        }
        if value.total > 17 {
            return Ok(());
        }
        if value.total == 17 {
            if rules.dealer_hits_soft_17 && value.soft {
                hand.push(shoe.draw()?);
                continue;
            }
            return Ok(());
        }
        hand.push(shoe.draw()?);
    }
}
