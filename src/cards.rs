use thiserror::Error;

/// Blackjack value of a single card.
///
/// Aces are represented as 11 and may be downgraded to 1 during hand
/// evaluation; T, J, Q and K all collapse to 10. Valid values are
/// 2..=9, 10 and 11.
pub type CardValue = u8;

/// Value of an Ace before any downgrade.
pub const ACE: CardValue = 11;
/// Value of any ten-counting card (T, J, Q, K).
pub const TEN: CardValue = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid card: '{0}'")]
    InvalidCard(String),
}

/// Parse a rank symbol to its blackjack value.
/// Accepts '2'..'9', 'T', 'J', 'Q', 'K', 'A' (any case) or the numeric
/// rank "10". Whitespace around the symbol is ignored.
pub fn parse_card(symbol: &str) -> Result<CardValue, CardError> {
    let normalized = symbol.trim().to_ascii_uppercase();
    match normalized.as_str() {
        "2" => Ok(2),
        "3" => Ok(3),
        "4" => Ok(4),
        "5" => Ok(5),
        "6" => Ok(6),
        "7" => Ok(7),
        "8" => Ok(8),
        "9" => Ok(9),
        "T" | "J" | "Q" | "K" | "10" => Ok(TEN),
        "A" => Ok(ACE),
        _ => Err(CardError::InvalidCard(symbol.trim().to_string())),
    }
}

/// Display symbol for a card value (the reverse of parse_card, with all
/// ten-counting cards rendered as 'T').
pub fn card_symbol(value: CardValue) -> String {
    match value {
        ACE => "A".to_string(),
        TEN => "T".to_string(),
        v => v.to_string(),
    }
}

/// Whether a raw value is in the recognized set.
pub fn is_valid_value(value: CardValue) -> bool {
    (2..=ACE).contains(&value)
}

/// Best total of a hand and whether it is soft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    pub total: u32,
    pub soft: bool,
}

/// Compute the best blackjack total for a hand.
///
/// All cards are summed with Aces at 11; while the total busts and an Ace
/// still counts 11, one Ace is downgraded to 1 (subtract 10). The hand is
/// soft iff an Ace still counts 11 after the downgrades.
pub fn hand_value(cards: &[CardValue]) -> HandValue {
    let mut total: u32 = cards.iter().map(|&c| u32::from(c)).sum();
    let mut aces_as_eleven = cards.iter().filter(|&&c| c == ACE).count();

    while total > 21 && aces_as_eleven > 0 {
        total -= 10;
        aces_as_eleven -= 1;
    }

    HandValue {
        total,
        soft: aces_as_eleven > 0,
    }
}

/// True iff a hand is a natural blackjack: exactly two cards totaling 21,
/// one Ace and one ten-counting card. Only meaningful for the initial
/// two-card deal.
pub fn is_blackjack(cards: &[CardValue]) -> bool {
    cards.len() == 2
        && hand_value(cards).total == 21
        && cards.contains(&ACE)
        && cards.contains(&TEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_rank_symbols() {
        let expected = [
            ("2", 2),
            ("3", 3),
            ("4", 4),
            ("5", 5),
            ("6", 6),
            ("7", 7),
            ("8", 8),
            ("9", 9),
            ("T", 10),
            ("J", 10),
            ("Q", 10),
            ("K", 10),
            ("A", 11),
        ];
        for (symbol, value) in expected {
            assert_eq!(parse_card(symbol), Ok(value), "symbol {}", symbol);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_card("a"), Ok(11));
        assert_eq!(parse_card("t"), Ok(10));
        assert_eq!(parse_card("k"), Ok(10));
    }

    #[test]
    fn test_parse_numeric_ten_and_whitespace() {
        assert_eq!(parse_card("10"), Ok(10));
        assert_eq!(parse_card(" A "), Ok(11));
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        for bad in ["1", "11", "0", "X", "ace", "", "22"] {
            assert!(
                matches!(parse_card(bad), Err(CardError::InvalidCard(_))),
                "symbol {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_card_symbol_round_trips() {
        for value in [2, 3, 4, 5, 6, 7, 8, 9, 10, 11] {
            assert_eq!(parse_card(&card_symbol(value)), Ok(value));
        }
    }

    #[test]
    fn test_hand_value_hard_hands() {
        assert_eq!(
            hand_value(&[10, 7]),
            HandValue {
                total: 17,
                soft: false
            }
        );
        assert_eq!(
            hand_value(&[11, 6, 10]),
            HandValue {
                total: 17,
                soft: false
            }
        );
    }

    #[test]
    fn test_hand_value_soft_hands() {
        assert_eq!(
            hand_value(&[11, 6]),
            HandValue {
                total: 17,
                soft: true
            }
        );
        assert_eq!(
            hand_value(&[11, 11]),
            HandValue {
                total: 12,
                soft: true
            }
        );
    }

    #[test]
    fn test_hand_value_multi_ace_downgrades() {
        // One Ace stays at 11 even after another is downgraded
        assert_eq!(
            hand_value(&[11, 11, 9]),
            HandValue {
                total: 21,
                soft: true
            }
        );
        // All Aces forced down to 1
        assert_eq!(
            hand_value(&[11, 11, 9, 9]),
            HandValue {
                total: 20,
                soft: false
            }
        );
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&[11, 10]));
        assert!(is_blackjack(&[10, 11]));
        assert!(!is_blackjack(&[11, 9]));
        assert!(!is_blackjack(&[7, 7, 7]));
        assert!(!is_blackjack(&[10, 10]));
    }
}
