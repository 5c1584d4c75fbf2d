use crate::cards::{CardValue, ACE, TEN};
use crate::rng::SimRng;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShoeError {
    #[error("attempted to draw from an empty shoe")]
    Empty,
}

/// The combined, shuffled draw pile for a single trial.
///
/// Per deck: four of each rank 2-9, sixteen ten-counting cards and four
/// Aces. Built fresh for every trial and discarded at trial end.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<CardValue>,
}

impl Shoe {
    /// Build a shoe of `n_decks` decks in uniformly random order.
    pub fn new(n_decks: u32, rng: &mut SimRng) -> Shoe {
        let mut cards = Vec::with_capacity(n_decks as usize * 52);
        for _ in 0..n_decks {
            for rank in 2..=9 {
                for _ in 0..4 {
                    cards.push(rank);
                }
            }
            for _ in 0..16 {
                cards.push(TEN);
            }
            for _ in 0..4 {
                cards.push(ACE);
            }
        }
        rng.shuffle(&mut cards);
        Shoe { cards }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<CardValue, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shoe with a fixed card order for tests. Cards are drawn from the
    /// end of the vec, so the last element is dealt first.
    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<CardValue>) -> Shoe {
        Shoe { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_value(shoe_cards: &[CardValue], value: CardValue) -> usize {
        shoe_cards.iter().filter(|&&c| c == value).count()
    }

    #[test]
    fn test_shoe_composition() {
        for n_decks in [1u32, 2, 6, 8] {
            let mut rng = SimRng::new(Some(1));
            let shoe = Shoe::new(n_decks, &mut rng);
            assert_eq!(shoe.len(), 52 * n_decks as usize);

            for rank in 2..=9 {
                assert_eq!(
                    count_value(&shoe.cards, rank),
                    4 * n_decks as usize,
                    "rank {} in {} deck(s)",
                    rank,
                    n_decks
                );
            }
            assert_eq!(count_value(&shoe.cards, TEN), 16 * n_decks as usize);
            assert_eq!(count_value(&shoe.cards, ACE), 4 * n_decks as usize);
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut rng1 = SimRng::new(Some(42));
        let mut rng2 = SimRng::new(Some(42));
        let shoe1 = Shoe::new(6, &mut rng1);
        let shoe2 = Shoe::new(6, &mut rng2);
        assert_eq!(shoe1.cards, shoe2.cards);
    }

    #[test]
    fn test_draw_consumes_cards() {
        let mut rng = SimRng::new(Some(3));
        let mut shoe = Shoe::new(1, &mut rng);

        let card = shoe.draw().expect("one-deck shoe should not be empty");
        assert!((2..=11).contains(&card));
        assert_eq!(shoe.len(), 51);
    }

    #[test]
    fn test_draw_from_empty_shoe_fails() {
        let mut shoe = Shoe::from_cards(Vec::new());
        assert_eq!(shoe.draw(), Err(ShoeError::Empty));
        // Still empty, still an error on retry
        assert_eq!(shoe.draw(), Err(ShoeError::Empty));
    }

    #[test]
    fn test_zero_deck_shoe_is_empty() {
        let mut rng = SimRng::new(Some(9));
        let mut shoe = Shoe::new(0, &mut rng);
        assert!(shoe.is_empty());
        assert_eq!(shoe.draw(), Err(ShoeError::Empty));
    }

    #[test]
    fn test_exhausting_a_shoe() {
        let mut rng = SimRng::new(Some(11));
        let mut shoe = Shoe::new(1, &mut rng);
        for _ in 0..52 {
            shoe.draw().expect("shoe should hold 52 cards");
        }
        assert_eq!(shoe.draw(), Err(ShoeError::Empty));
    }
}
