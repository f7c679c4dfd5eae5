use crate::core::card::{Card, Suit, Value};
use crate::core::error::FiveCardError;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered deck of the 52 distinct cards. Cards leave
/// the deck one at a time via [`Deck::deal`]; nothing ever
/// goes back in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Deck {
    /// Card storage, in deal order. The front of the vec
    /// is the next card out.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the default 52 card deck. Construction order
    /// is deterministic: each suit in declared order, each
    /// value ascending within the suit.
    ///
    /// ```
    /// use fivecard::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(52);
        for s in &Suit::suits() {
            for v in &Value::values() {
                cards.push(Card::new(*v, *s));
            }
        }
        Self { cards }
    }

    /// How many cards are left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the remaining cards in place using
    /// the supplied rng. Passing a seeded rng makes every
    /// downstream deal reproducible.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Remove and return the top card of the deck. The
    /// relative order of the remaining cards is preserved.
    ///
    /// # Errors
    ///
    /// [`FiveCardError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, FiveCardError> {
        if self.cards.is_empty() {
            Err(FiveCardError::EmptyDeck)
        } else {
            Ok(self.cards.remove(0))
        }
    }

    /// Get an iterator over the remaining cards, in deal
    /// order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn suit_value_pairs(d: &Deck) -> Vec<(u8, u8)> {
        d.iter().map(|c| (c.suit as u8, c.value as u8)).collect()
    }

    #[test]
    fn test_new_deck_has_every_card_once() {
        let d = Deck::new();
        assert_eq!(52, d.len());

        let distinct: HashSet<(u8, u8)> = suit_value_pairs(&d).into_iter().collect();
        assert_eq!(52, distinct.len());
    }

    #[test]
    fn test_new_deck_order_is_deterministic() {
        assert_eq!(suit_value_pairs(&Deck::new()), suit_value_pairs(&Deck::new()));
        // First card out of a fresh deck is the lowest value
        // of the first declared suit.
        let mut d = Deck::new();
        let c = d.deal().unwrap();
        assert_eq!(Value::Two, c.value);
        assert_eq!(Suit::Club, c.suit);
    }

    #[test]
    fn test_shuffle_keeps_all_cards() {
        let mut d = Deck::new();
        let before: HashSet<(u8, u8)> = suit_value_pairs(&d).into_iter().collect();

        let mut rng = StdRng::seed_from_u64(7);
        d.shuffle(&mut rng);

        let after: HashSet<(u8, u8)> = suit_value_pairs(&d).into_iter().collect();
        assert_eq!(52, d.len());
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let mut d_one = Deck::new();
        let mut d_two = Deck::new();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        d_one.shuffle(&mut rng_one);
        d_two.shuffle(&mut rng_two);

        assert_eq!(suit_value_pairs(&d_one), suit_value_pairs(&d_two));
    }

    #[test]
    fn test_deal_is_fifo() {
        let mut d = Deck::new();
        let front: Vec<(u8, u8)> = suit_value_pairs(&d);
        let first = d.deal().unwrap();
        assert_eq!(front[0], (first.suit as u8, first.value as u8));
        // Rest of the deck keeps its relative order.
        assert_eq!(&front[1..], &suit_value_pairs(&d)[..]);
    }

    #[test]
    fn test_deal_all_then_empty() {
        let mut d = Deck::new();
        let mut seen: HashSet<(u8, u8)> = HashSet::new();
        for _ in 0..52 {
            let c = d.deal().unwrap();
            assert!(seen.insert((c.suit as u8, c.value as u8)));
        }
        assert!(d.is_empty());
        assert_eq!(Err(FiveCardError::EmptyDeck), d.deal());
    }

    #[test]
    fn test_display_shows_remaining() {
        let mut d = Deck::new();
        let rendered = d.to_string();
        assert!(rendered.starts_with("2♣ 3♣"));
        assert!(rendered.ends_with("A♠"));

        for _ in 0..51 {
            d.deal().unwrap();
        }
        assert_eq!("A♠", d.to_string());
    }
}
