use crate::core::card::{Card, Suit, Value};
use crate::core::deck::Deck;
use crate::core::error::FiveCardError;
use std::fmt;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A dealt 5 card poker hand with category classification.
///
/// Classification rests on one discriminant: the number of
/// ordered pairs of cards with equal value. That count maps
/// one-to-one onto every value-based category:
///
/// | matches | category        |
/// |---------|-----------------|
/// | 0       | no pair         |
/// | 2       | one pair        |
/// | 4       | two pair        |
/// | 6       | three of a kind |
/// | 8       | full house      |
/// | 12      | four of a kind  |
///
/// No other count is reachable with 5 cards. All predicates
/// take `&self` and never reorder the stored cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct PokerHand {
    /// The five cards, in the order they were dealt.
    cards: [Card; HAND_SIZE],
}

impl PokerHand {
    /// Deal a new hand off the top of a deck. The deck is
    /// five cards shorter afterwards and the hand keeps no
    /// link back to it.
    ///
    /// # Errors
    ///
    /// [`FiveCardError::EmptyDeck`] if the deck runs out
    /// mid-deal. No partial hand is ever produced.
    ///
    /// ```
    /// use fivecard::core::{Deck, PokerHand};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(&mut StdRng::seed_from_u64(42));
    /// let hand = PokerHand::new_from_deck(&mut deck).unwrap();
    ///
    /// assert_eq!(5, hand.cards().len());
    /// assert_eq!(47, deck.len());
    /// ```
    pub fn new_from_deck(deck: &mut Deck) -> Result<Self, FiveCardError> {
        let cards = [
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
        ];
        Ok(Self { cards })
    }

    /// Parse a hand from a string of exactly five cards,
    /// e.g. `"AsAdAcKhKd"`. Mostly useful for tests and
    /// tools that need a known hand.
    pub fn new_from_str(hand_string: &str) -> Result<Self, FiveCardError> {
        let mut chars = hand_string.chars();
        let mut cards: Vec<Card> = Vec::with_capacity(HAND_SIZE);

        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(FiveCardError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .and_then(Suit::from_char)
                .ok_or(FiveCardError::UnexpectedSuitChar)?;
            let c = Card::new(v, s);
            // Equality on Card ignores suit, so check the
            // full (value, suit) pair here.
            if cards.iter().any(|o| o.value == c.value && o.suit == c.suit) {
                return Err(FiveCardError::DuplicateCardInHand(c));
            }
            cards.push(c);
        }

        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|v: Vec<Card>| FiveCardError::InvalidHandSize(v.len()))?;
        Ok(Self { cards })
    }

    /// The five cards in dealt order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Count the ordered pairs (i, j), i != j, whose cards
    /// have equal value. A brute force double loop over 5
    /// cards is plenty fast at this scale.
    pub fn number_matches(&self) -> u32 {
        let mut matches = 0;
        for (i, a) in self.cards.iter().enumerate() {
            for (j, b) in self.cards.iter().enumerate() {
                if i != j && a.value == b.value {
                    matches += 1;
                }
            }
        }
        matches
    }

    /// Exactly one pair.
    pub fn is_pair(&self) -> bool {
        self.number_matches() == 2
    }

    /// Exactly two distinct pairs.
    pub fn is_two_pair(&self) -> bool {
        self.number_matches() == 4
    }

    /// Three of a kind.
    pub fn is_trips(&self) -> bool {
        self.number_matches() == 6
    }

    /// One triple and one pair.
    pub fn is_full_house(&self) -> bool {
        self.number_matches() == 8
    }

    /// Four of a kind.
    pub fn is_quads(&self) -> bool {
        self.number_matches() == 12
    }

    /// All five cards share one suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards[1..].iter().all(|c| c.suit == suit)
    }

    /// Five strictly consecutive values with no repeats.
    /// Aces only rank high here, so A-2-3-4-5 is not a
    /// straight while 10-J-Q-K-A is.
    pub fn is_straight(&self) -> bool {
        // Sort a copy so the observable hand order never
        // changes under a query.
        let mut sorted = self.cards;
        sorted.sort();
        let distance = sorted[HAND_SIZE - 1].value as u8 - sorted[0].value as u8;
        self.number_matches() == 0 && distance == 4
    }
}

impl fmt::Display for PokerHand {
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
