//! This is the core module. It exports the card, deck, and
//! hand classification code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors for the whole crate.
mod error;
pub use self::error::FiveCardError;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 card hand classification code.
mod hand;
/// Export `PokerHand`
pub use self::hand::PokerHand;
