use thiserror::Error;

use super::Card;

/// This is the core error type for the fivecard library.
/// It uses `thiserror` to provide readable error messages.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FiveCardError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("A poker hand must have exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("The deck has no cards left to deal")]
    EmptyDeck,
}
