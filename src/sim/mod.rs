//! This module estimates how often a hand category shows up
//! by repeated random dealing. Each trial builds a fresh 52
//! card deck, shuffles it with the caller's rng, deals one 5
//! card hand, and asks a caller-supplied predicate whether
//! the hand counts as a hit.
//!
//! The rng is injected everywhere, so a seeded rng makes a
//! whole run reproducible: same seed, same decks, same
//! report. That is the intended way to test anything built
//! on top of this module.

use rand::Rng;
use tracing::event;

use crate::core::{Deck, FiveCardError, PokerHand};

/// Outcome of a sampling run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleReport {
    /// How many hands were dealt in total.
    pub trials: u64,
    /// How many of them satisfied the predicate.
    pub hits: u64,
}

impl SampleReport {
    /// Empirical hit frequency, `hits / trials`.
    /// Zero trials gives 0.0 rather than NaN.
    pub fn frequency(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hits as f64 / self.trials as f64
        }
    }

    /// The frequency as a percentage, `100 * hits / trials`.
    pub fn percentage(&self) -> f64 {
        100.0 * self.frequency()
    }
}

/// Deal one fresh shuffled hand.
fn deal_one<R: Rng>(rng: &mut R) -> Result<PokerHand, FiveCardError> {
    let mut deck = Deck::new();
    deck.shuffle(rng);
    PokerHand::new_from_deck(&mut deck)
}

/// Keep dealing fresh hands until `target_hits` of them
/// satisfy the predicate.
///
/// A `target_hits` of zero returns immediately with an
/// empty report.
///
/// # Examples
///
/// ```
/// use fivecard::sim::sample_until_hits;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let report = sample_until_hits(&mut rng, 3, |hand| hand.is_pair()).unwrap();
///
/// assert_eq!(3, report.hits);
/// assert!(report.trials >= 3);
/// ```
pub fn sample_until_hits<R, F>(
    rng: &mut R,
    target_hits: u64,
    mut is_hit: F,
) -> Result<SampleReport, FiveCardError>
where
    R: Rng,
    F: FnMut(&PokerHand) -> bool,
{
    let mut trials: u64 = 0;
    let mut hits: u64 = 0;
    while hits < target_hits {
        let hand = deal_one(rng)?;
        trials += 1;
        if is_hit(&hand) {
            hits += 1;
            event!(
                tracing::Level::DEBUG,
                %hand,
                trials,
                hits,
                "Sampled a matching hand"
            );
        }
    }
    let report = SampleReport { trials, hits };
    event!(
        tracing::Level::INFO,
        trials = report.trials,
        hits = report.hits,
        percentage = report.percentage(),
        "Sampling run complete"
    );
    Ok(report)
}

/// Deal a fixed number of fresh hands and count how many
/// satisfy the predicate.
pub fn sample_trials<R, F>(
    rng: &mut R,
    trials: u64,
    mut is_hit: F,
) -> Result<SampleReport, FiveCardError>
where
    R: Rng,
    F: FnMut(&PokerHand) -> bool,
{
    let mut hits: u64 = 0;
    for _ in 0..trials {
        let hand = deal_one(rng)?;
        if is_hit(&hand) {
            hits += 1;
        }
    }
    let report = SampleReport { trials, hits };
    event!(
        tracing::Level::INFO,
        trials = report.trials,
        hits = report.hits,
        percentage = report.percentage(),
        "Sampling run complete"
    );
    Ok(report)
}
