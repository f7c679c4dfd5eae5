#[macro_use]
extern crate criterion;
extern crate fivecard;

use criterion::Criterion;
use fivecard::core::{Deck, PokerHand};
use rand::{SeedableRng, rngs::StdRng};

fn deal_one_hand(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("shuffle and deal one hand", |b| {
        b.iter(|| {
            let mut deck = Deck::new();
            deck.shuffle(&mut rng);
            PokerHand::new_from_deck(&mut deck).unwrap()
        });
    });
}

fn classify_one_hand(c: &mut Criterion) {
    let hand = PokerHand::new_from_str("AsAdAcKhKd").unwrap();
    c.bench_function("count matches for one hand", move |b| {
        b.iter(|| hand.number_matches())
    });
}

fn classify_straight(c: &mut Criterion) {
    let hand = PokerHand::new_from_str("6c3d5s2c4h").unwrap();
    c.bench_function("straight check for one hand", move |b| {
        b.iter(|| hand.is_straight())
    });
}

criterion_group!(benches, deal_one_hand, classify_one_hand, classify_straight);
criterion_main!(benches);
