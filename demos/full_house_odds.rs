use clap::Parser;
use fivecard::core::Deck;
use fivecard::sim::sample_until_hits;
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "full_house_odds",
    about = "Estimate the odds of dealing a full house",
    long_about = "Deal fresh shuffled 5 card hands until enough full houses\n\
                  have shown up, then report the empirical probability."
)]
struct Args {
    /// Seed for the rng. Omit for a different run every time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop once this many full houses have been dealt
    #[arg(long, default_value_t = 10)]
    hits: u64,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // A quick tour of the deck itself.
    let mut deck = Deck::new();
    println!("Fresh deck: {}", deck);
    deck.shuffle(&mut rng);
    println!("Shuffled:   {}", deck);
    let card = deck.deal().expect("a fresh deck has cards");
    println!("Top card:   {}", card);
    println!();

    let report = sample_until_hits(&mut rng, args.hits, |hand| {
        let hit = hand.is_full_house();
        if hit {
            println!("{}", hand);
        }
        hit
    })
    .expect("dealing from fresh decks cannot fail");

    println!(
        "probability of a full house is {}% ({} of {} hands)",
        report.percentage(),
        report.hits,
        report.trials
    );
}
