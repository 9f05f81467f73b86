criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        counting_move_frequency,
        building_transition_table,
        deciding_engine_move,
        playing_session_rounds,
}

const HISTORY: usize = 1024;

fn history() -> Vec<Move> {
    let ref mut dice = Uniform::seeded(0);
    (0..HISTORY).map(|_| dice.roll()).collect()
}

fn counting_move_frequency(c: &mut criterion::Criterion) {
    let history = history();
    c.bench_function("count frequencies over 1024 moves", |b| {
        b.iter(|| frequency(&history))
    });
}

fn building_transition_table(c: &mut criterion::Criterion) {
    let history = history();
    c.bench_function("build an order-9 table over 1024 moves", |b| {
        b.iter(|| Transitions::build(&history, DEFAULT_ORDER))
    });
}

fn deciding_engine_move(c: &mut criterion::Criterion) {
    let history = history();
    let mut selector = Selector::new(DEFAULT_ORDER, Uniform::seeded(1)).expect("valid order");
    c.bench_function("decide a reply to 1024 moves", |b| {
        b.iter(|| selector.decide(&history))
    });
}

fn playing_session_rounds(c: &mut criterion::Criterion) {
    c.bench_function("play 256 rounds from scratch", |b| {
        b.iter(|| {
            let ref mut player = Uniform::seeded(2);
            let ref mut selector = Selector::new(INTERACTIVE_ORDER, Uniform::seeded(3)).expect("valid order");
            let ref mut session = Session::new();
            for _ in 0..256 {
                session.play(player.roll(), selector);
            }
            session.stats()
        })
    });
}

use roshambo::DEFAULT_ORDER;
use roshambo::INTERACTIVE_ORDER;
use roshambo::predict::Dice;
use roshambo::predict::Selector;
use roshambo::predict::Transitions;
use roshambo::predict::Uniform;
use roshambo::predict::frequency;
use roshambo::rps::Move;
use roshambo::session::Session;
