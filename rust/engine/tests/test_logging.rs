use chinchon_engine::actions::Action;
use chinchon_engine::cards::{Card, Suit};
use chinchon_engine::config::GameOptions;
use chinchon_engine::game::GameState;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

impl Captured {
    fn messages(&self) -> Vec<(Level, String)> {
        self.0.lock().unwrap().clone()
    }

    fn contains(&self, level: Level, text: &str) -> bool {
        self.messages()
            .iter()
            .any(|(l, m)| *l == level && m == text)
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = value.to_string();
        }
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

fn capture<F: FnOnce()>(f: F) -> Captured {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());
    tracing::subscriber::with_default(subscriber, f);
    captured
}

#[test]
fn match_start_is_logged_at_info() {
    let logs = capture(|| {
        GameState::new(GameOptions::default().with_seed(1));
    });
    assert!(logs.contains(Level::INFO, "creating new match"));
    assert!(logs.contains(Level::INFO, "round started"));
}

#[test]
fn applied_and_rejected_actions_are_logged_at_debug() {
    let logs = capture(|| {
        let mut g = GameState::new(GameOptions::default().with_seed(1));
        assert!(g.run_action(Action::draw_from_deck(1)).is_err());
        g.run_action(Action::draw_from_deck(0)).unwrap();
        assert!(g.run_action(Action::draw_from_deck(0)).is_err());
    });
    assert!(logs.contains(Level::DEBUG, "rejected action: not your turn"));
    assert!(logs.contains(Level::DEBUG, "action applied"));
    assert!(logs.contains(Level::DEBUG, "rejected action: not possible"));
}

#[test]
fn round_close_is_logged() {
    let logs = capture(|| {
        let mut g = GameState::new(GameOptions::default().with_seed(1));
        let run: Vec<Card> = (1..=4).map(|n| Card::new(Suit::Coins, n)).collect();
        let sevens = [Suit::Cups, Suit::Swords, Suit::Clubs].map(|s| Card::new(s, 7));
        g.with_hand(0, &[run, sevens.to_vec()].concat()).unwrap();
        g.run_action(Action::draw_from_deck(0)).unwrap();
        let drawn = *g.players()[0].hand().cards().last().unwrap();
        g.run_action(Action::close_round(0, drawn)).unwrap();
    });
    assert!(logs.contains(Level::INFO, "round closed"));
}
