use std::fmt;

use chinchon_engine::actions::{Action, ActionRule};
use chinchon_engine::errors::GameError;
use chinchon_engine::game::GameState;
use chinchon_engine::player::PlayerId;
use chinchon_engine::rules::filter_by_priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ranked {
    label: &'static str,
    priority: i32,
    allow_lower: bool,
}

fn ranked(label: &'static str, priority: i32) -> Ranked {
    Ranked {
        label,
        priority,
        allow_lower: false,
    }
}

fn ranked_alongside(label: &'static str, priority: i32) -> Ranked {
    Ranked {
        label,
        priority,
        allow_lower: true,
    }
}

impl fmt::Display for Ranked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {})", self.label, self.priority)
    }
}

impl ActionRule for Ranked {
    fn name(&self) -> &'static str {
        self.label
    }

    fn player_id(&self) -> PlayerId {
        0
    }

    fn is_possible(&self, _g: &GameState) -> bool {
        true
    }

    fn run(&self, _g: &mut GameState) -> Result<(), GameError> {
        Ok(())
    }

    fn yields_turn(&self, _g: &GameState) -> bool {
        false
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn allow_lower_priority(&self) -> bool {
        self.allow_lower
    }
}

fn labels(kept: &[Ranked]) -> Vec<&'static str> {
    kept.iter().map(|r| r.label).collect()
}

#[test]
fn same_priority_keeps_everything_in_order() {
    let candidates = vec![ranked("a", 0), ranked("b", 0), ranked("c", 0)];
    assert_eq!(filter_by_priority(candidates.clone()), candidates);
}

#[test]
fn higher_priority_replaces_kept_moves_and_drops_later_lower_ones() {
    let kept = filter_by_priority(vec![
        ranked("a", 0),
        ranked("b", 0),
        ranked("urgent", 1),
        ranked("c", 0),
    ]);
    assert_eq!(labels(&kept), ["urgent"]);
}

#[test]
fn higher_priority_allowing_lower_joins_the_kept_moves() {
    let kept = filter_by_priority(vec![
        ranked("a", 0),
        ranked("b", 0),
        ranked_alongside("bonus", 1),
        ranked("c", 0),
    ]);
    assert_eq!(labels(&kept), ["a", "b", "bonus", "c"]);
}

#[test]
fn moves_matching_a_raised_threshold_are_kept() {
    let kept = filter_by_priority(vec![
        ranked("a", 0),
        ranked("urgent", 1),
        ranked("also_urgent", 1),
        ranked("b", 0),
    ]);
    assert_eq!(labels(&kept), ["urgent", "also_urgent"]);
}

#[test]
fn threshold_only_rises() {
    let kept = filter_by_priority(vec![
        ranked("a", 0),
        ranked("mid", 1),
        ranked("top", 2),
        ranked("mid_again", 1),
        ranked_alongside("low_alongside", 1),
    ]);
    assert_eq!(labels(&kept), ["top"]);
}

#[test]
fn empty_input_stays_empty() {
    assert!(filter_by_priority(Vec::<Ranked>::new()).is_empty());
}

#[test]
fn engine_actions_pass_through_unchanged() {
    let candidates = vec![Action::draw_from_deck(0), Action::draw_from_discard(0)];
    assert_eq!(filter_by_priority(candidates.clone()), candidates);
}
