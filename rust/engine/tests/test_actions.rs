use chinchon_engine::actions::{Action, ActionRule};
use chinchon_engine::cards::{full_deck, Card, Suit};
use chinchon_engine::config::GameOptions;
use chinchon_engine::errors::GameError;
use chinchon_engine::game::GameState;

fn new_game(seed: u64) -> GameState {
    GameState::new(GameOptions::default().with_seed(seed))
}

fn card_not_held(g: &GameState, player: usize) -> Card {
    full_deck(g.deck_kind())
        .into_iter()
        .find(|c| !g.players()[player].hand().has_card(*c))
        .expect("a 48-card deck always has cards outside an 8-card hand")
}

#[test]
fn fresh_round_offers_only_the_two_draws() {
    let g = new_game(1);
    let me = g.turn_player_id();
    assert_eq!(
        g.possible_actions(),
        &[Action::draw_from_deck(me), Action::draw_from_discard(me)]
    );
}

#[test]
fn draw_from_discard_takes_the_top_card() {
    let mut g = new_game(2);
    let me = g.turn_player_id();
    let top = g.top_discard_card().unwrap();
    g.run_action(Action::draw_from_discard(me)).unwrap();
    assert!(g.players()[me].hand().has_card(top));
    assert!(g.discard_pile().is_empty());
    assert_eq!(g.top_discard_card(), Err(GameError::DiscardPileEmpty));
    assert!(g.has_drawn_card());
}

#[test]
fn drawing_twice_is_not_possible() {
    let mut g = new_game(3);
    let me = g.turn_player_id();
    g.run_action(Action::draw_from_deck(me)).unwrap();
    assert!(!Action::draw_from_deck(me).is_possible(&g));
    assert!(!Action::draw_from_discard(me).is_possible(&g));
    assert!(matches!(
        g.run_action(Action::draw_from_deck(me)),
        Err(GameError::ActionNotPossible { .. })
    ));
}

#[test]
fn discarding_before_drawing_is_not_possible() {
    let mut g = new_game(4);
    let me = g.turn_player_id();
    let card = g.players()[me].hand().cards()[0];
    let err = g.run_action(Action::discard_card(me, card)).unwrap_err();
    assert!(matches!(err, GameError::ActionNotPossible { .. }));
    assert_eq!(g.players()[me].hand().len(), 7);
}

#[test]
fn discarding_a_card_not_in_hand_is_not_possible() {
    let mut g = new_game(5);
    let me = g.turn_player_id();
    g.run_action(Action::draw_from_deck(me)).unwrap();
    let missing = card_not_held(&g, me);
    assert!(!Action::discard_card(me, missing).is_possible(&g));
}

#[test]
fn after_drawing_every_held_card_can_be_discarded() {
    let mut g = new_game(6);
    let me = g.turn_player_id();
    g.run_action(Action::draw_from_deck(me)).unwrap();
    let discards: Vec<Card> = g
        .possible_actions()
        .iter()
        .filter_map(|a| match a {
            Action::DiscardCard(d) => Some(d.card),
            _ => None,
        })
        .collect();
    assert_eq!(discards, g.players()[me].hand().cards());
}

#[test]
fn run_rechecks_the_precondition() {
    let mut g = new_game(7);
    let other = g.turn_opponent_player_id();
    let err = Action::draw_from_deck(other).run(&mut g).unwrap_err();
    assert_eq!(
        err,
        GameError::ActionNotPossible {
            action: format!("Player {} draws from deck", other)
        }
    );
}

#[test]
fn confirmation_is_not_possible_while_round_runs() {
    let g = new_game(8);
    assert!(!Action::confirm_round_finished(0).is_possible(&g));
    assert!(!Action::confirm_round_finished(1).is_possible(&g));
}

#[test]
fn draw_and_confirm_do_not_yield_the_turn() {
    let g = new_game(9);
    assert!(!Action::draw_from_deck(0).yields_turn(&g));
    assert!(!Action::draw_from_discard(0).yields_turn(&g));
    assert!(!Action::confirm_round_finished(0).yields_turn(&g));
    let card = Card::new(Suit::Coins, 1);
    assert!(Action::discard_card(0, card).yields_turn(&g));
    assert!(Action::close_round(0, card).yields_turn(&g));
}

#[test]
fn every_action_has_priority_zero() {
    let card = Card::new(Suit::Cups, 4);
    for a in [
        Action::draw_from_deck(0),
        Action::draw_from_discard(1),
        Action::discard_card(0, card),
        Action::close_round(1, card),
        Action::confirm_round_finished(0),
    ] {
        assert_eq!(a.priority(), 0, "{a}");
        assert!(!a.allow_lower_priority(), "{a}");
    }
}

#[test]
fn enrich_leaves_actions_unchanged() {
    let g = new_game(10);
    let mut a = Action::discard_card(0, Card::new(Suit::Swords, 2));
    let before = a;
    a.enrich(&g);
    assert_eq!(a, before);
}

#[test]
fn descriptions_are_human_readable() {
    let card = Card::new(Suit::Swords, 7);
    assert_eq!(Action::draw_from_deck(0).to_string(), "Player 0 draws from deck");
    assert_eq!(
        Action::draw_from_discard(1).to_string(),
        "Player 1 draws from discard pile"
    );
    assert_eq!(
        Action::discard_card(1, card).to_string(),
        "Player 1 discards 7 of espada"
    );
    assert_eq!(
        Action::confirm_round_finished(0).to_string(),
        "Player 0 confirms round finished"
    );
}

#[test]
fn names_are_stable_discriminators() {
    let card = Card::new(Suit::Coins, 1);
    assert_eq!(Action::draw_from_deck(0).name(), "draw_from_deck");
    assert_eq!(Action::draw_from_discard(0).name(), "draw_from_discard");
    assert_eq!(Action::discard_card(0, card).name(), "discard_card");
    assert_eq!(Action::close_round(0, card).name(), "close_round");
    assert_eq!(
        Action::confirm_round_finished(0).name(),
        "confirm_round_finished"
    );
}
