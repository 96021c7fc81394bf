use std::collections::HashSet;

use chinchon_engine::cards::{full_deck, Card, DeckKind, Suit};
use chinchon_engine::deck::DrawPile;
use chinchon_engine::errors::GameError;

#[test]
fn penalty_value_is_face_value_below_ten() {
    for n in 1..=9 {
        assert_eq!(Card::new(Suit::Coins, n).penalty_value(), u32::from(n));
    }
}

#[test]
fn penalty_value_caps_at_ten() {
    assert_eq!(Card::new(Suit::Swords, 10).penalty_value(), 10);
    assert_eq!(Card::new(Suit::Clubs, 11).penalty_value(), 10);
    assert_eq!(Card::new(Suit::Cups, 12).penalty_value(), 10);
}

#[test]
fn spanish48_pile_deals_48_unique_cards_then_fails() {
    let mut pile = DrawPile::new_with_seed(42, DeckKind::Spanish48);
    pile.shuffle();
    assert_eq!(pile.remaining(), 48);
    let mut set = HashSet::new();
    for i in 0..48 {
        let c = pile.draw_card().expect("should have 48 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(pile.is_empty());
    assert_eq!(pile.draw_card(), Err(GameError::DeckEmpty));
}

#[test]
fn spanish40_has_no_eights_or_nines() {
    let deck = full_deck(DeckKind::Spanish40);
    assert_eq!(deck.len(), 40);
    assert_eq!(DeckKind::Spanish40.size(), 40);
    assert!(deck.iter().all(|c| c.number != 8 && c.number != 9));
    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), 40);
}

#[test]
fn successor_follows_deck_numbers() {
    assert_eq!(DeckKind::Spanish48.successor(7), Some(8));
    assert_eq!(DeckKind::Spanish40.successor(7), Some(10));
    assert_eq!(DeckKind::Spanish48.successor(12), None);
    assert_eq!(DeckKind::Spanish40.successor(8), None);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut a = DrawPile::new_with_seed(12345, DeckKind::Spanish48);
    let mut b = DrawPile::new_with_seed(12345, DeckKind::Spanish48);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.cards(), b.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut a = DrawPile::new_with_seed(1, DeckKind::Spanish48);
    let mut b = DrawPile::new_with_seed(2, DeckKind::Spanish48);
    a.shuffle();
    b.shuffle();
    assert_ne!(
        a.cards(),
        b.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn deal_hand_takes_cards_from_the_front() {
    let mut pile = DrawPile::new_with_seed(777, DeckKind::Spanish48);
    pile.shuffle();
    let top: Vec<Card> = pile.cards()[..7].to_vec();
    let hand = pile.deal_hand(7);
    assert_eq!(hand.cards(), &top[..]);
    assert_eq!(pile.remaining(), 41);
}

#[test]
fn deal_hand_stops_when_pile_runs_out() {
    let mut pile = DrawPile::new_with_seed(5, DeckKind::Spanish40);
    pile.shuffle();
    for _ in 0..37 {
        pile.draw_card().unwrap();
    }
    let hand = pile.deal_hand(7);
    assert_eq!(hand.len(), 3);
    assert!(pile.is_empty());
}

#[test]
fn reshuffle_rebuilds_the_full_deck() {
    let mut pile = DrawPile::new_with_seed(9, DeckKind::Spanish48);
    pile.shuffle();
    for _ in 0..10 {
        pile.draw_card().unwrap();
    }
    assert_eq!(pile.remaining(), 38);
    pile.shuffle();
    assert_eq!(pile.remaining(), 48);
    let unique: HashSet<Card> = pile.cards().iter().copied().collect();
    assert_eq!(unique.len(), 48);
}

#[test]
fn card_serializes_with_spanish_suit_names() {
    let json = serde_json::to_string(&Card::new(Suit::Coins, 7)).unwrap();
    assert_eq!(json, r#"{"suit":"oro","number":7}"#);
    let back: Card = serde_json::from_str(r#"{"suit":"basto","number":12}"#).unwrap();
    assert_eq!(back, Card::new(Suit::Clubs, 12));
}

#[test]
fn card_display_names_number_and_suit() {
    assert_eq!(Card::new(Suit::Swords, 3).to_string(), "3 of espada");
}

#[test]
fn deck_kind_parses_common_spellings() {
    assert_eq!(DeckKind::parse("spanish40"), Some(DeckKind::Spanish40));
    assert_eq!(DeckKind::parse("48"), Some(DeckKind::Spanish48));
    assert_eq!(DeckKind::parse("tarot"), None);
}
