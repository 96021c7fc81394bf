//! # chinchon-engine: Chinchón Game Engine Core
//!
//! Authoritative engine for two-player Chinchón. Holds the single source of
//! truth for a match, validates and applies submitted actions, advances turns,
//! rounds and the match, and scores closed rounds.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Card) and deck variants
//! - [`deck`] - Seeded draw pile shuffling and dealing
//! - [`hand`] - Run/set grouping, chinchón detection, penalties, closability
//! - [`actions`] - The closed set of moves and their rules
//! - [`codec`] - Discriminated JSON encoding of actions and states
//! - [`rules`] - Game constants and legal-move priority filtering
//! - [`game`] - The match state machine
//! - [`view`] - Redacted per-player projection
//! - [`player`] - Player hand and score
//! - [`logger`] - Per-round logs
//! - [`messages`] - Wire message shapes for a transport layer
//! - [`config`] - Match options and their loading
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use chinchon_engine::actions::Action;
//! use chinchon_engine::config::GameOptions;
//! use chinchon_engine::game::GameState;
//!
//! let mut game = GameState::new(GameOptions::default().with_seed(42));
//! let me = game.turn_player_id();
//!
//! game.run_action(Action::draw_from_deck(me)).unwrap();
//! let card = game.players()[me].hand().cards()[0];
//! game.run_action(Action::discard_card(me, card)).unwrap();
//!
//! assert_ne!(game.turn_player_id(), me);
//! ```
//!
//! ## Hand Analysis
//!
//! ```rust
//! use chinchon_engine::cards::{Card, DeckKind, Suit};
//! use chinchon_engine::hand::Hand;
//!
//! let hand = Hand::new((1..=7).map(|n| Card::new(Suit::Coins, n)).collect());
//! assert!(hand.is_chinchon(DeckKind::Spanish48));
//! ```

pub mod actions;
pub mod cards;
pub mod codec;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod messages;
pub mod player;
pub mod rules;
pub mod view;
