use serde::Serialize;

use crate::actions::{Action, ActionRule};
use crate::cards::{Card, DeckKind};
use crate::codec;
use crate::config::GameOptions;
use crate::deck::DrawPile;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::logger::{ActionLog, RoundLog};
use crate::player::{opponent_of, Player, PlayerId, PLAYER_COUNT};
use crate::rules::{filter_by_priority, HAND_SIZE, PERFECT_CLOSE_BONUS};

/// Authoritative state of one two-player match.
///
/// All mutation goes through [`GameState::run_action`]. The state is not
/// internally synchronized; callers serialize access to one instance.
///
/// # Examples
///
/// ```
/// use chinchon_engine::actions::Action;
/// use chinchon_engine::config::GameOptions;
/// use chinchon_engine::game::GameState;
///
/// let mut game = GameState::new(GameOptions::default().with_seed(7));
/// let me = game.turn_player_id();
/// game.run_action(Action::draw_from_deck(me)).unwrap();
/// assert_eq!(game.players()[me].hand().len(), 8);
/// assert!(game.has_drawn_card());
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Current round, starting from 1
    pub(crate) round_number: usize,
    /// Player expected to act next
    #[serde(rename = "turnPlayerID")]
    pub(crate) turn_player_id: PlayerId,
    #[serde(rename = "turnOpponentPlayerID")]
    pub(crate) turn_opponent_player_id: PlayerId,
    pub(crate) players: [Player; PLAYER_COUNT],
    #[serde(skip)]
    pub(crate) draw_pile: DrawPile,
    /// Face-up pile, top card last
    pub(crate) discard_pile: Vec<Card>,
    /// Legal moves for whoever may act, recomputed after every action
    pub(crate) possible_actions: Vec<Action>,
    pub(crate) is_round_finished: bool,
    pub(crate) is_game_ended: bool,
    #[serde(rename = "winnerPlayerID")]
    pub(crate) winner_player_id: Option<PlayerId>,
    #[serde(rename = "loserPlayerID")]
    pub(crate) loser_player_id: Option<PlayerId>,
    /// One entry per round; index 0 is an unused placeholder
    pub(crate) rounds_log: Vec<RoundLog>,
    pub(crate) round_finished_confirmed: [bool; PLAYER_COUNT],
    pub(crate) rule_max_points: u32,
    #[serde(rename = "currentRoundClosedByPlayerID")]
    pub(crate) current_round_closed_by_player_id: Option<PlayerId>,
    pub(crate) has_drawn_card: bool,
    #[serde(skip)]
    round_starter: PlayerId,
}

impl GameState {
    /// Creates a match and deals the first round.
    pub fn new(options: GameOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        let mut g = Self {
            round_number: 0,
            turn_player_id: 0,
            turn_opponent_player_id: 1,
            players: [Player::new(), Player::new()],
            draw_pile: DrawPile::new_with_seed(seed, options.deck),
            discard_pile: Vec::new(),
            possible_actions: Vec::new(),
            is_round_finished: false,
            is_game_ended: false,
            winner_player_id: None,
            loser_player_id: None,
            rounds_log: vec![RoundLog::default()],
            round_finished_confirmed: [false; PLAYER_COUNT],
            rule_max_points: options.max_points.get(),
            current_round_closed_by_player_id: None,
            has_drawn_card: false,
            round_starter: 0,
        };
        tracing::info!(
            seed,
            max_points = options.max_points.get(),
            deck = ?options.deck,
            "creating new match"
        );
        g.start_new_round();
        g
    }

    fn start_new_round(&mut self) {
        self.draw_pile.shuffle();
        self.round_number += 1;

        // player 0 opens the match, then the opener alternates
        if self.round_number > 1 {
            self.round_starter = opponent_of(self.round_starter);
        }
        self.turn_player_id = self.round_starter;
        self.turn_opponent_player_id = opponent_of(self.round_starter);

        for p in &mut self.players {
            p.set_hand(self.draw_pile.deal_hand(HAND_SIZE));
        }

        self.discard_pile.clear();
        if let Ok(seed_card) = self.draw_pile.draw_card() {
            self.discard_pile.push(seed_card);
        }

        self.is_round_finished = false;
        self.current_round_closed_by_player_id = None;
        self.round_finished_confirmed = [false; PLAYER_COUNT];
        self.has_drawn_card = false;

        let hands_dealt = self.players.iter().map(|p| p.hand().clone()).collect();
        self.rounds_log.push(RoundLog::new(hands_dealt));

        self.possible_actions = self.calculate_possible_actions();

        tracing::info!(
            round = self.round_number,
            starter = self.turn_player_id,
            draw_pile = self.draw_pile.remaining(),
            "round started"
        );
    }

    /// Validates and applies one submitted action, then advances turn, round
    /// and match state.
    ///
    /// # Errors
    ///
    /// Checked in order: [`GameError::GameEnded`], [`GameError::InvalidPlayer`],
    /// [`GameError::NotYourTurn`] (only while the round is running),
    /// [`GameError::ActionNotPossible`]. Errors raised while applying an
    /// action that passed its precondition are returned as-is.
    pub fn run_action(&mut self, action: Action) -> Result<(), GameError> {
        let player_id = action.player_id();

        if self.is_game_ended {
            tracing::debug!(%action, "rejected action: game ended");
            return Err(GameError::GameEnded);
        }
        if player_id >= PLAYER_COUNT {
            tracing::debug!(player_id, "rejected action: invalid player");
            return Err(GameError::InvalidPlayer(player_id));
        }
        if !self.is_round_finished && player_id != self.turn_player_id {
            tracing::debug!(%action, turn = self.turn_player_id, "rejected action: not your turn");
            return Err(GameError::NotYourTurn {
                expected: self.turn_player_id,
                actual: player_id,
            });
        }
        if !action.is_possible(self) {
            tracing::debug!(%action, "rejected action: not possible");
            return Err(GameError::ActionNotPossible {
                action: action.to_string(),
            });
        }

        let acting_turn = self.turn_player_id;
        action.run(self)?;
        tracing::debug!(%action, round = self.round_number, "action applied");

        if !action.is_confirmation() {
            if let Some(log) = self.rounds_log.get_mut(self.round_number) {
                log.actions_log.push(ActionLog {
                    player_id: acting_turn,
                    action,
                });
            }
        }

        if !self.is_game_ended && self.is_round_finished && self.confirmations() == PLAYER_COUNT {
            self.start_new_round();
            return Ok(());
        }

        if !self.is_game_ended && !self.is_round_finished && action.yields_turn(self) {
            self.change_turn();
        } else if !self.is_game_ended
            && self.is_round_finished
            && self.confirmations() == 1
            && self.round_finished_confirmed[self.turn_player_id]
        {
            self.change_turn();
        }

        if !self.is_game_ended {
            self.check_max_points();
        }

        let mut possible = self.calculate_possible_actions();
        if !possible
            .iter()
            .any(|a| a.player_id() == self.turn_player_id)
        {
            self.change_turn();
            possible = self.calculate_possible_actions();
        }
        self.possible_actions = possible;

        Ok(())
    }

    fn change_turn(&mut self) {
        std::mem::swap(&mut self.turn_player_id, &mut self.turn_opponent_player_id);
        self.has_drawn_card = false;
    }

    fn confirmations(&self) -> usize {
        self.round_finished_confirmed.iter().filter(|&&c| c).count()
    }

    // Whoever has reached the limit loses; the higher score if both did.
    fn check_max_points(&mut self) {
        let loser = (0..PLAYER_COUNT)
            .filter(|&p| self.players[p].score() >= self.rule_max_points)
            .max_by_key(|&p| self.players[p].score());
        if let Some(loser) = loser {
            self.end_game(opponent_of(loser));
            tracing::info!(
                loser,
                score = self.players[loser].score(),
                max_points = self.rule_max_points,
                "match ended on points"
            );
        }
    }

    fn end_game(&mut self, winner: PlayerId) {
        self.is_game_ended = true;
        self.winner_player_id = Some(winner);
        self.loser_player_id = Some(opponent_of(winner));
    }

    /// Sets up a position: `player_id` ends up holding exactly `cards`.
    ///
    /// Requested cards are pulled from the player's own hand, the draw pile,
    /// the discard pile, or the opponent's hand, in that order. Cards the
    /// player gives up go to the opponent in exchange for anything taken from
    /// them, and the rest go to the bottom of the draw pile. Every card of the
    /// deck stays in play exactly once. Not reachable through
    /// [`GameState::run_action`]; meant for tests and position setup.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidPlayer`] for an unknown seat and
    /// [`GameError::CardUnavailable`] for a card that is not in the deck or is
    /// requested twice. The state is unchanged on error.
    #[doc(hidden)]
    pub fn with_hand(&mut self, player_id: PlayerId, cards: &[Card]) -> Result<(), GameError> {
        if player_id >= PLAYER_COUNT {
            return Err(GameError::InvalidPlayer(player_id));
        }
        let them = opponent_of(player_id);
        let mut released = self.players[player_id].hand().clone();
        let mut theirs = self.players[them].hand().clone();
        let mut draw_pile = self.draw_pile.clone();
        let mut discard_pile = self.discard_pile.clone();
        let mut owed = 0;

        for &card in cards {
            if released.remove_card(card).is_ok() || draw_pile.take(card) {
                continue;
            }
            if let Some(i) = discard_pile.iter().position(|&c| c == card) {
                discard_pile.remove(i);
            } else if theirs.remove_card(card).is_ok() {
                owed += 1;
            } else {
                return Err(GameError::CardUnavailable(card));
            }
        }

        let mut released = released.cards;
        for _ in 0..owed {
            let card = match released.pop() {
                Some(c) => c,
                None => draw_pile.draw_card()?,
            };
            theirs.add_card(card);
        }
        draw_pile.put_back(released);
        if discard_pile.is_empty() && !self.discard_pile.is_empty() {
            discard_pile.push(draw_pile.draw_card()?);
        }

        self.draw_pile = draw_pile;
        self.discard_pile = discard_pile;
        self.players[player_id].set_hand(Hand::new(cards.to_vec()));
        self.players[them].set_hand(theirs);

        if let Some(log) = self.rounds_log.get_mut(self.round_number) {
            if log.actions_log.is_empty() {
                log.hands_dealt = self.players.iter().map(|p| p.hand().clone()).collect();
            }
        }
        self.possible_actions = self.calculate_possible_actions();
        tracing::debug!(player_id, round = self.round_number, "hand set up");
        Ok(())
    }

    /// Every action currently legal for either player, after enrichment,
    /// precondition filtering and the priority sweep.
    pub fn calculate_possible_actions(&self) -> Vec<Action> {
        let turn = self.turn_player_id;
        let mut candidates = Vec::new();

        if !self.has_drawn_card && !self.is_round_finished {
            candidates.push(Action::draw_from_deck(turn));
            candidates.push(Action::draw_from_discard(turn));
        }

        if self.has_drawn_card && !self.is_round_finished {
            let hand = self.players[turn].hand().cards();
            candidates.extend(hand.iter().map(|&c| Action::discard_card(turn, c)));
            candidates.extend(hand.iter().map(|&c| Action::close_round(turn, c)));
        }

        candidates.push(Action::confirm_round_finished(turn));
        candidates.push(Action::confirm_round_finished(self.turn_opponent_player_id));

        let possible = candidates
            .into_iter()
            .filter_map(|mut a| {
                a.enrich(self);
                a.is_possible(self).then_some(a)
            })
            .collect();
        filter_by_priority(possible)
    }

    /// Whether `player_id` holds a closable seven-card hand.
    pub fn can_close(&self, player_id: PlayerId) -> bool {
        if self.is_round_finished {
            return false;
        }
        self.players
            .get(player_id)
            .is_some_and(|p| p.hand().can_close(self.deck_kind()))
    }

    /// Whether discarding `card` would leave `player_id` with a closable hand.
    pub fn can_close_discarding(&self, player_id: PlayerId, card: Card) -> bool {
        if self.is_round_finished {
            return false;
        }
        self.players
            .get(player_id)
            .and_then(|p| p.hand().without(card).ok())
            .is_some_and(|h| h.can_close(self.deck_kind()))
    }

    /// Finishes the current round and scores it.
    ///
    /// A chinchón in either hand ends the match on the spot with its holder as
    /// winner and no scoring. Otherwise the lower penalty wins the round. A
    /// closer who wins only hands the opponent their own penalty, plus
    /// [`PERFECT_CLOSE_BONUS`] when the closer's penalty was zero; in every
    /// other case each player takes their own penalty.
    pub(crate) fn close_round(&mut self, closing_player_id: Option<PlayerId>) {
        self.is_round_finished = true;
        self.has_drawn_card = false;
        self.current_round_closed_by_player_id = closing_player_id;
        let kind = self.deck_kind();
        let round = self.round_number;

        let order = match closing_player_id {
            Some(c) if c < PLAYER_COUNT => [c, opponent_of(c)],
            _ => [0, 1],
        };
        if let Some(holder) = order
            .into_iter()
            .find(|&p| self.players[p].hand().is_chinchon(kind))
        {
            self.end_game(holder);
            if let Some(log) = self.rounds_log.get_mut(round) {
                log.was_chinchon = true;
                log.closed_by_player_id = closing_player_id;
                log.winner_player_id = Some(holder);
                log.loser_player_id = Some(opponent_of(holder));
            }
            tracing::info!(round, winner = holder, "chinchón, match ended");
            return;
        }

        let penalties: [u32; PLAYER_COUNT] = std::array::from_fn(|p| {
            let hand = self.players[p].hand();
            hand.penalty_points(&hand.valid_groups(kind))
        });

        let (winner, loser) = if penalties[0] < penalties[1] {
            (Some(0), Some(1))
        } else if penalties[1] < penalties[0] {
            (Some(1), Some(0))
        } else {
            (None, None)
        };

        match closing_player_id {
            Some(closer) if winner == Some(closer) => {
                let opponent = opponent_of(closer);
                self.players[opponent].add_penalty(penalties[opponent]);
                if penalties[closer] == 0 {
                    self.players[opponent].add_penalty(PERFECT_CLOSE_BONUS);
                }
            }
            _ => {
                for (p, &penalty) in self.players.iter_mut().zip(penalties.iter()) {
                    p.add_penalty(penalty);
                }
            }
        }

        if let Some(log) = self.rounds_log.get_mut(round) {
            log.winner_player_id = winner;
            log.loser_player_id = loser;
            log.penalty_points = Some(penalties);
            log.closed_by_player_id = closing_player_id;
        }

        tracing::info!(
            round,
            closer = ?closing_player_id,
            winner = ?winner,
            penalty_0 = penalties[0],
            penalty_1 = penalties[1],
            score_0 = self.players[0].score(),
            score_1 = self.players[1].score(),
            "round closed"
        );
    }

    pub fn round_number(&self) -> usize {
        self.round_number
    }

    pub fn turn_player_id(&self) -> PlayerId {
        self.turn_player_id
    }

    pub fn turn_opponent_player_id(&self) -> PlayerId {
        self.turn_opponent_player_id
    }

    pub fn opponent_of(&self, player_id: PlayerId) -> PlayerId {
        opponent_of(player_id)
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn top_discard_card(&self) -> Result<Card, GameError> {
        self.discard_pile
            .last()
            .copied()
            .ok_or(GameError::DiscardPileEmpty)
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn deck_kind(&self) -> DeckKind {
        self.draw_pile.kind()
    }

    /// Legal moves stored after the last transition.
    pub fn possible_actions(&self) -> &[Action] {
        &self.possible_actions
    }

    pub fn is_round_finished(&self) -> bool {
        self.is_round_finished
    }

    pub fn is_game_ended(&self) -> bool {
        self.is_game_ended
    }

    pub fn winner_player_id(&self) -> Option<PlayerId> {
        self.winner_player_id
    }

    pub fn loser_player_id(&self) -> Option<PlayerId> {
        self.loser_player_id
    }

    pub fn rounds_log(&self) -> &[RoundLog] {
        &self.rounds_log
    }

    pub fn current_round_log(&self) -> Option<&RoundLog> {
        self.rounds_log.get(self.round_number)
    }

    pub fn round_finished_confirmed(&self) -> [bool; PLAYER_COUNT] {
        self.round_finished_confirmed
    }

    pub fn rule_max_points(&self) -> u32 {
        self.rule_max_points
    }

    pub fn current_round_closed_by_player_id(&self) -> Option<PlayerId> {
        self.current_round_closed_by_player_id
    }

    pub fn has_drawn_card(&self) -> bool {
        self.has_drawn_card
    }

    pub fn serialize(&self) -> Result<Vec<u8>, GameError> {
        codec::serialize(self)
    }

    pub fn pretty_print(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::Serialization(e.to_string()))
    }
}
