use std::fmt;
use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{Award, EngineEvent, EventBus, HandSummary, Resolution, ShownHand};
use crate::hand::{try_best_five, HandResult};
use crate::player::{Player, PlayerAction};
use crate::pot::{split_pot, Pot};
use crate::rules::{self, ValidatedAction};

/// Phases of a hand. They only move forward until the next `start_hand`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RoundPhase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl RoundPhase {
    pub fn name(self) -> &'static str {
        match self {
            RoundPhase::PreFlop => "PreFlop",
            RoundPhase::Flop => "Flop",
            RoundPhase::Turn => "Turn",
            RoundPhase::River => "River",
            RoundPhase::Showdown => "Showdown",
        }
    }

    pub fn next(self) -> Option<RoundPhase> {
        match self {
            RoundPhase::PreFlop => Some(RoundPhase::Flop),
            RoundPhase::Flop => Some(RoundPhase::Turn),
            RoundPhase::Turn => Some(RoundPhase::River),
            RoundPhase::River => Some(RoundPhase::Showdown),
            RoundPhase::Showdown => None,
        }
    }

    /// Community cards dealt when entering this phase.
    pub fn cards_dealt(self) -> usize {
        match self {
            RoundPhase::Flop => 3,
            RoundPhase::Turn | RoundPhase::River => 1,
            RoundPhase::PreFlop | RoundPhase::Showdown => 0,
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an accepted action led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Betting continues on the same street with `seat` to act.
    NextTurn { seat: usize },
    /// The street closed; `phase` opened with `seat` to act.
    PhaseAdvanced { phase: RoundPhase, seat: usize },
    /// The hand is over and the pot has been paid out.
    HandComplete(HandSummary),
}

/// Betting engine for one table.
///
/// Owns the deck, the seats and the pot, and drives each hand through
/// PreFlop, Flop, Turn, River and Showdown. Every public mutation finishes
/// before its notifications are published.
///
/// # Examples
///
/// ```
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::engine::{Engine, RoundPhase};
/// use holdem_engine::player::{Player, PlayerAction};
///
/// let players = vec![Player::human("Ana", 1000), Player::automated("Bot", 1000)];
/// let mut engine = Engine::new(players, TableConfig::default(), Some(7)).unwrap();
/// engine.start_hand().unwrap();
///
/// // dealer is seat 1, so seat 0 posts the small blind and acts first
/// assert_eq!(engine.pot(), 30);
/// assert_eq!(engine.current_seat(), Some(0));
///
/// engine.submit_action(PlayerAction::Call).unwrap();
/// engine.submit_action(PlayerAction::Check).unwrap();
/// assert_eq!(engine.phase(), RoundPhase::Flop);
/// assert_eq!(engine.community_cards().len(), 3);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: TableConfig,
    deck: Deck,
    players: Vec<Player>,
    community: Vec<Card>,
    pot: Pot,
    current_bet: u32,
    phase: RoundPhase,
    dealer: usize,
    current: usize,
    /// Actions taken since the current bet last went up.
    acted: usize,
    in_progress: bool,
    hand_number: u64,
    last_summary: Option<HandSummary>,
    events: EventBus,
}

impl Engine {
    pub fn new(
        players: Vec<Player>,
        config: TableConfig,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let seed = seed.unwrap_or(0xA1A2_A3A4);
        Self::with_deck(players, config, Deck::new_with_seed(seed))
    }

    /// Two seats with the configured stack: a human in seat 0 and an automated seat 1.
    pub fn heads_up(config: TableConfig, seed: Option<u64>) -> Result<Self, GameError> {
        let players = vec![
            Player::human("Player", config.starting_stack),
            Player::automated("Bot", config.starting_stack),
        ];
        Self::new(players, config, seed)
    }

    pub fn with_deck(
        players: Vec<Player>,
        config: TableConfig,
        deck: Deck,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                funded: players.iter().filter(|p| p.chips() > 0).count(),
            });
        }
        // every chip at the table must fit in the pot's u32 counters
        players
            .iter()
            .try_fold(0u32, |total, p| total.checked_add(p.chips()))
            .ok_or_else(|| {
                tracing::error!(seats = players.len(), "table chip total overflows u32");
                GameError::InvalidConfig(format!(
                    "total chips at the table must not exceed {}",
                    u32::MAX
                ))
            })?;
        let seats = players.len();
        Ok(Self {
            config,
            deck,
            players,
            community: Vec::with_capacity(5),
            pot: Pot::new(seats),
            current_bet: 0,
            phase: RoundPhase::PreFlop,
            dealer: config.initial_dealer % seats,
            current: 0,
            acted: 0,
            in_progress: false,
            hand_number: 0,
            last_summary: None,
            events: EventBus::new(),
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot.total()
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn is_hand_in_progress(&self) -> bool {
        self.in_progress
    }
    pub fn last_summary(&self) -> Option<&HandSummary> {
        self.last_summary.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seat whose turn it is, while a hand is running.
    pub fn current_seat(&self) -> Option<usize> {
        self.in_progress.then_some(self.current)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_seat().and_then(|s| self.players.get(s))
    }

    pub fn is_current_actor_automated(&self) -> bool {
        self.current_player().is_some_and(Player::is_automated)
    }

    /// Chips `seat` must add to match the current bet.
    pub fn to_call(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map(|p| rules::to_call(self.current_bet, p.current_bet()))
            .unwrap_or(0)
    }

    pub fn min_raise_to(&self) -> u32 {
        rules::min_raise_to(self.current_bet)
    }

    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Drains published events for callers that poll instead of subscribing.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.take_events()
    }

    /// Shuffles, deals two cards to every funded seat, posts blinds and opens PreFlop betting.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotEnoughPlayers`] when fewer than two seats have chips (fatal)
    /// - [`GameError::HandInProgress`] when the previous hand has not finished
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        let result = self.begin_hand();
        self.events.flush();
        result
    }

    /// Applies `action` for the seat whose turn it is.
    ///
    /// Illegal requests come back as `Err` with the engine unchanged apart
    /// from a [`EngineEvent::StateChanged`] notification.
    pub fn submit_action(&mut self, action: PlayerAction) -> Result<ActionOutcome, GameError> {
        let result = self.apply(action);
        self.events.flush();
        result
    }

    fn begin_hand(&mut self) -> Result<(), GameError> {
        if self.in_progress {
            return Err(GameError::HandInProgress);
        }
        let funded = self.players.iter().filter(|p| p.chips() > 0).count();
        if funded < 2 {
            tracing::error!(funded, "cannot start hand without two funded seats");
            return Err(GameError::NotEnoughPlayers { funded });
        }

        self.hand_number += 1;
        self.deck.shuffle();
        self.community.clear();
        self.pot = Pot::new(self.players.len());
        self.current_bet = 0;
        self.phase = RoundPhase::PreFlop;
        self.acted = 0;
        self.last_summary = None;
        self.in_progress = true;
        for p in &mut self.players {
            p.reset_for_new_hand();
        }

        for _ in 0..2 {
            for p in self.players.iter_mut().filter(|p| !p.is_folded()) {
                p.receive_card(self.deck.deal());
            }
        }

        let sb = self.next_eligible(self.dealer).unwrap_or(self.dealer);
        let bb = self.next_eligible(sb).unwrap_or(sb);
        self.commit(sb, self.config.small_blind);
        self.commit(bb, self.config.big_blind);
        self.current_bet = self.config.big_blind;

        tracing::info!(
            hand = self.hand_number,
            dealer = self.dealer,
            small_blind_seat = sb,
            big_blind_seat = bb,
            "hand started"
        );
        self.events.emit(EngineEvent::StateChanged);
        self.events.emit(EngineEvent::PhaseChanged {
            phase: RoundPhase::PreFlop,
        });

        if self.round_complete() {
            self.close_round();
        } else {
            match self.next_eligible(bb) {
                Some(seat) => self.set_turn(seat),
                None => {
                    self.close_round();
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, action: PlayerAction) -> Result<ActionOutcome, GameError> {
        if !self.in_progress {
            self.events.emit(EngineEvent::StateChanged);
            return Err(GameError::NoHandInProgress);
        }
        let seat = self.current;
        let player = &self.players[seat];
        let validated = match rules::validate_action(
            self.current_bet,
            player.current_bet(),
            player.chips(),
            action,
        ) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(seat, ?action, error = %e, "action rejected");
                self.events.emit(EngineEvent::StateChanged);
                return Err(e);
            }
        };

        match validated {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                self.acted += 1;
            }
            ValidatedAction::Check => self.acted += 1,
            ValidatedAction::Call { amount, .. } => {
                self.commit(seat, amount);
                self.acted += 1;
            }
            ValidatedAction::RaiseTo { total, amount, .. } => {
                self.commit(seat, amount);
                if total > self.current_bet {
                    // the raiser has acted; everyone else must answer
                    self.current_bet = total;
                    self.acted = 1;
                } else {
                    // an all-in short of the current bet is only a call
                    self.acted += 1;
                }
            }
        }
        tracing::debug!(
            hand = self.hand_number,
            seat,
            ?validated,
            pot = self.pot.total(),
            current_bet = self.current_bet,
            "action applied"
        );
        self.events.emit(EngineEvent::StateChanged);
        Ok(self.advance())
    }

    fn advance(&mut self) -> ActionOutcome {
        let live: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded())
            .map(|(seat, _)| seat)
            .collect();
        if let [winner] = live[..] {
            return ActionOutcome::HandComplete(self.award_fold_out(winner));
        }
        if self.round_complete() {
            return self.close_round();
        }
        match self.next_eligible(self.current) {
            Some(seat) => {
                self.set_turn(seat);
                ActionOutcome::NextTurn { seat }
            }
            None => self.close_round(),
        }
    }

    /// Every seat still able to bet has matched the current bet and has
    /// acted since it last went up.
    fn round_complete(&self) -> bool {
        let active: Vec<&Player> = self.actionable().collect();
        active.iter().all(|p| p.current_bet() == self.current_bet) && self.acted >= active.len()
    }

    fn actionable(&self) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(|p| !p.is_folded() && !p.is_all_in())
    }

    /// Ends the street and opens the next one, dealing straight through to
    /// showdown while fewer than two seats can still bet.
    fn close_round(&mut self) -> ActionOutcome {
        loop {
            for p in &mut self.players {
                p.reset_bet();
            }
            self.current_bet = 0;
            self.acted = 0;

            let Some(next) = self.phase.next() else {
                return ActionOutcome::HandComplete(self.showdown());
            };
            self.phase = next;
            for _ in 0..next.cards_dealt() {
                self.community.push(self.deck.deal());
            }
            tracing::debug!(
                hand = self.hand_number,
                phase = %next,
                board = ?self.community,
                "phase changed"
            );
            self.events.emit(EngineEvent::PhaseChanged { phase: next });
            self.events.emit(EngineEvent::StateChanged);

            if next == RoundPhase::Showdown {
                return ActionOutcome::HandComplete(self.showdown());
            }
            if self.actionable().count() >= 2 {
                if let Some(seat) = self.next_eligible(self.dealer) {
                    self.set_turn(seat);
                    return ActionOutcome::PhaseAdvanced { phase: next, seat };
                }
            }
        }
    }

    fn award_fold_out(&mut self, winner: usize) -> HandSummary {
        let pot = self.pot.take();
        self.players[winner].add_chips(pot);
        tracing::info!(
            hand = self.hand_number,
            winner,
            pot,
            "pot awarded after fold-out"
        );
        let summary = HandSummary {
            hand_number: self.hand_number,
            resolution: Resolution::FoldOut,
            pot,
            awards: vec![self.award(winner, pot)],
            refund: None,
            shown: Vec::new(),
        };
        self.end_hand(summary)
    }

    fn showdown(&mut self) -> HandSummary {
        let pot_before = self.pot.total();

        let refund = self.pot.uncalled_excess().map(|(seat, excess)| {
            let amount = self.pot.refund(seat, excess);
            self.players[seat].add_chips(amount);
            self.award(seat, amount)
        });

        let mut shown: Vec<ShownHand> = Vec::new();
        for (seat, p) in self.players.iter().enumerate() {
            if p.is_folded() || p.hole_cards().len() != 2 {
                continue;
            }
            let mut cards = p.hole_cards().to_vec();
            cards.extend_from_slice(&self.community);
            if let Some((five, result)) = try_best_five(&cards) {
                shown.push(ShownHand {
                    seat,
                    hole: p.hole_cards().to_vec(),
                    best_five: five.to_vec(),
                    result,
                });
            }
        }

        let best: Option<HandResult> = shown.iter().map(|s| s.result.clone()).max();
        let winners: Vec<usize> = match &best {
            Some(best) => shown
                .iter()
                .filter(|s| s.result == *best)
                .map(|s| s.seat)
                .collect(),
            None => self
                .players
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_folded())
                .map(|(seat, _)| seat)
                .collect(),
        };

        let amount = self.pot.take();
        let mut awards = Vec::with_capacity(winners.len());
        for (seat, share) in split_pot(amount, &winners) {
            self.players[seat].add_chips(share);
            awards.push(self.award(seat, share));
        }

        let category = best.as_ref().map(|b| b.category);
        let resolution = match (category, awards.len()) {
            (Some(category), 1) => Resolution::Showdown { category },
            (Some(category), _) => Resolution::Split { category },
            (None, _) => Resolution::FoldOut,
        };
        tracing::info!(
            hand = self.hand_number,
            winners = ?winners,
            pot = pot_before,
            category = ?category,
            "showdown resolved"
        );
        let summary = HandSummary {
            hand_number: self.hand_number,
            resolution,
            pot: pot_before,
            awards,
            refund,
            shown,
        };
        self.end_hand(summary)
    }

    fn end_hand(&mut self, summary: HandSummary) -> HandSummary {
        self.in_progress = false;
        self.dealer = (self.dealer + 1) % self.players.len();
        self.last_summary = Some(summary.clone());
        self.events.emit(EngineEvent::RoundEnded(summary.clone()));
        self.events.emit(EngineEvent::StateChanged);
        summary
    }

    fn award(&self, seat: usize, amount: u32) -> Award {
        Award {
            seat,
            name: self.players[seat].name().to_string(),
            amount,
        }
    }

    /// Moves chips from a seat into its street bet and the pot.
    fn commit(&mut self, seat: usize, amount: u32) {
        let moved = self.players[seat].bet(amount);
        self.pot.add(seat, moved);
    }

    fn set_turn(&mut self, seat: usize) {
        self.current = seat;
        self.events.emit(EngineEvent::TurnChanged {
            seat,
            name: self.players[seat].name().to_string(),
        });
    }

    /// First seat after `from`, wrapping around, that is neither folded nor out of chips.
    fn next_eligible(&self, from: usize) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&seat| self.players[seat].is_eligible())
    }
}
