use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{ActionViolation, GameError};
use crate::events::{SeatInfo, TableEvent};
use crate::game::{next_eligible_seat, Stage};
use crate::hand::{rank_many, HandEvaluation};
use crate::logger::{
    ActionRecord, EvaluatedHand, HandRecord, Payout, PlayerSnapshot, PotResult, Street,
};
use crate::player::{Player, PlayerAction, PlayerId};
use crate::pot::{build_pots, split_pot, Contribution, SidePot};
use crate::rules::{legal_actions, validate_action, LegalActions, ValidatedAction};
use crate::view::{PlayerView, TableView, HIDDEN_CARD};

/// Burns before the flop, turn and river.
const BURNS_PER_HAND: usize = 3;
/// Flop, turn and river.
const BOARD_CARDS: usize = 5;
/// Largest table one 52-card deck can serve: 22 * 2 + 3 + 5 = 52.
pub const MAX_SEATS: usize = 22;

/// Stakes and seating limits of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Dead chips every dealt-in player posts before the blinds (0 = none)
    pub ante: u32,
    pub max_players: usize,
    /// Seed of the table RNG; `None` draws one from OS entropy
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            ante: 0,
            max_players: 9,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Checks that the stakes and seat limit describe a playable table.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind == 0 {
            return Err(GameError::SeatingError("big blind must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::SeatingError(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        if !(2..=MAX_SEATS).contains(&self.max_players) {
            return Err(GameError::SeatingError(format!(
                "max players must be between 2 and {MAX_SEATS}, got {}",
                self.max_players
            )));
        }
        Ok(())
    }
}

/// Forced bets taken when a hand starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlindPosting {
    /// Seat and chips actually posted (may be short when the stack is)
    pub small_blind: (PlayerId, u32),
    pub big_blind: (PlayerId, u32),
    /// Total ante chips collected
    pub antes: u32,
}

/// A single No-Limit Hold'em table: seats, stacks, the button and the state
/// machine that runs one hand at a time.
///
/// Every mutating call validates first and only then touches state, so a
/// rejected call leaves the table exactly as it was. Chips are conserved:
/// stacks plus pot never change except through seating.
///
/// # Examples
///
/// ```
/// use referee_engine::engine::{Table, TableConfig};
/// use referee_engine::game::Stage;
/// use referee_engine::player::{PlayerAction, PlayerId};
///
/// let config = TableConfig { small_blind: 5, big_blind: 10, seed: Some(7), ..TableConfig::default() };
/// let mut table = Table::new(config).unwrap();
/// table.add_player("a", "Alice", 500).unwrap();
/// table.add_player("b", "Bob", 500).unwrap();
///
/// table.start_hand().unwrap();
/// // heads-up: the button posts the small blind and acts first
/// let first = table.current_player().cloned().unwrap();
/// table.apply_action(&first, PlayerAction::Fold).unwrap();
///
/// assert_eq!(table.stage(), Stage::HandComplete);
/// assert_eq!(table.total_chips(), 1000);
/// ```
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    rng: ChaCha20Rng,
    deck: Deck,
    hand_seed: Option<u64>,
    stage: Stage,
    button: usize,
    current: Option<usize>,
    community: Vec<Card>,
    pot: u32,
    side_pots: Vec<SidePot>,
    current_bet: u32,
    min_raise: u32,
    last_aggressor: Option<usize>,
    hand_number: u64,
    showdown_reached: bool,
    actions: Vec<ActionRecord>,
    history: Vec<HandRecord>,
    events: Vec<TableEvent>,
}

impl Table {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let min_raise = config.big_blind;
        Ok(Self {
            config,
            players: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            deck: Deck::standard(),
            hand_seed: None,
            stage: Stage::Idle,
            button: 0,
            current: None,
            community: Vec::with_capacity(BOARD_CARDS),
            pot: 0,
            side_pots: Vec::new(),
            current_bet: 0,
            min_raise,
            last_aggressor: None,
            hand_number: 0,
            showdown_reached: false,
            actions: Vec::new(),
            history: Vec::new(),
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    /// Seat index of the dealer button.
    pub fn button(&self) -> usize {
        self.button
    }
    /// Hands started so far; the running hand's number while one is in progress.
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn last_aggressor(&self) -> Option<&PlayerId> {
        self.last_aggressor.map(|s| self.players[s].id())
    }
    /// Pot layers computed at the last showdown.
    pub fn side_pots(&self) -> &[SidePot] {
        &self.side_pots
    }
    /// Settled hands, oldest first.
    pub fn hand_history(&self) -> &[HandRecord] {
        &self.history
    }
    pub fn last_hand(&self) -> Option<&HandRecord> {
        self.history.last()
    }

    /// The player whose decision is awaited, if a betting round is open.
    pub fn current_player(&self) -> Option<&PlayerId> {
        if !self.stage.is_betting() {
            return None;
        }
        self.current.map(|s| self.players[s].id())
    }

    /// Stacks plus pot. Constant across a hand.
    pub fn total_chips(&self) -> u64 {
        let stacks: u64 = self.players.iter().map(|p| u64::from(p.stack())).sum();
        stacks + u64::from(self.pot)
    }

    /// Takes every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// Seats a new player at the end of the seating order.
    ///
    /// # Errors
    ///
    /// [`GameError::SeatingError`] while a hand is running, when the table is
    /// full, when `id` is already seated, or when the chips on the table
    /// would no longer fit in a `u32` pot.
    pub fn add_player(
        &mut self,
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        stack: u32,
    ) -> Result<(), GameError> {
        let id = id.into();
        if !self.stage.between_hands() {
            return Err(GameError::SeatingError(format!(
                "cannot seat {id} while a hand is in progress"
            )));
        }
        if self.players.len() >= self.config.max_players {
            return Err(GameError::SeatingError(format!(
                "table is full ({} seats)",
                self.config.max_players
            )));
        }
        if self.player(&id).is_some() {
            return Err(GameError::SeatingError(format!("{id} is already seated")));
        }
        if self.total_chips() + u64::from(stack) > u64::from(u32::MAX) {
            return Err(GameError::SeatingError(format!(
                "seating {id} with {stack} would put more than {} chips on the table",
                u32::MAX
            )));
        }
        debug!(player = %id, stack, seat = self.players.len(), "player seated");
        self.players.push(Player::new(id, name, stack));
        Ok(())
    }

    /// Unseats a player between hands and returns them with their stack.
    pub fn remove_player(&mut self, id: &PlayerId) -> Result<Player, GameError> {
        if !self.stage.between_hands() {
            return Err(GameError::SeatingError(format!(
                "cannot unseat {id} while a hand is in progress"
            )));
        }
        let seat = self
            .seat_of(id)
            .ok_or_else(|| GameError::SeatingError(format!("{id} is not seated")))?;
        let player = self.players.remove(seat);
        let seats = self.players.len();
        if seat < self.button {
            self.button -= 1;
        } else if seat == self.button && self.hand_number > 0 && seats > 0 {
            // the next hand moves the button on to the seat that followed
            self.button = (self.button + seats - 1) % seats;
        }
        if self.button >= self.players.len() {
            self.button = 0;
        }
        debug!(player = %id, stack = player.stack(), "player left");
        Ok(player)
    }

    /// Starts the next hand with a freshly shuffled deck.
    ///
    /// Each hand draws its own seed from the table RNG, shuffles with it and
    /// records it in the [`HandRecord`], so any hand can be replayed alone.
    ///
    /// # Errors
    ///
    /// [`ActionViolation::HandInProgress`] if a hand is running, and
    /// [`GameError::InsufficientPlayers`] with fewer than two funded seats.
    pub fn start_hand(&mut self) -> Result<BlindPosting, GameError> {
        self.check_can_start(&Deck::standard())?;
        let hand_seed: u64 = self.rng.random();
        let mut hand_rng = ChaCha20Rng::seed_from_u64(hand_seed);
        let deck = Deck::standard().shuffled(&mut hand_rng);
        self.begin_hand(deck, Some(hand_seed))
    }

    /// Starts the next hand dealing from `deck` as given.
    ///
    /// Hole cards go out two at a time to each funded seat, starting left of
    /// the button; then burn and three, burn and one, burn and one.
    #[doc(hidden)]
    pub fn start_hand_with_deck(&mut self, deck: Deck) -> Result<BlindPosting, GameError> {
        self.check_can_start(&deck)?;
        self.begin_hand(deck, None)
    }

    fn check_can_start(&self, deck: &Deck) -> Result<(), GameError> {
        if !self.stage.between_hands() {
            return Err(ActionViolation::HandInProgress.into());
        }
        let funded = self.players.iter().filter(|p| p.stack() > 0).count();
        if funded < 2 {
            return Err(GameError::InsufficientPlayers { available: funded });
        }
        let needed = funded * 2 + BURNS_PER_HAND + BOARD_CARDS;
        if deck.remaining() < needed {
            return Err(GameError::InsufficientCards {
                requested: needed,
                available: deck.remaining(),
            });
        }
        Ok(())
    }

    fn begin_hand(&mut self, deck: Deck, seed: Option<u64>) -> Result<BlindPosting, GameError> {
        self.hand_number += 1;
        self.deck = deck;
        self.hand_seed = seed;
        self.community.clear();
        self.pot = 0;
        self.side_pots.clear();
        self.actions.clear();
        self.showdown_reached = false;
        self.current_bet = 0;
        self.min_raise = self.config.big_blind;
        self.last_aggressor = None;
        for p in &mut self.players {
            p.reset_for_hand();
        }

        if self.button >= self.players.len() {
            self.button = 0;
        }
        if self.hand_number > 1 || !self.players[self.button].is_active() {
            self.button = self.next_seat(self.button, Player::is_active);
        }

        let mut antes = 0;
        if self.config.ante > 0 {
            for p in self.players.iter_mut().filter(|p| p.is_active()) {
                antes += p.commit_dead(self.config.ante);
            }
        }

        let dealt_in = self.players.iter().filter(|p| p.is_active()).count();
        let (sb_seat, bb_seat) = if dealt_in == 2 {
            let sb = self.button;
            (sb, self.next_seat(sb, Player::is_active))
        } else {
            let sb = self.next_seat(self.button, Player::is_active);
            (sb, self.next_seat(sb, Player::is_active))
        };
        let sb_paid = self.players[sb_seat].commit(self.config.small_blind);
        let bb_paid = self.players[bb_seat].commit(self.config.big_blind);
        self.pot = antes + sb_paid + bb_paid;
        self.current_bet = sb_paid.max(bb_paid);
        self.last_aggressor = Some(bb_seat);

        for seat in self.seats_from_button() {
            if self.players[seat].is_active() {
                let cards = self.deck.deal(2)?;
                self.players[seat].give_cards([cards[0], cards[1]]);
            }
        }

        self.stage = Stage::Preflop;
        self.current = self.next_actor(bb_seat);

        let posting = BlindPosting {
            small_blind: (self.players[sb_seat].id().clone(), sb_paid),
            big_blind: (self.players[bb_seat].id().clone(), bb_paid),
            antes,
        };
        info!(
            hand = self.hand_number,
            button = %self.players[self.button].id(),
            players = dealt_in,
            seed = ?seed,
            "hand started"
        );
        self.events.push(TableEvent::HandStarted {
            hand_number: self.hand_number,
            button: self.players[self.button].id().clone(),
            players: self
                .players
                .iter()
                .filter(|p| p.is_active())
                .map(|p| SeatInfo {
                    id: p.id().clone(),
                    name: p.name().to_string(),
                    stack: p.stack(),
                    hole_cards: p.hole_cards().map(|h| h.to_vec()).unwrap_or_default(),
                })
                .collect(),
            small_blind: posting.small_blind.clone(),
            big_blind: posting.big_blind.clone(),
            pot: self.pot,
        });

        if self.betting_closed() {
            self.finish_street()?;
        }
        Ok(posting)
    }

    /// Legal-action descriptor for the player currently to act.
    pub fn legal_actions(&self) -> Result<LegalActions, GameError> {
        let seat = self.acting_seat()?;
        let p = &self.players[seat];
        Ok(legal_actions(
            p.stack(),
            p.street_bet(),
            self.current_bet,
            self.min_raise,
            self.pot,
        ))
    }

    /// Applies `action` for `player`, then advances the hand as far as it goes
    /// without another decision: next actor, next street, showdown or
    /// settlement.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalAction`] when no betting round is open, the player is
    /// unknown or out of turn, or the action breaks the betting rules. The
    /// table is unchanged on error.
    pub fn apply_action(&mut self, player: &PlayerId, action: PlayerAction) -> Result<(), GameError> {
        let expected = self.acting_seat()?;
        let seat = self
            .seat_of(player)
            .ok_or_else(|| ActionViolation::UnknownPlayer(player.clone()))?;
        if seat != expected {
            return Err(ActionViolation::NotPlayersTurn {
                expected: self.players[expected].id().clone(),
                actual: player.clone(),
            }
            .into());
        }
        let p = &self.players[seat];
        let to_call = self.current_bet.saturating_sub(p.street_bet());
        let validated = validate_action(p.stack(), to_call, self.min_raise, action)?;
        let street = self.stage.street().unwrap_or(Street::Preflop);

        let amount = match validated {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                0
            }
            ValidatedAction::Check => 0,
            ValidatedAction::Call(chips)
            | ValidatedAction::Raise { total: chips, .. }
            | ValidatedAction::AllIn(chips) => self.players[seat].commit(chips),
        };
        self.pot += amount;
        if matches!(validated, ValidatedAction::Raise { .. } | ValidatedAction::AllIn(_)) {
            self.register_bet(seat);
        }
        self.players[seat].mark_acted(true);

        debug!(
            hand = self.hand_number,
            player = %player,
            ?action,
            amount,
            pot = self.pot,
            "action applied"
        );
        self.actions.push(ActionRecord {
            player_id: player.clone(),
            street,
            action,
            amount,
            pot_after: self.pot,
        });
        self.events.push(TableEvent::ActionApplied {
            player_id: player.clone(),
            action,
            amount,
            pot: self.pot,
            stage: self.stage,
        });

        self.advance(seat)
    }

    /// Redacted snapshot for `viewer`. Only the viewer's own hole cards are
    /// visible, except that live hands are revealed once a showdown happens.
    /// A hand won by folds reveals nothing, the winner's cards included.
    /// `None` is a spectator.
    pub fn view(&self, viewer: Option<&PlayerId>) -> TableView {
        let revealed = self.showdown_reached && self.stage.reveals_hands();
        let players = self
            .players
            .iter()
            .map(|p| {
                let hole_cards = match p.hole_cards() {
                    None => Vec::new(),
                    Some(cards) if viewer == Some(p.id()) || (revealed && p.in_hand()) => {
                        cards.iter().map(|c| c.to_string()).collect()
                    }
                    Some(_) => vec![HIDDEN_CARD.to_string(); 2],
                };
                PlayerView {
                    id: p.id().clone(),
                    name: p.name().to_string(),
                    stack: p.stack(),
                    street_bet: p.street_bet(),
                    folded: p.is_folded(),
                    all_in: p.is_all_in(),
                    active: p.is_active(),
                    hole_cards,
                }
            })
            .collect();
        TableView {
            hand_number: self.hand_number,
            stage: self.stage,
            pot: self.pot,
            community_cards: self.community.iter().map(|c| c.to_string()).collect(),
            current_bet: self.current_bet,
            min_raise: self.min_raise,
            current_player: self.current_player().cloned(),
            button: self.button,
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            players,
        }
    }

    fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    fn acting_seat(&self) -> Result<usize, GameError> {
        match self.current {
            Some(seat) if self.stage.is_betting() => Ok(seat),
            _ => Err(ActionViolation::NoHandInProgress.into()),
        }
    }

    fn next_seat(&self, from: usize, eligible: fn(&Player) -> bool) -> usize {
        next_eligible_seat(&self.players, from, eligible).unwrap_or(from)
    }

    /// Seat indices clockwise, starting left of the button and ending on it.
    fn seats_from_button(&self) -> Vec<usize> {
        let n = self.players.len();
        (1..=n).map(|step| (self.button + step) % n).collect()
    }

    /// Next seat after `from` still owing a decision this street.
    fn next_actor(&self, from: usize) -> Option<usize> {
        let bet = self.current_bet;
        next_eligible_seat(&self.players, from, |p| {
            p.can_act() && (!p.has_acted() || p.street_bet() < bet)
        })
    }

    /// Raises the table bet to `seat`'s street bet. A raise of at least the
    /// minimum reopens the action for everyone else; a short all-in does not.
    fn register_bet(&mut self, seat: usize) {
        let new_bet = self.players[seat].street_bet();
        if new_bet <= self.current_bet {
            return;
        }
        let raise_by = new_bet - self.current_bet;
        if raise_by >= self.min_raise {
            self.min_raise = raise_by;
            self.last_aggressor = Some(seat);
            for (i, p) in self.players.iter_mut().enumerate() {
                if i != seat {
                    p.mark_acted(false);
                }
            }
        }
        self.current_bet = new_bet;
    }

    fn betting_closed(&self) -> bool {
        let bet = self.current_bet;
        let actors: Vec<&Player> = self.players.iter().filter(|p| p.can_act()).collect();
        match actors.as_slice() {
            [] => true,
            [only] => only.street_bet() >= bet,
            _ => actors.iter().all(|p| p.has_acted() && p.street_bet() >= bet),
        }
    }

    fn advance(&mut self, from: usize) -> Result<(), GameError> {
        let live: Vec<usize> = (0..self.players.len())
            .filter(|&s| self.players[s].in_hand())
            .collect();
        if let [winner] = live.as_slice() {
            self.award_uncontested(*winner);
            return Ok(());
        }
        if self.betting_closed() {
            return self.finish_street();
        }
        match self.next_actor(from) {
            Some(seat) => {
                self.current = Some(seat);
                Ok(())
            }
            None => self.finish_street(),
        }
    }

    /// Closes the current street. Opens the next one if two or more players
    /// can still bet; otherwise deals the board out and goes to showdown.
    fn finish_street(&mut self) -> Result<(), GameError> {
        while let Some(street) = self.stage.street() {
            let Some(next) = street.next() else {
                return self.showdown();
            };
            self.open_street(next)?;
            if self.players.iter().filter(|p| p.can_act()).count() >= 2 {
                self.current = self.next_actor(self.button);
                return Ok(());
            }
        }
        Ok(())
    }

    fn open_street(&mut self, street: Street) -> Result<(), GameError> {
        for p in &mut self.players {
            p.reset_for_street();
        }
        self.current_bet = 0;
        self.min_raise = self.config.big_blind;
        self.last_aggressor = None;
        self.current = None;

        self.deck.burn()?;
        let cards = self.deck.deal(street.cards_dealt())?;
        self.community.extend(cards);
        self.stage = street.into();

        debug!(
            hand = self.hand_number,
            ?street,
            board = %crate::cards::format_cards(&self.community),
            pot = self.pot,
            "street dealt"
        );
        self.events.push(TableEvent::StreetChanged {
            street,
            community_cards: self.community.clone(),
            pot: self.pot,
        });
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        self.stage = Stage::Showdown;
        self.current = None;
        self.showdown_reached = true;

        let order = self.seats_from_button();
        let entries: Vec<(usize, Vec<Card>)> = order
            .iter()
            .filter(|&&s| self.players[s].in_hand())
            .filter_map(|&s| self.players[s].hole_cards().map(|h| (s, h.to_vec())))
            .collect();
        let ranked = rank_many(&entries, &self.community)?;
        let evaluation = |seat: usize| -> Option<&HandEvaluation> {
            ranked.ranked.iter().find(|(s, _)| *s == seat).map(|(_, ev)| ev)
        };

        let contributions: Vec<Contribution> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.committed() > 0)
            .map(|(seat, p)| Contribution {
                seat,
                amount: p.committed(),
                live: p.in_hand(),
            })
            .collect();
        let pots = build_pots(&contributions);

        let mut payouts = vec![0u32; self.players.len()];
        let mut results = Vec::with_capacity(pots.len());
        for pot in &pots {
            let best = pot
                .eligible
                .iter()
                .filter_map(|&s| evaluation(s).map(|ev| ev.strength))
                .max();
            // payout order: seat index, so odd chips go to the lowest seat
            let winners: Vec<usize> = (0..self.players.len())
                .filter(|s| pot.eligible.contains(s))
                .filter(|&s| evaluation(s).map(|ev| ev.strength) == best)
                .collect();
            for (&seat, share) in winners.iter().zip(split_pot(pot.amount, winners.len())) {
                payouts[seat] += share;
            }
            results.push(PotResult {
                amount: pot.amount,
                eligible: pot.eligible.iter().map(|&s| self.players[s].id().clone()).collect(),
                winners: winners.iter().map(|&s| self.players[s].id().clone()).collect(),
            });
        }

        let shown = ranked
            .ranked
            .iter()
            .map(|(seat, ev)| EvaluatedHand {
                player_id: self.players[*seat].id().clone(),
                category: ev.category(),
                name: ev.category().name().to_string(),
                cards: ev.cards.to_vec(),
            })
            .collect();
        self.side_pots = pots;
        self.settle(payouts, results, Some(shown));
        Ok(())
    }

    fn award_uncontested(&mut self, winner: usize) {
        let mut payouts = vec![0u32; self.players.len()];
        payouts[winner] = self.pot;
        let id = self.players[winner].id().clone();
        let result = PotResult {
            amount: self.pot,
            eligible: vec![id.clone()],
            winners: vec![id],
        };
        self.current = None;
        self.settle(payouts, vec![result], None);
    }

    fn settle(
        &mut self,
        payouts: Vec<u32>,
        pots: Vec<PotResult>,
        showdown: Option<Vec<EvaluatedHand>>,
    ) {
        for (p, &amount) in self.players.iter_mut().zip(&payouts) {
            p.add_chips(amount);
            p.reset_for_street();
        }
        let record = HandRecord {
            hand_id: self.hand_number.to_string(),
            hand_number: self.hand_number,
            seed: self.hand_seed,
            button: self.players[self.button].id().clone(),
            winners: pots.first().map(|p| p.winners.clone()).unwrap_or_default(),
            pot: self.pot,
            board: self.community.clone(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    id: p.id().clone(),
                    name: p.name().to_string(),
                    stack: p.stack(),
                    hole_cards: p.hole_cards().map(|h| h.to_vec()).unwrap_or_default(),
                    folded: p.is_folded(),
                    committed: p.committed(),
                })
                .collect(),
            showdown,
            pots,
            payouts: self
                .players
                .iter()
                .zip(&payouts)
                .filter(|(_, amount)| **amount > 0)
                .map(|(p, &amount)| Payout {
                    player_id: p.id().clone(),
                    amount,
                })
                .collect(),
            actions: std::mem::take(&mut self.actions),
            ts: None,
        };

        info!(
            hand = self.hand_number,
            pot = self.pot,
            winners = ?record.winners.iter().map(PlayerId::as_str).collect::<Vec<_>>(),
            showdown = record.showdown.is_some(),
            "hand settled"
        );
        self.pot = 0;
        self.current_bet = 0;
        self.stage = Stage::HandComplete;
        self.events.push(TableEvent::HandEnded(Box::new(record.clone())));
        self.history.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn table(players: &[(&str, u32)]) -> Table {
        let config = TableConfig {
            small_blind: 5,
            big_blind: 10,
            seed: Some(1),
            ..TableConfig::default()
        };
        let mut t = Table::new(config).unwrap();
        for (id, stack) in players {
            t.add_player(*id, id.to_uppercase(), *stack).unwrap();
        }
        t
    }

    fn id(s: &str) -> PlayerId {
        PlayerId::from(s)
    }

    #[test]
    fn config_rejects_bad_limits() {
        let too_many = TableConfig {
            max_players: 23,
            ..TableConfig::default()
        };
        assert!(matches!(too_many.validate(), Err(GameError::SeatingError(_))));
        let inverted = TableConfig {
            small_blind: 30,
            big_blind: 20,
            ..TableConfig::default()
        };
        assert!(Table::new(inverted).is_err());
    }

    #[test]
    fn three_handed_positions() {
        let mut t = table(&[("a", 500), ("b", 500), ("c", 500)]);
        let posting = t.start_hand().unwrap();
        assert_eq!(t.button(), 0);
        assert_eq!(posting.small_blind, (id("b"), 5));
        assert_eq!(posting.big_blind, (id("c"), 10));
        assert_eq!(t.current_player(), Some(&id("a")));
        assert_eq!(t.current_bet(), 10);
        assert_eq!(t.pot(), 15);
    }

    #[test]
    fn button_moves_each_hand() {
        let mut t = table(&[("a", 500), ("b", 500), ("c", 500)]);
        t.start_hand().unwrap();
        t.apply_action(&id("a"), PlayerAction::Fold).unwrap();
        t.apply_action(&id("b"), PlayerAction::Fold).unwrap();
        assert_eq!(t.stage(), Stage::HandComplete);
        t.start_hand().unwrap();
        assert_eq!(t.button(), 1);
        assert_eq!(t.current_player(), Some(&id("b")));
    }

    #[test]
    fn big_blind_gets_option_after_limps() {
        let mut t = table(&[("a", 500), ("b", 500), ("c", 500)]);
        t.start_hand().unwrap();
        t.apply_action(&id("a"), PlayerAction::Call).unwrap();
        t.apply_action(&id("b"), PlayerAction::Call).unwrap();
        assert_eq!(t.stage(), Stage::Preflop);
        assert_eq!(t.current_player(), Some(&id("c")));
        t.apply_action(&id("c"), PlayerAction::Raise(10)).unwrap();
        assert_eq!(t.current_bet(), 20);
        assert_eq!(t.current_player(), Some(&id("a")));
    }

    #[test]
    fn short_all_in_does_not_reopen() {
        // c (big blind) has 8 behind, less than a full raise of 10
        let mut t = table(&[("a", 500), ("b", 500), ("c", 18)]);
        t.start_hand().unwrap();
        t.apply_action(&id("a"), PlayerAction::Call).unwrap();
        t.apply_action(&id("b"), PlayerAction::Call).unwrap();
        t.apply_action(&id("c"), PlayerAction::AllIn).unwrap();
        assert_eq!(t.current_bet(), 18);
        assert_eq!(t.min_raise(), 10);
        assert_eq!(t.current_player(), Some(&id("a")));
    }

    #[test]
    fn stacked_deck_deals_in_order() {
        let mut t = table(&[("a", 500), ("b", 500)]);
        let top = parse_cards("As Ah Kd Kc 2c 7h 8h 9h 3c Td 4c Jd").unwrap();
        t.start_hand_with_deck(Deck::stacked(&top).unwrap()).unwrap();
        // heads-up hand one: button a, so b is dealt first
        let b = t.player(&id("b")).unwrap().hole_cards().unwrap();
        let a = t.player(&id("a")).unwrap().hole_cards().unwrap();
        assert_eq!(b.to_vec(), top[0..2].to_vec());
        assert_eq!(a.to_vec(), top[2..4].to_vec());

        t.apply_action(&id("a"), PlayerAction::Call).unwrap();
        t.apply_action(&id("b"), PlayerAction::Check).unwrap();
        assert_eq!(t.community_cards(), &top[5..8]);
    }

    #[test]
    fn view_redacts_other_hands() {
        let mut t = table(&[("a", 500), ("b", 500)]);
        t.start_hand().unwrap();
        let v = t.view(Some(&id("a")));
        assert_ne!(v.player(&id("a")).unwrap().hole_cards[0], HIDDEN_CARD);
        assert_eq!(v.player(&id("b")).unwrap().hole_cards, vec!["??", "??"]);
        let spectator = t.view(None);
        assert!(spectator
            .players
            .iter()
            .all(|p| p.hole_cards == vec![HIDDEN_CARD, HIDDEN_CARD]));
    }
}
