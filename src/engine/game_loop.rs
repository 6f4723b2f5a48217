use log::{debug, trace};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Dealer;
use crate::domain::hand::{HandSummary, Payout, Street};
use crate::domain::seat::{HoleCard, Seat};
use crate::domain::table::HandConfig;
use crate::domain::SeatIndex;
use crate::engine::actions::{ActionContext, ActionType, Actor, PlayerAction, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{ForcedBetKind, HandEventKind, HandHistory};
use crate::engine::limits::increment_bounds;
use crate::engine::positions::{clockwise_after, clockwise_from, next_seat};
use crate::engine::pot::Pot;
use crate::engine::validation::{legal_actions, validate_action};
use crate::eval::{Direction, Hand, Rankings};
use crate::variant::{forced_bets, min_bet, round_start_seat, WinType};

/// Статус раздачи для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary),
}

/// Результат одного шага `HandEngine::step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Выплаты, если раздача закончилась на этом шаге.
    pub results: Option<Vec<Payout>>,
    pub hand_done: bool,
}

/// Состояние одной раздачи.
///
/// Места с нулевым стеком на старте в раздаче не участвуют
/// (считаются сфолдившими, карт не получают).
#[derive(Debug)]
pub struct HandEngine<D: Dealer> {
    pub config: HandConfig,
    dealer: D,
    pub seats: Vec<Seat>,
    pub board: Vec<Card>,
    pub pot: Pot,
    pub betting: BettingState,
    /// Чей сейчас ход (seat).
    pub current_actor: Option<SeatIndex>,
    /// История раздачи.
    pub history: HandHistory,
    summary: Option<HandSummary>,
}

impl<D: Dealer> HandEngine<D> {
    /// Старт новой раздачи:
    /// - проверяет конфиг, стеки и колоду;
    /// - раздаёт карты первой улицы и ставит обязательные ставки;
    /// - находит первого ходящего (или сразу доигрывает, если ходить некому).
    pub fn start(config: HandConfig, stacks: &[Chips], mut dealer: D) -> Result<Self, EngineError> {
        config.validate()?;
        if stacks.len() != config.num_seats as usize {
            return Err(EngineError::InvalidConfig(format!(
                "стеков {}, а мест {}",
                stacks.len(),
                config.num_seats
            )));
        }

        let players = stacks.iter().filter(|s| !s.is_zero()).count();
        if players < 2 {
            return Err(EngineError::InsufficientPlayers(players));
        }

        dealer.reset();
        let needed = config.variant.cards_needed(players);
        if dealer.remaining() < needed {
            return Err(EngineError::DeckExhausted {
                needed,
                available: dealer.remaining(),
            });
        }

        let mut pot = Pot::new(config.button, config.num_seats);
        let mut seats = Vec::with_capacity(stacks.len());
        for (i, stack) in stacks.iter().enumerate() {
            let mut seat = Seat::new(i as SeatIndex, *stack);
            if stack.is_zero() {
                pot.fold(&mut seat);
            }
            seats.push(seat);
        }

        let first_street = config.variant.first_street();
        let mut engine = Self {
            betting: BettingState::new(first_street, min_bet(&config)),
            config,
            dealer,
            seats,
            board: Vec::new(),
            pot,
            current_actor: None,
            history: HandHistory::new(),
            summary: None,
        };

        engine.history.push(HandEventKind::HandStarted {
            variant: engine.config.variant,
            button: engine.config.button,
            stacks: stacks.to_vec(),
        });
        debug!(
            "hand started: {} button={} players={}",
            engine.config.variant, engine.config.button, players
        );

        let start_seat = engine.begin_street(first_street)?;
        engine.advance_from(start_seat)?;
        Ok(engine)
    }

    pub fn is_finished(&self) -> bool {
        self.summary.is_some()
    }

    pub fn summary(&self) -> Option<&HandSummary> {
        self.summary.as_ref()
    }

    pub fn street(&self) -> Street {
        self.betting.street
    }

    /// Вернуть дилера (например, чтобы сдать следующую раздачу).
    pub fn into_dealer(self) -> D {
        self.dealer
    }

    /// Допустимые действия для текущего ходящего.
    pub fn legal_actions(&self) -> Vec<ActionType> {
        match self.current_seat() {
            Some(seat) => legal_actions(seat, &self.betting),
            None => Vec::new(),
        }
    }

    /// Контекст для внешнего игрока, чей сейчас ход.
    pub fn action_context(&self) -> Option<ActionContext> {
        let seat = self.current_seat()?;
        let bounds = increment_bounds(&self.config, &self.betting, seat, self.pot.total());
        Some(ActionContext {
            seat: seat.position,
            street: self.betting.street,
            stack: seat.stack,
            owed: self.betting.owed(seat),
            current_bet: self.betting.current_bet,
            pot: self.pot.total(),
            min_increment: bounds.min,
            max_increment: bounds.max,
            hole_cards: seat.hole_cards.clone(),
            board: self.board.clone(),
        })
    }

    /// Один шаг: спросить ходящего игрока и применить его действие.
    ///
    /// Недопустимый ответ не переспрашивается – ошибка уходит вызывающему,
    /// состояние не меняется.
    pub fn step<A: Actor + ?Sized>(&mut self, actor: &mut A) -> Result<Step, EngineError> {
        if self.is_finished() {
            return Err(EngineError::HandComplete);
        }
        let ctx = self
            .action_context()
            .ok_or(EngineError::Internal("раздача идёт, но ходящего нет"))?;
        let legal = self.legal_actions();
        let kind = actor.act(&legal, &ctx);

        match self.apply_action(PlayerAction::new(ctx.seat, kind))? {
            HandStatus::Ongoing => Ok(Step {
                results: None,
                hand_done: false,
            }),
            HandStatus::Finished(summary) => Ok(Step {
                results: Some(summary.payouts),
                hand_done: true,
            }),
        }
    }

    /// Доиграть раздачу, спрашивая одного игрока за все места.
    pub fn play<A: Actor + ?Sized>(&mut self, actor: &mut A) -> Result<HandSummary, EngineError> {
        while !self.is_finished() {
            self.step(actor)?;
        }
        self.summary
            .clone()
            .ok_or(EngineError::Internal("раздача завершена без итога"))
    }

    /// Применить действие игрока. Возвращает статус раздачи (идёт / закончилась).
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<HandStatus, EngineError> {
        if self.is_finished() {
            return Err(EngineError::HandComplete);
        }

        let seat_idx = action.seat as usize;
        if seat_idx >= self.seats.len() {
            return Err(EngineError::InvalidSeat(action.seat));
        }

        // Проверяем, что сейчас ход этого seat.
        if self.current_actor != Some(action.seat) {
            return Err(EngineError::NotPlayersTurn(action.seat));
        }

        // Валидация до любых изменений.
        validate_action(
            &self.config,
            &self.seats[seat_idx],
            &action.kind,
            &self.betting,
            self.pot.total(),
        )?;

        let owed = self.betting.owed(&self.seats[seat_idx]);
        let paid = match action.kind {
            PlayerActionKind::Fold => {
                self.pot.fold(&mut self.seats[seat_idx]);
                Chips::ZERO
            }
            PlayerActionKind::Check => Chips::ZERO,
            PlayerActionKind::Call => self.put_in(action.seat, owed),
            PlayerActionKind::Bet(amount) | PlayerActionKind::Raise(amount) => {
                self.put_in(action.seat, owed + amount)
            }
            PlayerActionKind::AllIn => {
                let stack = self.seats[seat_idx].stack;
                self.put_in(action.seat, stack)
            }
        };
        self.seats[seat_idx].acted = true;

        let new_stack = self.seats[seat_idx].stack;
        trace!(
            "seat {} {:?}: paid {}, stack {}, pot {}",
            action.seat,
            action.kind,
            paid,
            new_stack,
            self.pot.total()
        );
        self.history.push(HandEventKind::PlayerActed {
            seat: action.seat,
            action: action.kind,
            paid,
            new_stack,
            pot_after: self.pot.total(),
        });

        self.advance_from(next_seat(action.seat, self.config.num_seats))
    }

    fn current_seat(&self) -> Option<&Seat> {
        if self.is_finished() {
            return None;
        }
        self.current_actor.and_then(|s| self.seats.get(s as usize))
    }

    /// Поставить фишки на текущей улице. Если ставка выросла –
    /// остальные активные места снова должны ответить.
    fn put_in(&mut self, seat: SeatIndex, chips: Chips) -> Chips {
        let idx = seat as usize;
        let paid = self.pot.contribute(&mut self.seats[idx], chips);
        self.seats[idx].round_bet += paid;

        if self.betting.on_contribution(seat, self.seats[idx].round_bet) {
            for other in self.seats.iter_mut().filter(|s| s.position != seat) {
                if other.is_active() {
                    other.acted = false;
                }
            }
        }
        paid
    }

    /// Найти следующего ходящего или перейти дальше по улицам.
    fn advance_from(&mut self, mut scan_start: SeatIndex) -> Result<HandStatus, EngineError> {
        loop {
            let contesting: Vec<SeatIndex> = self
                .seats
                .iter()
                .filter(|s| s.is_contesting())
                .map(|s| s.position)
                .collect();
            if let [winner] = contesting.as_slice() {
                return Ok(self.finish_uncontested(*winner));
            }

            if self.betting_closed() {
                for seat in self.seats.iter_mut() {
                    seat.acted = true;
                }
            }

            let next = clockwise_from(scan_start, self.config.num_seats)
                .into_iter()
                .find(|&s| self.seats[s as usize].can_act());
            if let Some(seat) = next {
                self.current_actor = Some(seat);
                return Ok(HandStatus::Ongoing);
            }

            self.current_actor = None;
            match self.config.variant.next_street(self.betting.street) {
                Some(street) => scan_start = self.begin_street(street)?,
                None => return self.finish_showdown(),
            }
        }
    }

    /// Ставить больше некому: активных нет, или единственный активный
    /// никому ничего не должен.
    fn betting_closed(&self) -> bool {
        let mut active = self.seats.iter().filter(|s| s.is_active());
        match (active.next(), active.next()) {
            (None, _) => true,
            (Some(only), None) => self.betting.owed(only).is_zero(),
            _ => false,
        }
    }

    /// Новая улица: раздать карты, сбросить флаги, поставить обязательные
    /// ставки. Возвращает место, с которого искать первого ходящего.
    fn begin_street(&mut self, street: Street) -> Result<SeatIndex, EngineError> {
        self.betting = BettingState::new(street, min_bet(&self.config));
        for seat in self.seats.iter_mut() {
            seat.round_bet = Chips::ZERO;
            seat.acted = false;
        }
        if street != self.config.variant.first_street() {
            self.history.push(HandEventKind::StreetChanged { street });
        }
        debug!("street {} begins, pot {}", street, self.pot.total());

        self.deal(street)?;

        let forced = forced_bets(&self.config, street, &self.seats);
        for &(seat, amount) in &forced.antes {
            let paid = self.pot.contribute(&mut self.seats[seat as usize], amount);
            self.history.push(HandEventKind::ForcedBetPosted {
                seat,
                kind: ForcedBetKind::Ante,
                amount: paid,
            });
        }
        let blinds = [
            (forced.small_blind, ForcedBetKind::SmallBlind),
            (forced.big_blind, ForcedBetKind::BigBlind),
            (forced.bring_in, ForcedBetKind::BringIn),
        ];
        for (bet, kind) in blinds {
            if let Some((seat, amount)) = bet {
                let paid = self.put_in(seat, amount);
                // bring-in считается ходом; блайнды сохраняют право хода
                if kind == ForcedBetKind::BringIn {
                    self.seats[seat as usize].acted = true;
                }
                self.history.push(HandEventKind::ForcedBetPosted { seat, kind, amount: paid });
            }
        }

        Ok(round_start_seat(&self.config, street, &self.seats, &forced))
    }

    /// Раздать карты улицы по часовой, начиная после баттона.
    fn deal(&mut self, street: Street) -> Result<(), EngineError> {
        let mut plan = self.config.variant.deal_plan(street);
        let order: Vec<SeatIndex> = clockwise_after(self.config.button, self.config.num_seats)
            .into_iter()
            .filter(|&s| self.seats[s as usize].is_contesting())
            .collect();

        // Седьмая улица: если колоды не хватает всем, сдаём одну общую карту.
        let per_seat = plan.concealed + plan.exposed;
        if self.config.variant.is_stud() && per_seat * order.len() > self.dealer.remaining() {
            plan.concealed = 0;
            plan.exposed = 0;
            plan.board = 1;
        }

        let rounds = std::iter::repeat(false)
            .take(plan.concealed)
            .chain(std::iter::repeat(true).take(plan.exposed));
        for exposed in rounds {
            for &seat in &order {
                let card = self.pop_one()?;
                let hole = if exposed {
                    HoleCard::exposed(card)
                } else {
                    HoleCard::concealed(card)
                };
                self.seats[seat as usize].hole_cards.push(hole);
                self.history.push(HandEventKind::HoleCardsDealt {
                    seat,
                    cards: vec![hole],
                });
            }
        }

        if plan.board > 0 {
            let cards = self.dealer.pop_cards(plan.board);
            if cards.len() < plan.board {
                return Err(EngineError::DeckExhausted {
                    needed: plan.board,
                    available: cards.len(),
                });
            }
            self.board.extend_from_slice(&cards);
            self.history.push(HandEventKind::BoardDealt { street, cards });
        }
        Ok(())
    }

    fn pop_one(&mut self) -> Result<Card, EngineError> {
        self.dealer
            .pop_cards(1)
            .pop()
            .ok_or(EngineError::DeckExhausted {
                needed: 1,
                available: 0,
            })
    }

    fn finish_uncontested(&mut self, winner: SeatIndex) -> HandStatus {
        let payout = self.pot.uncontested(winner);
        debug!("seat {} wins {} uncontested", winner, payout.chips);
        self.finish(vec![payout], false)
    }

    /// Шоудаун: ранжировать руки всех оставшихся и поделить банк.
    fn finish_showdown(&mut self) -> Result<HandStatus, EngineError> {
        let variant = self.config.variant;
        let mut highs: Vec<(SeatIndex, Hand)> = Vec::new();
        let mut lows: Vec<(SeatIndex, Hand)> = Vec::new();

        for seat in self.seats.iter().filter(|s| s.is_contesting()) {
            let hole = seat.cards();
            let high = variant.high_hand(&hole, &self.board);
            let low = variant.low_hand(&hole, &self.board);

            self.history.push(HandEventKind::ShowdownReveal {
                seat: seat.position,
                cards: hole,
                high: high.as_ref().map(|h| h.description.clone()),
                low: low.as_ref().map(|h| h.description.clone()),
            });
            if let Some(h) = high {
                highs.push((seat.position, h));
            }
            if let Some(l) = low {
                lows.push((seat.position, l));
            }
        }

        let high_rankings = match variant.win_type() {
            WinType::High | WinType::HighLow => Some(Rankings::from_hands(&highs, Direction::High)),
            WinType::Low => None,
        };
        let low_rankings = match variant.win_type() {
            WinType::Low | WinType::HighLow => Some(Rankings::from_hands(&lows, Direction::Low)),
            WinType::High => None,
        };

        let payouts = self.pot.payout(high_rankings.as_ref(), low_rankings.as_ref());
        debug!("showdown on {}: {} payouts", self.betting.street, payouts.len());
        Ok(self.finish(payouts, true))
    }

    fn finish(&mut self, payouts: Vec<Payout>, showdown: bool) -> HandStatus {
        for p in &payouts {
            if let Some(seat) = self.seats.get_mut(p.seat as usize) {
                seat.stack += p.chips;
            }
            self.history.push(HandEventKind::PotAwarded {
                seat: p.seat,
                amount: p.chips,
                share: p.share,
            });
        }

        let total_pot = self.pot.total();
        self.history.push(HandEventKind::HandFinished { total_pot });
        self.current_actor = None;

        let summary = HandSummary {
            street_reached: self.betting.street,
            showdown,
            board: self.board.clone(),
            total_pot,
            payouts,
            final_stacks: self.seats.iter().map(|s| s.stack).collect(),
        };
        self.summary = Some(summary.clone());
        HandStatus::Finished(summary)
    }
}
