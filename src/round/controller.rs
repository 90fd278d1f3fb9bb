use log::{debug, info, warn};

use crate::bot::choose_action;
use crate::domain::{Deck, PlayerId, PlayerSeed, Stage, TableConfig};
use crate::engine::{
    self, AdvanceOutcome, EngineError, GameState, PlayerAction, RandomSource, Rejection,
    Settlement,
};
use crate::infra::SettlementLedger;
use crate::round::scheduler::{Step, StepQueue, TurnTicket};

/// Чем закончился шаг бота.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotStep {
    /// Бот сходил этим действием.
    Acted(PlayerAction),
    /// Билет устарел (или ходит не бот) – ничего не применено.
    Discarded(TurnTicket),
}

/// Владелец авторитетного состояния стола.
///
/// Все изменения идут через один вход: действие проверяется движком,
/// затем синхронно выполняются шаги `MaybeAdvance` (переход стадий и,
/// если включено, расчёт банка). Только после этого планируется ход бота.
pub struct RoundController {
    config: TableConfig,
    state: Option<GameState>,
    /// Растёт на каждой смене раунда; старые билеты ботов с ней не совпадут.
    epoch: u64,
    queue: StepQueue,
    settlements: Vec<Settlement>,
    ledger: Option<Box<dyn SettlementLedger + Send>>,
}

impl RoundController {
    pub fn new(config: TableConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            epoch: 0,
            queue: StepQueue::new(),
            settlements: Vec::new(),
            ledger: None,
        })
    }

    /// Подключить внешний учёт итогов раундов.
    pub fn with_ledger(mut self, ledger: Box<dyn SettlementLedger + Send>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Текущее состояние; `InsufficientState`, пока никого не посадили.
    pub fn state(&self) -> Result<&GameState, EngineError> {
        self.state.as_ref().ok_or(EngineError::InsufficientState)
    }

    /// Копия состояния для отображения.
    pub fn snapshot(&self) -> Option<GameState> {
        self.state.clone()
    }

    /// Итоги всех рассчитанных раундов, по порядку.
    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn pending_steps(&self) -> usize {
        self.queue.len()
    }

    /// Посадить игроков. Во время раунда нельзя.
    pub fn seat_players(&mut self, seeds: &[PlayerSeed]) -> Result<(), EngineError> {
        if let Some(state) = &self.state {
            if state.stage != Stage::Waiting {
                return Err(Rejection::RoundInProgress(state.stage).into());
            }
        }

        let state = GameState::seat_players(seeds, &self.config)?;
        info!("seated {} players", state.players.len());
        self.publish_new_epoch(state);
        Ok(())
    }

    pub fn start_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        let next = engine::start_round(self.state()?, rng)?;
        self.publish_new_epoch(next);
        self.schedule_bot();
        Ok(())
    }

    /// Старт с заранее сложенной колодой (тесты, реплей).
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), EngineError> {
        let next = engine::start_round_with_deck(self.state()?, deck)?;
        self.publish_new_epoch(next);
        self.schedule_bot();
        Ok(())
    }

    /// Единый вход для действий людей и ботов.
    ///
    /// При ошибке состояние и очередь не меняются.
    pub fn submit(&mut self, action: PlayerAction) -> Result<(), EngineError> {
        let next = match engine::apply_action(self.state()?, &action) {
            Ok(next) => next,
            Err(err) => {
                warn!("action from {} rejected: {}", action.player_id, err);
                return Err(err);
            }
        };

        self.state = Some(next);
        self.queue.push(Step::MaybeAdvance);
        self.drain_advances()?;
        self.schedule_bot();
        Ok(())
    }

    /// Рассчитать раунд вручную (когда `auto_settle` выключен)
    /// или с явно указанным победителем.
    pub fn settle(&mut self, winner: Option<&PlayerId>) -> Result<Settlement, EngineError> {
        let (next, settlement) = engine::settle(self.state()?, winner)?;
        self.publish_new_epoch(next);

        if let Some(ledger) = self.ledger.as_mut() {
            ledger.record(&settlement);
        }
        self.settlements.push(settlement.clone());
        Ok(settlement)
    }

    /// Отменить раунд: ставки вернуть, очередь шагов сбросить.
    /// Билеты, уже взятые драйвером, отбросит проверка эпохи.
    pub fn abandon_round(&mut self) -> Result<(), EngineError> {
        let next = engine::abandon_round(self.state()?)?;
        self.publish_new_epoch(next);
        if !self.queue.is_empty() {
            debug!("round abandoned, dropping {} pending steps", self.queue.len());
            self.queue.clear();
        }
        Ok(())
    }

    /// Билет бота, который ждёт исполнения (может оказаться устаревшим).
    pub fn next_bot_ticket(&self) -> Option<TurnTicket> {
        self.queue.peek_bot()
    }

    /// Исполнить шаг бота. Устаревший билет просто отбрасывается.
    pub fn run_bot_step<R: RandomSource>(
        &mut self,
        ticket: TurnTicket,
        rng: &mut R,
    ) -> Result<BotStep, EngineError> {
        self.queue.take_bot(&ticket);

        let state = self.state()?;
        if !ticket.is_current(self.epoch, state) {
            debug!(
                "stale bot step discarded: seat {}, turn {} (now epoch {}, turn {})",
                ticket.seat, ticket.turn_counter, self.epoch, state.turn_counter
            );
            return Ok(BotStep::Discarded(ticket));
        }

        let Some(action) = choose_action(state, rng) else {
            debug!("seat {} is not a bot, step discarded", ticket.seat);
            return Ok(BotStep::Discarded(ticket));
        };

        self.submit(action.clone())?;
        Ok(BotStep::Acted(action))
    }

    /// Прогнать все шаги ботов без задержек, пока ход не перейдёт к человеку
    /// или раунд не закончится. Возвращает число сделанных ботами ходов.
    pub fn run_until_idle<R: RandomSource>(&mut self, rng: &mut R) -> Result<usize, EngineError> {
        let mut acted = 0;
        while let Some(ticket) = self.next_bot_ticket() {
            if let BotStep::Acted(_) = self.run_bot_step(ticket, rng)? {
                acted += 1;
            }
        }
        Ok(acted)
    }

    fn publish_new_epoch(&mut self, state: GameState) {
        self.state = Some(state);
        self.epoch += 1;
    }

    /// Выполнить все `MaybeAdvance`. Единственное место, где раунд
    /// рассчитывается автоматически.
    fn drain_advances(&mut self) -> Result<(), EngineError> {
        while self.queue.pop_advance().is_some() {
            loop {
                let (next, outcome) = engine::advance(self.state()?);
                match outcome {
                    AdvanceOutcome::Pending => break,
                    AdvanceOutcome::Dealt(_) => self.state = Some(next),
                    AdvanceOutcome::Showdown | AdvanceOutcome::ReadyToSettle => {
                        self.state = Some(next);
                        break;
                    }
                }
            }

            if self.config.auto_settle && self.state()?.is_resolved() {
                self.settle(None)?;
            }
        }
        Ok(())
    }

    /// Если сейчас ход бота – поставить билет в очередь.
    fn schedule_bot(&mut self) {
        let Some(state) = &self.state else {
            return;
        };
        if state.is_resolved() {
            return;
        }
        let Some(player) = state.current_player() else {
            return;
        };
        if !player.is_bot() {
            return;
        }

        let ticket = TurnTicket {
            epoch: self.epoch,
            turn_counter: state.turn_counter,
            seat: state.current_turn,
        };
        debug!(
            "bot step scheduled: seat {}, turn {}",
            ticket.seat, ticket.turn_counter
        );
        self.queue.push(Step::MaybeBotAct(ticket));
    }
}
