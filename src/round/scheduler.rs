use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;
use crate::engine::GameState;

/// Привязка шага бота к состоянию, для которого он запланирован.
///
/// Любое принятое действие, старт или отмена раунда делают билет устаревшим.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TurnTicket {
    /// Эпоха контроллера (растёт на старте, расчёте и отмене раунда).
    pub epoch: u64,
    pub turn_counter: u64,
    pub seat: SeatIndex,
}

impl TurnTicket {
    /// Билет всё ещё соответствует состоянию: та же эпоха, тот же ход, тот же игрок.
    pub fn is_current(&self, epoch: u64, state: &GameState) -> bool {
        self.epoch == epoch
            && self.turn_counter == state.turn_counter
            && state.stage.is_betting()
            && state.current_turn == self.seat
    }
}

/// Отложенный шаг планировщика.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Проверить, завершена ли стадия, и если да – перейти дальше.
    MaybeAdvance,
    /// Дать боту сходить, если билет ещё актуален.
    MaybeBotAct(TurnTicket),
}

/// FIFO-очередь шагов. Никаких таймеров: задержку бота делает драйвер снаружи.
#[derive(Debug, Default)]
pub struct StepQueue {
    steps: VecDeque<Step>,
}

impl StepQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push_back(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Снять первый `MaybeAdvance`, не трогая шаги ботов.
    pub fn pop_advance(&mut self) -> Option<Step> {
        let pos = self
            .steps
            .iter()
            .position(|s| matches!(s, Step::MaybeAdvance))?;
        self.steps.remove(pos)
    }

    /// Первый запланированный шаг бота (возможно, уже устаревший).
    pub fn peek_bot(&self) -> Option<TurnTicket> {
        self.steps.iter().find_map(|s| match s {
            Step::MaybeBotAct(ticket) => Some(*ticket),
            Step::MaybeAdvance => None,
        })
    }

    /// Убрать конкретный билет из очереди. `true`, если он там был.
    pub fn take_bot(&mut self, ticket: &TurnTicket) -> bool {
        let pos = self
            .steps
            .iter()
            .position(|s| matches!(s, Step::MaybeBotAct(t) if t == ticket));
        match pos {
            Some(pos) => {
                self.steps.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}
