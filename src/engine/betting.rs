use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::positions::next_contender;
use crate::engine::state::GameState;

/// Состояние ставок на текущей стадии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Максимальная ставка стадии, до которой должны дотянуться игроки.
    pub current_bet: Chips,
    /// Место, открывшее стадию (первый претендент слева от дилера).
    /// Рейз его не сдвигает; меняется только если этот игрок сфолдил.
    pub cycle_anchor: SeatIndex,
    /// Сколько действий сделано на стадии.
    pub actions_in_cycle: u32,
}

impl BettingState {
    pub fn new(anchor: SeatIndex) -> Self {
        Self {
            current_bet: Chips::ZERO,
            cycle_anchor: anchor,
            actions_in_cycle: 0,
        }
    }

    pub fn mark_acted(&mut self) {
        self.actions_in_cycle += 1;
    }

    /// Эффективный рейз: растёт только ставка стадии. Остальные обязаны
    /// её уравнять, а ход всё равно должен вернуться к открывшему стадию.
    pub fn on_raise(&mut self, increment: Chips) {
        self.current_bet += increment;
        self.actions_in_cycle += 1;
    }

    /// Сфолдил игрок, открывавший стадию: его место занимает следующий претендент.
    /// Счётчик не растёт, иначе новый якорь закрыл бы стадию, ещё не сходив.
    pub fn on_anchor_folded(&mut self, new_anchor: SeatIndex) {
        self.cycle_anchor = new_anchor;
    }

    /// Ход вернулся к месту, открывшему стадию, и кто-то уже действовал.
    pub fn is_cycle_complete(&self, turn: SeatIndex) -> bool {
        self.actions_in_cycle > 0 && turn == self.cycle_anchor
    }
}

/// Сколько игроку нужно доплатить до текущей ставки стадии.
pub fn amount_to_call(state: &GameState, seat: SeatIndex) -> Chips {
    state
        .betting
        .current_bet
        .saturating_sub(state.players[seat].stage_contribution)
}

/// Fold: игрок выбывает до конца раунда, поставленное остаётся в банке.
pub(crate) fn apply_fold(state: &mut GameState, seat: SeatIndex) -> Chips {
    let player = &mut state.players[seat];
    player.folded = true;
    player.active = false;

    let next = next_contender(&state.players, seat).unwrap_or(seat);
    if seat == state.betting.cycle_anchor {
        state.betting.on_anchor_folded(next);
    } else {
        state.betting.mark_acted();
    }
    state.current_turn = next;

    Chips::ZERO
}

/// Call: доплатить до текущей ставки, но не больше стека.
/// Неполный call – это all-in, текущая ставка при этом не растёт.
pub(crate) fn apply_call(state: &mut GameState, seat: SeatIndex) -> Chips {
    let needed = amount_to_call(state, seat);
    let moved = state.players[seat].commit(needed);

    state.betting.mark_acted();
    pass_turn(state, seat);
    moved
}

/// Raise: сначала call, затем `amount` сверху; всё вместе ограничено стеком.
/// Ставка стадии растёт на фактическую надбавку сверх call.
pub(crate) fn apply_raise(state: &mut GameState, seat: SeatIndex, amount: Chips) -> Chips {
    let needed = amount_to_call(state, seat);
    let moved = state.players[seat].commit(needed + amount);
    let increment = moved.saturating_sub(needed);

    if increment.is_zero() {
        state.betting.mark_acted();
    } else {
        state.betting.on_raise(increment);
    }
    pass_turn(state, seat);
    moved
}

/// All-in: весь стек, как raise (если стек больше call) или как call.
pub(crate) fn apply_all_in(state: &mut GameState, seat: SeatIndex) -> Chips {
    let needed = amount_to_call(state, seat);
    let stack = state.players[seat].stack;

    if stack > needed {
        apply_raise(state, seat, stack - needed)
    } else {
        apply_call(state, seat)
    }
}

fn pass_turn(state: &mut GameState, seat: SeatIndex) {
    state.current_turn = next_contender(&state.players, seat).unwrap_or(seat);
}
