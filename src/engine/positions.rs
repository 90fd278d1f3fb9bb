use crate::domain::{Player, SeatIndex};

/// Следующий не сфолдивший игрок строго после `from` по кругу.
///
/// Если претендент один и это сам `from`, вернётся `from`.
/// `None` – претендентов нет вовсе.
pub fn next_contender(players: &[Player], from: SeatIndex) -> Option<SeatIndex> {
    let n = players.len();
    if n == 0 {
        return None;
    }

    (1..=n)
        .map(|offset| (from + offset) % n)
        .find(|&seat| players[seat].is_contender())
}

/// Кто ходит первым на стадии: первый претендент слева от дилера.
pub fn first_to_act(players: &[Player], dealer: SeatIndex) -> Option<SeatIndex> {
    next_contender(players, dealer)
}

/// Кнопка дилера переходит на следующее место.
pub fn next_dealer(player_count: usize, dealer: SeatIndex) -> SeatIndex {
    if player_count == 0 {
        0
    } else {
        (dealer + 1) % player_count
    }
}
