use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Колода карт. Верх колоды – начало вектора, раздача идёт с начала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода из заранее заданных карт (тесты, реплей).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять n карт сверху. Если карт меньше – отдаём сколько есть.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        self.cards.drain(..take).collect()
    }
}

/// Новая неперемешанная колода.
pub fn generate_deck() -> Deck {
    Deck::standard_52()
}

/// Перемешать колоду (Fisher-Yates внутри `RandomSource`). Исходная колода не меняется.
pub fn shuffle_deck<R: RandomSource>(deck: &Deck, rng: &mut R) -> Deck {
    let mut shuffled = deck.clone();
    rng.shuffle(&mut shuffled.cards);
    shuffled
}

/// Раздать `num_players` рук по `cards_per_player` карт по кругу:
/// первая карта каждому, затем вторая каждому и т.д.
///
/// Используются первые `num_players * cards_per_player` карт колоды.
/// Если карт не хватает, последние руки получаются короче.
pub fn deal_cards(deck: &[Card], num_players: usize, cards_per_player: usize) -> Vec<Vec<Card>> {
    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(cards_per_player); num_players];
    let mut next = deck.iter();

    for _ in 0..cards_per_player {
        for hand in hands.iter_mut() {
            if let Some(card) = next.next() {
                hand.push(*card);
            }
        }
    }

    hands
}
