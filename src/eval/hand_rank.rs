use serde::{Deserialize, Serialize};

/// Категория руки по кратностям рангов.
///
/// Стриты и флеши не распознаются, поэтому значения 4 и 5 не используются.
/// Порядок объявления совпадает с силой руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// Меньше 5 карт – оценивать нечего.
    Incomplete,
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
}

impl HandCategory {
    /// Числовой ранг категории, по нему сравниваются руки.
    pub fn rank(self) -> HandRank {
        let value = match self {
            HandCategory::Incomplete => 0,
            HandCategory::HighCard => 0,
            HandCategory::OnePair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
        };
        HandRank(value)
    }
}

/// Сравнимый ранг руки. Кикеры не учитываются: равные категории = равные руки.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct HandRank(pub u8);

impl HandRank {
    /// Самый слабый возможный ранг (он же у неполной руки).
    pub const LOWEST: HandRank = HandRank(0);

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Результат оценки руки: категория, ранг и название для показа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluation {
    pub category: HandCategory,
    pub rank: HandRank,
    pub name: String,
}

impl HandEvaluation {
    pub fn incomplete() -> Self {
        Self {
            category: HandCategory::Incomplete,
            rank: HandRank::LOWEST,
            name: "Incomplete Hand".to_string(),
        }
    }
}
