use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandEvaluation};

/// Минимум карт для оценки руки.
pub const MIN_CARDS: usize = 5;

/// Оценить руку игрока: карманные карты + открытые общие.
pub fn evaluate_best_hand(hole: &[Card], community: &[Card]) -> HandEvaluation {
    let mut all_cards = Vec::with_capacity(hole.len() + community.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(community);
    evaluate_hand(&all_cards)
}

/// Оценка набора из 5–7 карт только по кратностям рангов
/// (каре, фулл-хаус, сет, две пары, пара, старшая карта).
pub fn evaluate_hand(cards: &[Card]) -> HandEvaluation {
    if cards.len() < MIN_CARDS {
        return HandEvaluation::incomplete();
    }

    let groups = rank_groups(cards);
    let (top_rank, top_count) = groups[0];
    let second = groups.get(1).copied();

    let (category, name) = match (top_count, second) {
        (c, _) if c >= 4 => (
            HandCategory::FourOfAKind,
            format!("Four of a Kind ({})", top_rank.plural_name()),
        ),
        (3, Some((pair_rank, 2))) => (
            HandCategory::FullHouse,
            format!(
                "Full House ({} over {})",
                top_rank.plural_name(),
                pair_rank.plural_name()
            ),
        ),
        (3, _) => (
            HandCategory::ThreeOfAKind,
            format!("Three of a Kind ({})", top_rank.plural_name()),
        ),
        (2, Some((low_pair, 2))) => (
            HandCategory::TwoPair,
            format!(
                "Two Pair ({} and {})",
                top_rank.plural_name(),
                low_pair.plural_name()
            ),
        ),
        (2, _) => (
            HandCategory::OnePair,
            format!("Pair of {}", top_rank.plural_name()),
        ),
        _ => (
            HandCategory::HighCard,
            format!("High Card ({})", top_rank.plural_name()),
        ),
    };

    HandEvaluation {
        category,
        rank: category.rank(),
        name,
    }
}

/// Группы (ранг, сколько карт) по убыванию кратности, затем ранга.
fn rank_groups(cards: &[Card]) -> Vec<(Rank, u8)> {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank as usize] += 1;
    }

    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .filter(|r| counts[**r as usize] > 0)
        .map(|r| (*r, counts[*r as usize]))
        .collect();

    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    groups
}
