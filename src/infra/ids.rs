use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::player::{PlayerId, BOT_ID_PREFIX};

/// Генерация синтетических id на основе монотонных счётчиков.
///
/// Люди приходят со своим id (адрес кошелька), а ботам id выдаём здесь.
#[derive(Debug)]
pub struct IdGenerator {
    bot_counter: AtomicU64,
}

impl IdGenerator {
    /// Счётчики начинаются с 1.
    pub fn new() -> Self {
        Self {
            bot_counter: AtomicU64::new(1),
        }
    }

    /// `BOT_1`, `BOT_2`, ... – по префиксу планировщик узнаёт бота.
    #[inline]
    pub fn next_bot_id(&self) -> PlayerId {
        let n = self.bot_counter.fetch_add(1, Ordering::Relaxed);
        PlayerId(format!("{BOT_ID_PREFIX}{n}"))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
