use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;

use crate::engine::{EngineError, RandomSource};
use crate::round::controller::{BotStep, RoundController};

/// Асинхронный исполнитель ходов ботов с косметической паузой.
///
/// Пауза делается без удержания блокировки: пока бот "думает", человек
/// может сходить или раунд могут отменить. После паузы билет проверяется
/// заново, устаревший отбрасывается.
#[derive(Clone)]
pub struct BotDriver {
    controller: Arc<Mutex<RoundController>>,
    delay: Duration,
}

impl BotDriver {
    pub fn new(controller: Arc<Mutex<RoundController>>, delay: Duration) -> Self {
        Self { controller, delay }
    }

    /// Пауза берётся из `bot_delay_ms` конфига стола.
    pub async fn from_config(controller: Arc<Mutex<RoundController>>) -> Self {
        let delay = Duration::from_millis(controller.lock().await.config().bot_delay_ms);
        Self::new(controller, delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Один шаг бота. `None` – в очереди нет шагов ботов.
    pub async fn step<R: RandomSource>(
        &self,
        rng: &mut R,
    ) -> Result<Option<BotStep>, EngineError> {
        let ticket = self.controller.lock().await.next_bot_ticket();
        let Some(ticket) = ticket else {
            return Ok(None);
        };

        debug!("bot at seat {} thinking for {:?}", ticket.seat, self.delay);
        tokio::time::sleep(self.delay).await;

        let mut controller = self.controller.lock().await;
        controller.run_bot_step(ticket, rng).map(Some)
    }

    /// Крутить шаги ботов, пока очередь не опустеет. Возвращает число ходов ботов.
    pub async fn run_until_idle<R: RandomSource>(&self, rng: &mut R) -> Result<usize, EngineError> {
        let mut acted = 0;
        while let Some(step) = self.step(rng).await? {
            if let BotStep::Acted(_) = step {
                acted += 1;
            }
        }
        Ok(acted)
    }
}
