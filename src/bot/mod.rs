//! Боты: решение fold/call/raise по видимой информации.
//!
//! Бот не имеет привилегированного пути – его решение превращается в обычный
//! `PlayerAction` и подаётся через тот же вход, что и действие человека.

pub mod policy;

pub use policy::{choose_action, decide, raise_amount, BotDecision, BotView};
