pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ReaderConfig;

pub use adapters::bedrock::{BedrockClient, BedrockOptions};
pub use app::presenter::Presenter;
pub use crate::core::{deck::Deck, engine::TarotEngine};
pub use utils::error::{Result, TarotError};
