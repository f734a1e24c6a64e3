pub mod deck;
pub mod engine;
pub mod prompts;
pub mod reading;
pub mod spread;
pub mod video;

pub use crate::domain::model::{Card, Reading, Spread};
pub use crate::domain::ports::{ConfigProvider, GenerationClient};
pub use crate::utils::error::Result;
