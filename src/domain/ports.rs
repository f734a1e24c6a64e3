use crate::domain::model::Outcome;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote generation service. Faults the service can express as data come
/// back inside `Outcome`; transport failures are `Err`.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn invoke(&self, prompt: &str, model_id: &str) -> Result<Outcome>;
}

pub trait ConfigProvider: Send + Sync {
    fn text_model(&self) -> &str;
    fn video_model(&self) -> &str;
    fn include_reversed(&self) -> bool;
    fn video_enabled(&self) -> bool;
}
