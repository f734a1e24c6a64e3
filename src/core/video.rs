use crate::core::prompts;
use crate::domain::model::{Card, Generation, Outcome};
use crate::domain::ports::GenerationClient;
use crate::utils::error::Result;

/// Optional extension: asks the video model for a short clip of the spread.
pub struct VideoDirector<'a, C: GenerationClient> {
    client: &'a C,
    model_id: &'a str,
}

impl<'a, C: GenerationClient> VideoDirector<'a, C> {
    pub fn new(client: &'a C, model_id: &'a str) -> Self {
        Self { client, model_id }
    }

    pub async fn request(&self, question: &str, cards: &[Card]) -> Result<Outcome> {
        let prompt = prompts::video_scene_prompt(question, cards);
        let outcome = self.client.invoke(&prompt, self.model_id).await?;

        match &outcome {
            Ok(Generation::Video(artifact)) => {
                tracing::info!("Video request accepted: {:?}", artifact.location)
            }
            Ok(Generation::Text(_)) => {
                tracing::warn!("Video model {} answered with text", self.model_id)
            }
            Err(fault) => tracing::warn!("Video request fault: {:?}", fault),
        }
        Ok(outcome)
    }
}
