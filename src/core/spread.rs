use crate::core::prompts;
use crate::domain::model::{Generation, Outcome, Spread};
use crate::domain::ports::GenerationClient;
use crate::utils::error::Result;

/// Only an exact "3" selects the small spread; everything else, faults
/// included, falls through to five cards.
pub fn spread_from_outcome(outcome: &Outcome) -> Spread {
    match outcome {
        Ok(Generation::Text(text)) if text.trim() == "3" => Spread::Three,
        _ => Spread::Five,
    }
}

pub struct SpreadSizer<'a, C: GenerationClient> {
    client: &'a C,
    model_id: &'a str,
}

impl<'a, C: GenerationClient> SpreadSizer<'a, C> {
    pub fn new(client: &'a C, model_id: &'a str) -> Self {
        Self { client, model_id }
    }

    pub async fn determine(&self, question: &str) -> Result<Spread> {
        let prompt = prompts::spread_size_prompt(question);
        let outcome = self.client.invoke(&prompt, self.model_id).await?;

        let spread = spread_from_outcome(&outcome);
        match &outcome {
            Ok(Generation::Text(text)) => {
                tracing::debug!("Spread sizer answered {:?}, using {}", text, spread)
            }
            Ok(Generation::Video(_)) => {
                tracing::warn!("Spread sizer got a video artifact, using {}", spread)
            }
            Err(fault) => tracing::warn!("Spread sizer fault ({:?}), using {}", fault, spread),
        }
        Ok(spread)
    }
}
