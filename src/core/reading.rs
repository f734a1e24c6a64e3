use crate::core::prompts;
use crate::domain::model::{outcome_text, Card, Reading, Spread};
use crate::domain::ports::GenerationClient;
use crate::utils::error::Result;

/// Two chained text requests: the spread rationale, then the interpretation
/// that quotes it. A fault in either step is carried forward as its warning
/// text rather than aborting the reading.
pub struct ReadingComposer<'a, C: GenerationClient> {
    client: &'a C,
    model_id: &'a str,
}

impl<'a, C: GenerationClient> ReadingComposer<'a, C> {
    pub fn new(client: &'a C, model_id: &'a str) -> Self {
        Self { client, model_id }
    }

    pub async fn rationale(&self, question: &str, spread: Spread) -> Result<String> {
        let prompt = prompts::spread_rationale_prompt(question, spread);
        let outcome = self.client.invoke(&prompt, self.model_id).await?;
        if let Err(fault) = &outcome {
            tracing::warn!("Rationale step returned {:?}; embedding its notice", fault);
        }
        Ok(outcome_text(&outcome))
    }

    pub async fn interpret(
        &self,
        question: &str,
        spread: Spread,
        cards: &[Card],
        rationale: &str,
    ) -> Result<String> {
        let prompt = prompts::interpretation_prompt(question, spread, cards, rationale);
        tracing::debug!("Interpretation prompt is {} chars", prompt.len());

        let outcome = self.client.invoke(&prompt, self.model_id).await?;
        if let Err(fault) = &outcome {
            tracing::warn!("Interpretation step returned {:?}", fault);
        }
        Ok(outcome_text(&outcome))
    }

    pub async fn compose(
        &self,
        question: &str,
        spread: Spread,
        cards: Vec<Card>,
    ) -> Result<Reading> {
        let rationale = self.rationale(question, spread).await?;
        let text = self.interpret(question, spread, &cards, &rationale).await?;

        Ok(Reading {
            question: question.to_string(),
            spread,
            cards,
            rationale,
            text,
        })
    }
}
