//! Prompt builders. Pure functions: structured input in, prompt text out.

use crate::domain::model::{Card, Spread};

pub fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn spread_size_prompt(question: &str) -> String {
    format!(
        "The user asked: '{question}'. \
         Based on the complexity of the question, respond ONLY with the number 3 or 5. \
         Use 3 for simple, past-present-future questions. \
         Use 5 for complex, multi-layered concerns that need extra insight. \
         Do NOT provide any explanation. Just return 3 or 5."
    )
}

pub fn spread_rationale_prompt(question: &str, spread: Spread) -> String {
    format!(
        "You are an experienced tarot reader with over 20 years of expertise in divination, \
         symbolism, and intuitive readings. \
         You deeply understand the historical significance of tarot spreads and how they apply \
         to different types of questions. \
         The user asked: '{question}'. \
         You determined that a {spread}-card spread is the most suitable choice. \
         Explain why this spread size is ideal for their question in a way that flows naturally \
         into the reading, as if you were guiding a real client."
    )
}

pub fn interpretation_prompt(
    question: &str,
    spread: Spread,
    cards: &[Card],
    rationale: &str,
) -> String {
    let cards = join_cards(cards);
    format!(
        "You are an experienced tarot reader with a deep understanding of esoteric wisdom, \
         divination, and spiritual guidance. \
         You are reading for a querent (the person asking the question). \
         The querent's question is: '{question}'. \
         A {spread}-card spread was chosen because: {rationale} \
         Now, interpret the reading by analyzing each of the following tarot cards in the \
         context of their question: {cards}. \
         For each card, provide a clear, insightful, and contextually relevant interpretation. \
         Then, conclude with a structured summary, highlighting key insights and takeaways \
         from the reading. \
         Your response should be engaging, intuitive, and sound like a genuine tarot reading \
         session, helping the querent find clarity and direction."
    )
}

pub fn video_scene_prompt(question: &str, cards: &[Card]) -> String {
    let cards = join_cards(cards);
    format!(
        "A mystical candlelit tarot reading scene. A hand slowly reveals the cards: {cards}. \
         Each card glows with an ethereal light, hinting at the secrets within. \
         As the last card is placed, magical golden energy swirls around it, revealing the \
         message: '{question}' - A fate to be unveiled. The final shot zooms into the tarot \
         spread, with a mystical aura surrounding it. Dreamlike lighting, soft camera movement, \
         and cinematic depth of field enhance the divination experience."
    )
}
