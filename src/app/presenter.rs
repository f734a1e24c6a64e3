use crate::core::prompts::join_cards;
use crate::domain::model::{Card, Generation, Outcome, Spread};
use crate::utils::error::Result;
use std::io::Write;

/// Console narration of a reading. Output is for people, not parsers.
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn sizing_spread(&mut self) -> Result<()> {
        writeln!(self.out, "\n🔮 Determining the best tarot spread for your question...")?;
        Ok(())
    }

    pub fn spread_chosen(&mut self, spread: Spread) -> Result<()> {
        writeln!(self.out, "\n📜 Spread chosen: {}-card spread", spread)?;
        Ok(())
    }

    pub fn drawing(&mut self) -> Result<()> {
        writeln!(self.out, "🔀 Drawing your tarot cards...")?;
        Ok(())
    }

    pub fn cards_drawn(&mut self, cards: &[Card]) -> Result<()> {
        writeln!(self.out, "🃏 Cards drawn: {}\n", join_cards(cards))?;
        Ok(())
    }

    pub fn interpreting(&mut self) -> Result<()> {
        writeln!(self.out, "📖 Interpreting your reading...\n")?;
        Ok(())
    }

    pub fn reading(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "\n🔮 Interpretation:\n")?;
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn video_started(&mut self) -> Result<()> {
        writeln!(self.out, "\n🎥 Generating your mystical tarot video...")?;
        Ok(())
    }

    pub fn video_result(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Ok(Generation::Video(artifact)) => match &artifact.location {
                Some(location) => writeln!(
                    self.out,
                    "\n✨ Your tarot video is ready! Watch it here: {}",
                    location
                )?,
                None => writeln!(
                    self.out,
                    "\n✨ Your tarot video request was accepted: {}",
                    artifact.raw
                )?,
            },
            Ok(Generation::Text(text)) => writeln!(self.out, "\n🎥 {}", text)?,
            Err(fault) => writeln!(self.out, "\n{}", fault)?,
        }
        Ok(())
    }

    pub fn farewell(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "\n🌟 Thank you for consulting the tarot. May clarity be with you! 🌟\n"
        )?;
        self.out.flush()?;
        Ok(())
    }
}
