use crate::app::presenter::Presenter;
use crate::core::deck::Deck;
use crate::core::reading::ReadingComposer;
use crate::core::spread::SpreadSizer;
use crate::core::video::VideoDirector;
use crate::domain::model::Reading;
use crate::domain::ports::{ConfigProvider, GenerationClient};
use crate::utils::error::Result;
use std::io::Write;

/// Runs one reading end to end: size the spread, draw, compose, present.
pub struct TarotEngine<C: GenerationClient, P: ConfigProvider> {
    client: C,
    config: P,
    deck: Deck,
}

impl<C: GenerationClient, P: ConfigProvider> TarotEngine<C, P> {
    pub fn new(client: C, config: P) -> Self {
        let deck = Deck::new(config.include_reversed());
        Self {
            client,
            config,
            deck,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn run<W: Write>(
        &self,
        question: &str,
        presenter: &mut Presenter<W>,
    ) -> Result<Reading> {
        tracing::info!("Starting tarot reading");
        let text_model = self.config.text_model();

        // 決定牌陣
        presenter.sizing_spread()?;
        let spread = SpreadSizer::new(&self.client, text_model)
            .determine(question)
            .await?;
        presenter.spread_chosen(spread)?;

        // 抽牌
        presenter.drawing()?;
        let cards = self.deck.draw(spread.card_count())?;
        presenter.cards_drawn(&cards)?;

        // 解讀
        presenter.interpreting()?;
        let reading = ReadingComposer::new(&self.client, text_model)
            .compose(question, spread, cards)
            .await?;
        presenter.reading(&reading.text)?;

        if self.config.video_enabled() {
            presenter.video_started()?;
            let outcome = VideoDirector::new(&self.client, self.config.video_model())
                .request(question, &reading.cards)
                .await?;
            presenter.video_result(&outcome)?;
        }

        presenter.farewell()?;
        tracing::info!("Reading complete: {} cards", reading.cards.len());
        Ok(reading)
    }
}
