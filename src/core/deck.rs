use crate::domain::model::Card;
use crate::utils::error::{Result, TarotError};
use rand::seq::SliceRandom;
use rand::Rng;

pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgment",
    "The World",
];

pub const SUITS: [&str; 4] = ["Cups", "Wands", "Swords", "Pentacles"];

pub const RANKS: [&str; 14] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Page", "Knight", "Queen", "King",
];

pub const UPRIGHT_CARD_COUNT: usize = MAJOR_ARCANA.len() + SUITS.len() * RANKS.len();

// 小阿爾克那的名稱為「花色 牌階」
const MINOR_ARCANA: [&str; SUITS.len() * RANKS.len()] = [
    "Cups Ace",
    "Cups 2",
    "Cups 3",
    "Cups 4",
    "Cups 5",
    "Cups 6",
    "Cups 7",
    "Cups 8",
    "Cups 9",
    "Cups 10",
    "Cups Page",
    "Cups Knight",
    "Cups Queen",
    "Cups King",
    "Wands Ace",
    "Wands 2",
    "Wands 3",
    "Wands 4",
    "Wands 5",
    "Wands 6",
    "Wands 7",
    "Wands 8",
    "Wands 9",
    "Wands 10",
    "Wands Page",
    "Wands Knight",
    "Wands Queen",
    "Wands King",
    "Swords Ace",
    "Swords 2",
    "Swords 3",
    "Swords 4",
    "Swords 5",
    "Swords 6",
    "Swords 7",
    "Swords 8",
    "Swords 9",
    "Swords 10",
    "Swords Page",
    "Swords Knight",
    "Swords Queen",
    "Swords King",
    "Pentacles Ace",
    "Pentacles 2",
    "Pentacles 3",
    "Pentacles 4",
    "Pentacles 5",
    "Pentacles 6",
    "Pentacles 7",
    "Pentacles 8",
    "Pentacles 9",
    "Pentacles 10",
    "Pentacles Page",
    "Pentacles Knight",
    "Pentacles Queen",
    "Pentacles King",
];

/// Immutable pool of cards. Drawing shuffles a private copy.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 78 upright cards, followed by their 78 reversed counterparts when
    /// `include_reversed` is set.
    pub fn new(include_reversed: bool) -> Self {
        let upright: Vec<Card> = MAJOR_ARCANA
            .iter()
            .chain(MINOR_ARCANA.iter())
            .map(|name| Card::upright(*name))
            .collect();

        let mut cards = upright.clone();
        if include_reversed {
            cards.extend(upright.iter().map(|card| Card::reversed(card.name)));
        }

        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn draw(&self, count: usize) -> Result<Vec<Card>> {
        self.draw_with(count, &mut rand::thread_rng())
    }

    pub fn draw_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Card>> {
        if count > self.cards.len() {
            return Err(TarotError::DrawError {
                requested: count,
                available: self.cards.len(),
            });
        }

        let mut shuffled = self.cards.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(count);

        tracing::debug!(
            "Drew {} of {} cards: {:?}",
            count,
            self.cards.len(),
            shuffled.iter().map(|c| c.to_string()).collect::<Vec<_>>()
        );
        Ok(shuffled)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_minor_arcana_matches_suits_and_ranks() {
        let expected: Vec<String> = SUITS
            .iter()
            .flat_map(|suit| RANKS.iter().map(move |rank| format!("{} {}", suit, rank)))
            .collect();
        assert_eq!(MINOR_ARCANA.to_vec(), expected);
    }

    #[test]
    fn test_deck_sizes() {
        assert_eq!(UPRIGHT_CARD_COUNT, 78);
        assert_eq!(Deck::new(false).len(), 78);
        assert_eq!(Deck::new(true).len(), 156);

        let unique: HashSet<String> = Deck::new(true)
            .cards()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(unique.len(), 156);
    }

    #[test]
    fn test_reversed_half_follows_upright_half() {
        let deck = Deck::new(true);
        assert_eq!(deck.cards()[0].to_string(), "The Fool");
        assert_eq!(deck.cards()[78].to_string(), "Reverse The Fool");
        assert!(deck.cards()[78..].iter().all(|c| c.is_reversed()));
    }

    #[test]
    fn test_draw_returns_distinct_cards_from_deck() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(7);

        for count in [3, 5] {
            for _ in 0..200 {
                let cards = deck.draw_with(count, &mut rng).unwrap();
                assert_eq!(cards.len(), count);

                let unique: HashSet<&Card> = cards.iter().collect();
                assert_eq!(unique.len(), count);
                assert!(cards.iter().all(|c| deck.contains(c)));
            }
        }
    }

    #[test]
    fn test_draw_whole_deck_is_permutation() {
        let deck = Deck::new(false);
        let mut rng = StdRng::seed_from_u64(42);
        let cards = deck.draw_with(deck.len(), &mut rng).unwrap();

        let unique: HashSet<&Card> = cards.iter().collect();
        assert_eq!(unique.len(), 78);
    }

    #[test]
    fn test_draw_does_not_mutate_deck() {
        let deck = Deck::default();
        let before = deck.cards().to_vec();
        deck.draw(5).unwrap();
        assert_eq!(deck.cards(), before.as_slice());
    }

    #[test]
    fn test_draw_more_than_deck_fails() {
        let deck = Deck::new(false);
        let err = deck.draw(79).unwrap_err();
        assert!(matches!(
            err,
            TarotError::DrawError {
                requested: 79,
                available: 78
            }
        ));
    }
}
