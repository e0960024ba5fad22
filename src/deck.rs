//! Card catalog: immutable descriptors anchored on the progress axis.
//!
//! A [`Deck`] is loaded once at startup, validated, and never mutated at
//! runtime. Every card carries a `canonical_position`, its anchor value on
//! the scroll progress axis, and the deck guarantees those anchors are
//! strictly increasing, so "nearest card" queries are unambiguous.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ShowreelError;

/// Unique card identifier. Cheap to clone and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Arc<str>);

impl CardId {
    /// Wrap an identifier string.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// External media identifiers for a card.
///
/// These are opaque to the navigation core; the presentation layer resolves
/// them to thumbnails and streams. A missing or failed resource never stalls
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRef {
    /// Hosted video identifier for the player overlay.
    pub video_id: String,
    /// Thumbnail image reference shown on the card face.
    pub thumbnail: String,
    /// Optional short loop played while the card is focused.
    pub video_loop: Option<String>,
}

/// One card: identity, overlay copy, media, and its progress-axis anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDescriptor {
    /// Unique identifier.
    pub id: CardId,
    /// Title shown in the HUD while the card is active.
    pub title: String,
    /// Short description for the details panel.
    #[serde(default)]
    pub description: String,
    /// Credit lines, in display order.
    #[serde(default)]
    pub credits: Vec<String>,
    /// Media references resolved by the presentation layer.
    #[serde(default)]
    pub media: MediaRef,
    /// Anchor on the progress axis; strictly increasing across the deck.
    pub canonical_position: f32,
}

/// Fixed, validated card sequence.
pub struct Deck {
    cards: Vec<CardDescriptor>,
    index_of: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Validate and build a deck.
    ///
    /// Rejects empty decks, duplicate ids, and anchors that are non-finite
    /// or not strictly increasing.
    pub fn new(cards: Vec<CardDescriptor>) -> Result<Self, ShowreelError> {
        if cards.is_empty() {
            return Err(ShowreelError::Deck("deck has no cards".to_owned()));
        }

        let mut index_of = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if !card.canonical_position.is_finite() {
                return Err(ShowreelError::Deck(format!(
                    "card '{}' has a non-finite anchor",
                    card.id
                )));
            }
            if i > 0
                && card.canonical_position
                    <= cards[i - 1].canonical_position
            {
                return Err(ShowreelError::Deck(format!(
                    "anchors must be strictly increasing: card '{}' at {} \
                     follows {}",
                    card.id,
                    card.canonical_position,
                    cards[i - 1].canonical_position
                )));
            }
            if index_of.insert(card.id.clone(), i).is_some() {
                return Err(ShowreelError::Deck(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
        }

        Ok(Self { cards, index_of })
    }

    /// Parse a deck from a JSON array of card descriptors.
    pub fn from_json_str(json: &str) -> Result<Self, ShowreelError> {
        let cards: Vec<CardDescriptor> = serde_json::from_str(json)
            .map_err(|e| ShowreelError::DeckParse(e.to_string()))?;
        Self::new(cards)
    }

    /// Load a deck from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ShowreelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Five-card demo deck anchored at progress 0..4.
    #[must_use]
    pub fn demo() -> Self {
        let titles: [(&str, &str); 5] = [
            ("opening-credits", "Opening Credits"),
            ("night-market", "Night Market"),
            ("salt-flats", "Salt Flats"),
            ("neon-arcade", "Neon Arcade"),
            ("end-reel", "End Reel"),
        ];
        let cards: Vec<CardDescriptor> = titles
            .iter()
            .enumerate()
            .map(|(i, (id, title))| CardDescriptor {
                id: CardId::new(id),
                title: (*title).to_owned(),
                description: format!("Demo reel segment {}", i + 1),
                credits: vec![format!("Director: Reel {}", i + 1)],
                media: MediaRef {
                    video_id: format!("demo-{:03}", i + 1),
                    thumbnail: format!("thumbs/{id}.jpg"),
                    video_loop: None,
                },
                canonical_position: i as f32,
            })
            .collect();
        let index_of = cards
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        Self { cards, index_of }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty. Always false for a validated deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, if in range.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&CardDescriptor> {
        self.cards.get(index)
    }

    /// All cards, in anchor order.
    #[must_use]
    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    /// Index of a card by id.
    #[must_use]
    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.index_of.get(id).copied()
    }

    /// Lowest valid progress value (first anchor).
    #[must_use]
    pub fn min_progress(&self) -> f32 {
        self.cards[0].canonical_position
    }

    /// Highest valid progress value (last anchor).
    #[must_use]
    pub fn max_progress(&self) -> f32 {
        self.cards[self.cards.len() - 1].canonical_position
    }

    /// Clamp a progress value into the deck's valid range.
    #[must_use]
    pub fn clamp_progress(&self, progress: f32) -> f32 {
        progress.clamp(self.min_progress(), self.max_progress())
    }

    /// Anchor value of the card at `index`, if in range.
    #[must_use]
    pub fn anchor(&self, index: usize) -> Option<f32> {
        self.cards.get(index).map(|c| c.canonical_position)
    }

    /// Index of the card whose anchor is nearest to `progress`.
    ///
    /// Linear scan: fine for card counts in the tens. Swap for a binary
    /// search over the anchors if decks ever grow past that.
    #[must_use]
    pub fn nearest_index(&self, progress: f32) -> usize {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, card) in self.cards.iter().enumerate() {
            let dist = (card.canonical_position - progress).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// Nearest card index and its anchor value.
    #[must_use]
    pub fn nearest_anchor(&self, progress: f32) -> (usize, f32) {
        let index = self.nearest_index(progress);
        (index, self.cards[index].canonical_position)
    }

    /// Progress through the current inter-card segment as 0–100.
    ///
    /// Drives per-segment progress bars. Returns 0 at each segment start
    /// and 100 only at the final anchor; a single-card deck is always 0.
    #[must_use]
    pub fn segment_percent(&self, progress: f32) -> f32 {
        let p = self.clamp_progress(progress);
        let mut start = 0;
        for (i, card) in self.cards.iter().enumerate() {
            if card.canonical_position <= p {
                start = i;
            }
        }
        if start + 1 >= self.cards.len() {
            return if self.cards.len() == 1 { 0.0 } else { 100.0 };
        }
        let a = self.cards[start].canonical_position;
        let b = self.cards[start + 1].canonical_position;
        (((p - a) / (b - a)) * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, anchor: f32) -> CardDescriptor {
        CardDescriptor {
            id: CardId::new(id),
            title: id.to_owned(),
            description: String::new(),
            credits: Vec::new(),
            media: MediaRef::default(),
            canonical_position: anchor,
        }
    }

    #[test]
    fn rejects_empty_deck() {
        assert!(Deck::new(Vec::new()).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Deck::new(vec![card("a", 0.0), card("a", 1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_monotonic_anchors() {
        let result = Deck::new(vec![card("a", 0.0), card("b", 0.0)]);
        assert!(result.is_err());
        let result = Deck::new(vec![card("a", 1.0), card("b", 0.5)]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_finite_anchor() {
        let result = Deck::new(vec![card("a", f32::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn nearest_index_picks_closest_anchor() {
        let deck = Deck::demo();
        assert_eq!(deck.nearest_index(0.0), 0);
        assert_eq!(deck.nearest_index(0.4), 0);
        assert_eq!(deck.nearest_index(0.6), 1);
        assert_eq!(deck.nearest_index(3.9), 4);
        // Out-of-range progress still resolves to the boundary cards.
        assert_eq!(deck.nearest_index(-5.0), 0);
        assert_eq!(deck.nearest_index(99.0), 4);
    }

    #[test]
    fn nearest_index_tie_prefers_lower_index() {
        let deck = Deck::demo();
        assert_eq!(deck.nearest_index(0.5), 0);
    }

    #[test]
    fn clamp_progress_bounds() {
        let deck = Deck::demo();
        assert_eq!(deck.clamp_progress(-1.0), 0.0);
        assert_eq!(deck.clamp_progress(2.5), 2.5);
        assert_eq!(deck.clamp_progress(10.0), 4.0);
    }

    #[test]
    fn segment_percent_within_segment() {
        let deck = Deck::demo();
        assert!((deck.segment_percent(0.0)).abs() < 1e-4);
        assert!((deck.segment_percent(0.5) - 50.0).abs() < 1e-3);
        assert!((deck.segment_percent(3.25) - 25.0).abs() < 1e-3);
        assert!((deck.segment_percent(4.0) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn json_deck_round_trip() {
        let json = r#"[
            {"id": "a", "title": "A", "canonical_position": 0.0},
            {"id": "b", "title": "B", "canonical_position": 1.0,
             "credits": ["Director: X"],
             "media": {"video_id": "v1", "thumbnail": "t.jpg"}}
        ]"#;
        let deck = Deck::from_json_str(json).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.card(1).unwrap().media.video_id, "v1");
        // Omitted fields fall back to defaults.
        assert!(deck.card(0).unwrap().credits.is_empty());
        assert_eq!(deck.index_of(&CardId::new("b")), Some(1));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Deck::from_json_str("not json"),
            Err(ShowreelError::DeckParse(_))
        ));
    }
}
