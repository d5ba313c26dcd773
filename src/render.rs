//! Render sinks
//!
//! The rendered-output container is an explicit sink object with `clear` and
//! `append` as its only operations, so completed chains never touch ambient
//! global state and rendering is testable in isolation.

use std::fmt;
use std::sync::Mutex;

use crate::pipeline::resolver::ResolvedPokemon;

/// Display projection of a resolved Pokemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub image: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub types: String,
    pub abilities: String,
    pub moves: String,
}

impl From<ResolvedPokemon> for Card {
    fn from(pokemon: ResolvedPokemon) -> Self {
        Card {
            name: pokemon.name,
            image: pokemon.image,
            height: pokemon.height,
            weight: pokemon.weight,
            types: pokemon.types.join(", "),
            abilities: pokemon.abilities.join(", "),
            moves: pokemon.moves.join(", "),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if let Some(ref image) = self.image {
            writeln!(f, "  image: {}", image)?;
        }
        writeln!(f, "  height: {}", self.height)?;
        writeln!(f, "  weight: {}", self.weight)?;
        writeln!(f, "  types: {}", self.types)?;
        writeln!(f, "  abilities: {}", self.abilities)?;
        write!(f, "  moves: {}", self.moves)
    }
}

/// Output container for rendered cards
pub trait RenderSink: Send + Sync {
    /// Drop previously rendered output
    fn clear(&self);
    /// Append one card in arrival order
    fn append(&self, card: Card);
}

/// Writes cards to stdout
///
/// A terminal cannot unprint, so `clear` only marks the boundary between
/// batches.
pub struct TerminalSink;

impl RenderSink for TerminalSink {
    fn clear(&self) {
        tracing::debug!("starting new batch output");
    }

    fn append(&self, card: Card) {
        println!("{}\n", card);
    }
}

/// Collects cards in memory, for tests and programmatic consumers
#[derive(Default)]
pub struct MemorySink {
    cards: Mutex<Vec<Card>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> Vec<Card> {
        self.cards.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.cards.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RenderSink for MemorySink {
    fn clear(&self) {
        self.cards.lock().unwrap().clear();
    }

    fn append(&self, card: Card) {
        self.cards.lock().unwrap().push(card);
    }
}
