//! Reference resolver
//!
//! Turns the ability and move reference lists into ordered display names.
//! All secondary fetches for one list are issued eagerly and awaited
//! together; a single failure fails the whole stage, no partial success.
//!
//! Each stage consumes its input and returns a new value:
//! `Pokemon` -> `PokemonWithAbilities` -> `ResolvedPokemon`.

use futures::future::try_join_all;

use crate::api::types::{LocalizedNames, NamedResource};
use crate::api::PokeApiClient;
use crate::error::FetchResult;
use crate::pipeline::loader::Pokemon;

/// Locale used when picking a display name
pub const TARGET_LANGUAGE: &str = "en";

/// Sentinel when a resource has no name in the target locale
pub const UNKNOWN_NAME: &str = "Unknown";

/// Display cap for the move list, not a correctness rule
pub const MOVE_DISPLAY_LIMIT: usize = 5;

/// A Pokemon whose abilities are resolved but whose moves are still references
#[derive(Debug, Clone)]
pub struct PokemonWithAbilities {
    pub name: String,
    pub image: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub moves: Vec<NamedResource>,
}

/// Fully resolved Pokemon, the terminal shape the renderer consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPokemon {
    pub name: String,
    pub image: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
}

/// Resolve the ability references into display names
pub async fn resolve_abilities(
    client: &PokeApiClient,
    pokemon: Pokemon,
) -> FetchResult<PokemonWithAbilities> {
    let abilities = resolve_names(client, &pokemon.abilities).await?;

    Ok(PokemonWithAbilities {
        name: pokemon.name,
        image: pokemon.image,
        height: pokemon.height,
        weight: pokemon.weight,
        types: pokemon.types,
        abilities,
        moves: pokemon.moves,
    })
}

/// Resolve the move references into display names, truncated to the first
/// [`MOVE_DISPLAY_LIMIT`] entries in original order
pub async fn resolve_moves(
    client: &PokeApiClient,
    pokemon: PokemonWithAbilities,
) -> FetchResult<ResolvedPokemon> {
    let mut moves = resolve_names(client, &pokemon.moves).await?;
    moves.truncate(MOVE_DISPLAY_LIMIT);

    Ok(ResolvedPokemon {
        name: pokemon.name,
        image: pokemon.image,
        height: pokemon.height,
        weight: pokemon.weight,
        types: pokemon.types,
        abilities: pokemon.abilities,
        moves,
    })
}

/// Fetch every referenced resource concurrently and pick its localized name
async fn resolve_names(
    client: &PokeApiClient,
    references: &[NamedResource],
) -> FetchResult<Vec<String>> {
    try_join_all(references.iter().map(|reference| async move {
        let detail: LocalizedNames = client.fetch_json(&reference.url).await?;
        Ok(localized_name(&detail))
    }))
    .await
}

/// First name in the target locale, or the sentinel when none exists
fn localized_name(detail: &LocalizedNames) -> String {
    detail
        .names
        .iter()
        .find(|n| n.language.name == TARGET_LANGUAGE)
        .map(|n| n.name.clone())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}
