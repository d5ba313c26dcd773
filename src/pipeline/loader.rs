//! Primary record loader
//!
//! Fetches `/pokemon/{id}` and projects the raw JSON into the shape the
//! resolver stages consume. Ability and move references pass through
//! untouched; they are not dereferenced until the resolver runs.

use serde_json::Value;

use crate::api::types::{NamedResource, PokemonRecord};
use crate::api::PokeApiClient;
use crate::error::{FetchError, FetchResult};
use crate::ids::EntityId;

/// A loaded Pokemon with its ability and move references still unresolved
#[derive(Debug, Clone)]
pub struct Pokemon {
    pub name: String,
    pub image: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<NamedResource>,
    pub moves: Vec<NamedResource>,
}

/// Load the primary record for an id
///
/// `Ok(None)` is the defensive not-found short-circuit: the fetcher itself
/// errors on 404, so in practice a missing record never reaches it.
pub async fn load(client: &PokeApiClient, id: &EntityId) -> FetchResult<Option<Pokemon>> {
    let url = client.pokemon_url(id);
    let value: Value = client.fetch_json(&url).await?;

    if value.is_null() {
        return Ok(None);
    }

    let record: PokemonRecord = serde_json::from_value(value).map_err(|e| FetchError::Json {
        url: url.clone(),
        source: e,
    })?;

    Ok(Some(project(record)))
}

fn project(record: PokemonRecord) -> Pokemon {
    Pokemon {
        name: record.name,
        image: record.sprites.front_default,
        height: record.height,
        weight: record.weight,
        types: record.types.into_iter().map(|t| t.type_ref.name).collect(),
        abilities: record.abilities.into_iter().map(|a| a.ability).collect(),
        moves: record.moves.into_iter().map(|m| m.move_ref).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{AbilitySlot, MoveSlot, SpriteSet, TypeSlot};

    fn sample_record() -> PokemonRecord {
        serde_json::from_value(serde_json::json!({
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": { "front_default": "https://img.example/1.png" },
            "types": [
                { "type": { "name": "grass" } },
                { "type": { "name": "poison" } }
            ],
            "abilities": [
                { "ability": { "name": "overgrow", "url": "https://x/ability/65/" } }
            ],
            "moves": [
                { "move": { "name": "tackle", "url": "https://x/move/33/" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_project_unwraps_type_names() {
        let pokemon = project(sample_record());
        assert_eq!(pokemon.types, vec!["grass", "poison"]);
    }

    #[test]
    fn test_project_passes_references_through() {
        let pokemon = project(sample_record());
        assert_eq!(pokemon.abilities.len(), 1);
        assert_eq!(pokemon.abilities[0].name, "overgrow");
        assert_eq!(pokemon.moves[0].url, "https://x/move/33/");
    }

    #[test]
    fn test_project_keeps_stats() {
        let pokemon = project(sample_record());
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.height, 7);
        assert_eq!(pokemon.weight, 69);
        assert_eq!(pokemon.image.as_deref(), Some("https://img.example/1.png"));
    }

    // Keep the projection in sync with the slot wrappers
    #[test]
    fn test_slot_wrappers_deserialize() {
        let _: TypeSlot = serde_json::from_value(serde_json::json!({
            "type": { "name": "grass" }
        }))
        .unwrap();
        let _: AbilitySlot = serde_json::from_value(serde_json::json!({
            "ability": { "name": "overgrow", "url": "u" }
        }))
        .unwrap();
        let _: MoveSlot = serde_json::from_value(serde_json::json!({
            "move": { "name": "tackle", "url": "u" }
        }))
        .unwrap();
        let _: SpriteSet = serde_json::from_value(serde_json::json!({
            "front_default": null
        }))
        .unwrap();
    }
}
