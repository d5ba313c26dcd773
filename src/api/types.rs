//! PokeAPI response types
//!
//! Only the attributes the pipeline consumes are mapped; everything else in
//! the responses is ignored.
//!
//! Reference: https://pokeapi.co/api/v2/pokemon

use serde::Deserialize;

/// Primary Pokemon record as returned by `/pokemon/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub sprites: SpriteSet,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

/// Bare name wrapper used for types and languages
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// A name/URL pair pointing at a secondary resource that needs its own fetch
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Secondary ability/move resource, reduced to its localized names
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedNames {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedRef,
}
