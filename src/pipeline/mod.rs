//! Lookup pipeline
//!
//! This module provides:
//! - Loader for the primary Pokemon record
//! - Resolver that turns ability/move references into display names
//! - Orchestrator that runs the chain per id and renders the results

pub mod loader;
pub mod orchestrator;
pub mod resolver;

pub use loader::Pokemon;
pub use orchestrator::{BatchReport, Pipeline};
pub use resolver::{PokemonWithAbilities, ResolvedPokemon};
