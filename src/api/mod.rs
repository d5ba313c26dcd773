//! PokeAPI integration
//!
//! This module provides:
//! - API types for primary Pokemon records and secondary name resources
//! - Client for fetching JSON from the PokeAPI

pub mod client;
pub mod types;

pub use client::{PokeApiClient, POKEAPI_BASE};
pub use types::*;
