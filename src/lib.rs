//! Pokefetch - PokeAPI lookup pipeline
//!
//! Fetches one or more Pokemon from the public PokeAPI, enriches each record
//! with human-readable ability and move names (which live behind secondary
//! endpoints), and hands the result to a render sink.
//!
//! ## Flow
//! EntityId -> load -> resolve abilities -> resolve moves -> render
//!
//! Each id in a batch runs its chain independently and concurrently; a
//! failure for one id never blocks the others.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pokefetch::api::PokeApiClient;
//! use pokefetch::ids::parse_batch;
//! use pokefetch::pipeline::Pipeline;
//! use pokefetch::render::TerminalSink;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = PokeApiClient::new()?;
//! let pipeline = Pipeline::new(Arc::new(client));
//! let ids = parse_batch("pikachu, 25")?;
//! let report = pipeline.render_batch(&ids, Arc::new(TerminalSink)).await;
//! println!("rendered {} of {}", report.rendered, ids.len());
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// PokeAPI client and response types
pub mod api;

// Batch id parsing and random id generation
pub mod ids;

// Load -> resolve -> render pipeline
pub mod pipeline;

// Output sinks
pub mod render;

pub use error::{FetchError, FetchResult};
pub use ids::EntityId;
pub use pipeline::{BatchReport, Pipeline};
pub use render::{Card, MemorySink, RenderSink, TerminalSink};
