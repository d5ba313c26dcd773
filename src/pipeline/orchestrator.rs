//! Batch orchestrator
//!
//! Runs the load -> resolve -> render chain for every id in a batch. Each
//! id's chain is spawned independently; a failure for one id is caught at
//! the end of its chain, logged, and never affects the others.
//!
//! The pipeline carries a generation counter so that a batch started later
//! supersedes earlier in-flight chains: a chain that completes after a newer
//! batch has begun discards its result instead of appending stale output.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::api::PokeApiClient;
use crate::error::FetchResult;
use crate::ids::EntityId;
use crate::pipeline::resolver::ResolvedPokemon;
use crate::pipeline::{loader, resolver};
use crate::render::{Card, RenderSink};

/// Outcome summary for one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Ids whose card reached the sink
    pub rendered: usize,
    /// Ids whose chain failed at some stage
    pub failed: usize,
    /// Ids that resolved after a newer batch started and were discarded
    pub stale: usize,
}

pub struct Pipeline {
    client: Arc<PokeApiClient>,
    generation: AtomicU64,
}

impl Pipeline {
    pub fn new(client: Arc<PokeApiClient>) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
        }
    }

    /// Clear the sink and render every id in the batch
    ///
    /// Chains run concurrently with no bound on in-flight ids; the caller
    /// limits batch size informally. Completion order depends on network
    /// latency, so cards append in arrival order.
    pub async fn render_batch(&self, ids: &[EntityId], sink: Arc<dyn RenderSink>) -> BatchReport {
        // Bump before clearing so chains from a superseded batch cannot
        // append between the clear and the bump.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        sink.clear();

        let mut chains = JoinSet::new();
        for id in ids {
            let client = Arc::clone(&self.client);
            let id = id.clone();
            chains.spawn(async move {
                let outcome = run_chain(&client, &id).await;
                (id, outcome)
            });
        }

        let mut report = BatchReport::default();
        while let Some(joined) = chains.join_next().await {
            let Ok((id, outcome)) = joined else {
                report.failed += 1;
                continue;
            };

            match outcome {
                Ok(Some(resolved)) => {
                    if self.generation.load(Ordering::SeqCst) == generation {
                        sink.append(Card::from(resolved));
                        report.rendered += 1;
                    } else {
                        tracing::debug!(id = %id, "discarding stale result");
                        report.stale += 1;
                    }
                }
                Ok(None) => {
                    tracing::warn!(id = %id, "pokemon not found");
                    report.failed += 1;
                }
                Err(err) => {
                    tracing::error!(id = %id, error = %err, "error fetching pokemon");
                    report.failed += 1;
                }
            }
        }

        report
    }
}

/// One id's chain: load, resolve abilities, resolve moves
///
/// Stages are strictly sequential within a chain; any error short-circuits
/// the remaining stages for this id only.
async fn run_chain(client: &PokeApiClient, id: &EntityId) -> FetchResult<Option<ResolvedPokemon>> {
    let Some(pokemon) = loader::load(client, id).await? else {
        return Ok(None);
    };
    let with_abilities = resolver::resolve_abilities(client, pokemon).await?;
    let resolved = resolver::resolve_moves(client, with_abilities).await?;
    Ok(Some(resolved))
}
