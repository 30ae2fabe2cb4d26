use crate::{
    error::SolstackError, materials::MaterialStore, simulation::builder::SimulationBuilder,
};
use solstack_schemas::{layer::LayerSpec, result::SimulationResult};

/// Supplies candidate stacks to the search driver.
///
/// This is the extension point for multi-objective global optimization. No
/// search strategy ships with the engine; callers provide one by implementing
/// this trait. `observe` feeds each evaluation back so adaptive strategies
/// can steer; the default implementation ignores it.
pub trait CandidateSource {
    /// Returns the next stack to evaluate, or `None` when the strategy is
    /// exhausted.
    fn next_candidate(&mut self) -> Option<Vec<LayerSpec>>;

    /// Called with the outcome of each evaluated candidate.
    fn observe(&mut self, _layers: &[LayerSpec], _result: &SimulationResult) {}
}

#[derive(Debug, Clone)]
pub struct SearchEvaluation {
    pub layers: Vec<LayerSpec>,
    pub result: SimulationResult,
}

/// Drives a bounded search: draws candidates from the source, runs the
/// orchestrator on each, and returns every evaluation in draw order.
///
/// Candidates that fail structural validation are skipped, but still count
/// against the evaluation budget so a misbehaving source terminates.
pub fn search(
    store: &MaterialStore,
    source: &mut dyn CandidateSource,
    max_evaluations: usize,
) -> Result<Vec<SearchEvaluation>, SolstackError> {
    let mut evaluations = Vec::new();

    for _ in 0..max_evaluations {
        let Some(layers) = source.next_candidate() else {
            break;
        };

        let mut engine = match SimulationBuilder::new()
            .with_store(store.clone())
            .with_layers(layers.clone())
            .build()
        {
            Ok(engine) => engine,
            Err(_) => continue,
        };

        let result = engine.run()?;
        source.observe(&layers, &result);
        evaluations.push(SearchEvaluation { layers, result });
    }

    Ok(evaluations)
}
