use super::{electrical, optical, stack::LayerStack};
use crate::{error::SolstackError, feasibility, logger::SpectrumLogger};
use solstack_schemas::result::SimulationResult;

#[derive(Debug)]
pub struct SimulationEngine {
    pub(super) stack: LayerStack,
    pub(super) logger: Option<SpectrumLogger>,
}

impl SimulationEngine {
    pub fn run(&mut self) -> Result<SimulationResult, SolstackError> {
        // Advisory only; a failed check is surfaced, never acted on here.
        let feasibility = feasibility::check(&self.stack);
        if !feasibility.passed {
            println!("--- Feasibility warning: TCO/ETL pairing is not in the compatibility list ---");
        }

        // The two models are independent; both read the same immutable stack.
        let optical = optical::compute(&self.stack);
        let electrical = electrical::compute(&self.stack);

        if let Some(logger) = &mut self.logger {
            logger.log_spectrum(&optical)?;
        }

        Ok(SimulationResult {
            feasibility,
            optical,
            electrical,
        })
    }

    pub fn get_stack(&self) -> &LayerStack {
        &self.stack
    }
}
