pub mod analysis;
pub mod error;
pub mod feasibility;
pub mod logger;
pub mod materials;
pub mod simulation;
