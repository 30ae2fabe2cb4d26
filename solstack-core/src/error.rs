use solstack_schemas::layer::LayerRole;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolstackError {
    #[error("Material '{0}' is not in the catalog for the {1} role")]
    MaterialNotAllowed(String, LayerRole),

    #[error("Layer thickness of {0} nm is outside the accepted range ({min}-{max} nm)",
        min = crate::simulation::stack::MIN_THICKNESS_NM,
        max = crate::simulation::stack::MAX_THICKNESS_NM)]
    ThicknessOutOfRange(u32),

    #[error("A stack must contain between 2 and {max} layers, got {0}", max = LayerRole::ALL.len())]
    StackSize(usize),

    #[error("The {0} role appears more than once in the stack")]
    DuplicateRole(LayerRole),

    #[error("Layers must be ordered front-to-back (TCO through Encapsulation)")]
    RoleOrder,

    #[error("At least one layer must be provided for the simulation")]
    NoLayerProvided,

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error), // Handles errors from the spectrum logger
}
