// Field binding: the state machine, the host capability interface, an
// in-memory host and the coordinator that ties them together.
pub mod coordinator;
pub mod host;
pub mod memory;
pub mod state;

pub use coordinator::AmountField;
pub use host::{CarrierField, FieldHost};
pub use memory::{MemoryCarrier, MemoryField};
pub use state::{backend_value, transition, Effect, FieldEvent, FieldPhase, FieldState};
