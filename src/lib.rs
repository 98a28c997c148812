pub mod engine;
pub mod error;
pub mod models;
pub mod msg;
pub mod odds;
pub mod util;
pub mod xorshift32;

pub use engine::{simulate, CancellationToken, Simulator};
pub use error::SimulationError;
pub use models::{ChoiceSet, Draw, SimulationConfig, Tally, Universe};
