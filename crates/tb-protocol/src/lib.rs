pub mod conversation;
pub mod measurement;
pub mod telemetry;
pub mod turbine;

pub use conversation::*;
pub use measurement::*;
pub use telemetry::*;
pub use turbine::*;
