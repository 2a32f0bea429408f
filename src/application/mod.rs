// Application layer - report shapes and the snapshot-facing facade that
// wires the domain pipeline together (resolve -> filter -> aggregate).

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
