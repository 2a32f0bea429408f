pub mod application;
pub mod domain;
pub mod io;

pub use application::{EngineError, LedgerAnalytics};
pub use domain::*;
