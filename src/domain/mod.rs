mod breakdown;
mod compare;
mod entry;
mod ledger;
mod money;
mod period;
mod ratios;
mod series;

pub use breakdown::*;
pub use compare::*;
pub use entry::*;
pub use ledger::*;
pub use money::*;
pub use period::*;
pub use ratios::*;
pub use series::*;
