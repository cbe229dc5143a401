//! Domain model (strategy kinds, run reports, errors).

pub mod errors;
pub mod kind;
pub mod report;

pub use self::errors::StrategyError;
pub use self::kind::StrategyKind;
pub use self::report::DemoReport;
