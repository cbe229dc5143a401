//! SortContext: holds the active strategy and delegates sorting to it.
//!
//! The context never knows which concrete algorithm it is running. It only
//! talks to the `SortStrategy` port, so the strategy can be replaced at any
//! time between calls.

use std::io::Write;
use std::sync::Arc;

use crate::domain::{DemoReport, StrategyError};
use crate::ports::SortStrategy;

/// Fixed input fed to the strategy by `run_demo`.
pub const SAMPLE_TOKENS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Line written before each demo result.
pub const CONTEXT_MESSAGE: &str =
    "Context: Sorting data using the strategy (not sure how it'll do it)";

pub const DEFAULT_DELIMITER: &str = ",";

/// Context delegating to exactly one strategy at a time.
///
/// The strategy is held through an `Arc`, so the caller may keep its own
/// handle and share the same instance across several contexts.
///
/// # Concurrency
/// - Replacing the strategy needs `&mut self`
/// - To share one context between threads, wrap it (e.g. `Mutex<SortContext<T>>`)
pub struct SortContext<T> {
    strategy: Arc<dyn SortStrategy<T>>,
}

impl<T> SortContext<T> {
    pub fn new(strategy: Arc<dyn SortStrategy<T>>) -> Self {
        Self { strategy }
    }

    /// Wrap an owned strategy value.
    pub fn from_strategy<S: SortStrategy<T> + 'static>(strategy: S) -> Self {
        Self::new(Arc::new(strategy))
    }

    /// The strategy currently in use.
    pub fn strategy(&self) -> &Arc<dyn SortStrategy<T>> {
        &self.strategy
    }

    /// Replace the strategy. Takes effect on the next call.
    pub fn set_strategy(&mut self, strategy: Arc<dyn SortStrategy<T>>) {
        tracing::debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "replacing sort strategy"
        );
        self.strategy = strategy;
    }

    /// Delegate one sort to the current strategy.
    pub fn execute(&self, data: &[T]) -> Vec<T> {
        tracing::debug!(
            strategy = self.strategy.name(),
            len = data.len(),
            "delegating to sort strategy"
        );
        self.strategy.transform(data)
    }
}

impl SortContext<&'static str> {
    /// Sort `SAMPLE_TOKENS` with the current strategy and print the joined result.
    pub fn run_demo<W: Write>(&self, out: &mut W) -> Result<DemoReport, StrategyError> {
        self.run_demo_with(out, DEFAULT_DELIMITER)
    }

    /// Same as `run_demo`, joining with `delimiter`.
    ///
    /// Writes two lines: `CONTEXT_MESSAGE`, then the joined tokens.
    pub fn run_demo_with<W: Write>(
        &self,
        out: &mut W,
        delimiter: &str,
    ) -> Result<DemoReport, StrategyError> {
        writeln!(out, "{CONTEXT_MESSAGE}")?;

        let sorted = self.execute(&SAMPLE_TOKENS);
        let items = sorted.into_iter().map(str::to_string).collect();
        let report = DemoReport::new(self.strategy.name(), items, delimiter);

        writeln!(out, "{}", report.joined)?;
        tracing::info!(strategy = %report.strategy, result = %report.joined, "demo finished");
        Ok(report)
    }
}
