//! Showcase: the client side of the demo.
//!
//! Builds a context with one strategy, runs it, swaps in another strategy and
//! runs it again, announcing each configuration first.

use std::io::Write;

use crate::app::{DEFAULT_DELIMITER, SortContext, StrategyRegistry};
use crate::domain::{DemoReport, StrategyError, StrategyKind};

/// Knobs for `run_showcase`. The default reproduces the classic
/// ascending-then-descending run joined with ",".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseOptions {
    pub delimiter: String,
    pub initial: StrategyKind,
    pub replacement: StrategyKind,
}

impl Default for ShowcaseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            initial: StrategyKind::Ascending,
            replacement: StrategyKind::Descending,
        }
    }
}

fn announce<W: Write>(out: &mut W, kind: StrategyKind) -> Result<(), StrategyError> {
    writeln!(out, "Client: Strategy is set to {} sorting.", kind.label())?;
    Ok(())
}

/// Run the two-step demo, writing everything to `out`.
///
/// Returns one report per context run, in order.
pub fn run_showcase<W: Write>(
    out: &mut W,
    options: &ShowcaseOptions,
) -> Result<Vec<DemoReport>, StrategyError> {
    let registry = StrategyRegistry::<&'static str>::with_builtin()?;

    let mut context = SortContext::new(registry.resolve(options.initial)?);
    announce(out, options.initial)?;
    let first = context.run_demo_with(out, &options.delimiter)?;

    writeln!(out)?;

    announce(out, options.replacement)?;
    context.set_strategy(registry.resolve(options.replacement)?);
    let second = context.run_demo_with(out, &options.delimiter)?;

    out.flush()?;
    Ok(vec![first, second])
}
