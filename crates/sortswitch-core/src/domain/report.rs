use serde::{Deserialize, Serialize};

/// Result of one demo run through a `SortContext`.
///
/// This is a serializable view of what the context printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    /// Registry name of the strategy that produced `items`.
    pub strategy: String,

    /// The transformed sample, in output order.
    pub items: Vec<String>,

    /// `items` joined with the delimiter, exactly as written.
    pub joined: String,
}

impl DemoReport {
    pub fn new(strategy: &str, items: Vec<String>, delimiter: &str) -> Self {
        let joined = items.join(delimiter);
        Self {
            strategy: strategy.to_string(),
            items,
            joined,
        }
    }
}
