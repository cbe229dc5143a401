//! Impls - SortStrategy の実装
//!
//! # 含まれる実装
//! - **AscendingSort**: 自然順序で非減少に並べる
//! - **DescendingSort**: 自然順序で非増加に並べる
//!
//! どちらもゼロサイズ型で、`T: Ord + Clone` なら任意の要素型に使えます。

pub mod ascending;
pub mod descending;

use std::sync::Arc;

use crate::domain::StrategyKind;
use crate::ports::SortStrategy;

// 主要な型を再エクスポート
pub use self::ascending::AscendingSort;
pub use self::descending::DescendingSort;

/// Build a shareable instance of a built-in variant.
pub fn strategy_for<T: Ord + Clone>(kind: StrategyKind) -> Arc<dyn SortStrategy<T>> {
    match kind {
        StrategyKind::Ascending => Arc::new(AscendingSort),
        StrategyKind::Descending => Arc::new(DescendingSort),
    }
}
