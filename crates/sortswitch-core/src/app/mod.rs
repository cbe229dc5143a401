//! App - アプリケーションロジック
//!
//! # 構成
//! - **context**: SortStrategy を保持し処理を委譲する SortContext
//! - **registry**: 名前から SortStrategy を引く StrategyRegistry
//! - **showcase**: strategy を実行時に差し替えるデモの流れ

pub mod context;
pub mod registry;
pub mod showcase;

pub use self::context::{CONTEXT_MESSAGE, DEFAULT_DELIMITER, SAMPLE_TOKENS, SortContext};
pub use self::registry::StrategyRegistry;
pub use self::showcase::{ShowcaseOptions, run_showcase};
