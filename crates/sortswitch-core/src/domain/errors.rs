//! Errors - エラー型
//!
//! 比較不能な要素は `T: Ord` 境界によりコンパイル時に弾かれるため、
//! 実行時のエラーは registry の操作と出力の書き込みに限られます。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("strategy '{0}' is already registered")]
    DuplicateStrategy(String),

    #[error("strategy not found: {0}")]
    StrategyNotFound(String),

    #[error("unknown strategy kind: {0}")]
    UnknownStrategyKind(String),

    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),
}
