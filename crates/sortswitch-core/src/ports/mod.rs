//! Ports - 抽象化レイヤー
//!
//! Context は具体的な並べ替えアルゴリズムを知りません。
//! このモジュールの trait を通してのみアルゴリズムを呼び出します。

pub mod sort_strategy;

// 主要な trait を再エクスポート
pub use self::sort_strategy::SortStrategy;
