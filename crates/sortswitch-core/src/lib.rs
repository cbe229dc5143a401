//! sortswitch-core
//!
//! Core building blocks for swapping sort algorithms at runtime.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（StrategyKind, DemoReport, errors）
//! - **ports**: 抽象化レイヤー（SortStrategy trait）
//! - **impls**: 実装（AscendingSort, DescendingSort）
//! - **app**: アプリケーションロジック（context, registry, showcase）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use self::app::{ShowcaseOptions, SortContext, StrategyRegistry, run_showcase};
pub use self::domain::{DemoReport, StrategyError, StrategyKind};
pub use self::impls::{AscendingSort, DescendingSort};
pub use self::ports::SortStrategy;
