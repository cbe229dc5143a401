//! SortStrategy port - 並べ替えアルゴリズムの差し替え口
//!
//! # 実装
//! - **AscendingSort**: 昇順（自然順序）
//! - **DescendingSort**: 降順

/// SortStrategy は要素列を並べ替えた新しい列を返す
///
/// # 契約
/// - 入力 `data` は借用のみ。呼び出し側のスライスは変更しない
/// - 戻り値は入力と同じ多重集合を持つ、完全に materialize された `Vec`
/// - 空の入力には空の `Vec` を返す
/// - 重複要素の相対順序（安定性）は保証しない
///
/// # Object Safety
/// - 要素型 `T` は trait のパラメータ（メソッドはジェネリックではない）
/// - `Arc<dyn SortStrategy<T>>` として保持・差し替えできる
///
/// # Thread Safety
/// - `Send + Sync` を要求（実装はステートレスなので共有可能）
pub trait SortStrategy<T>: Send + Sync {
    /// Stable name used as the registry key.
    fn name(&self) -> &'static str;

    /// Produce a reordered copy of `data`.
    fn transform(&self, data: &[T]) -> Vec<T>;
}
