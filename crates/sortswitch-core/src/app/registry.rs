//! StrategyRegistry - SortStrategy の登録と検索
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Arc による共有所有権（同じ strategy を複数の context で使える）

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{StrategyError, StrategyKind};
use crate::impls::strategy_for;
use crate::ports::SortStrategy;

/// Registry of strategies (name -> strategy).
///
/// Built during initialization (mutable), then only read.
pub struct StrategyRegistry<T> {
    strategies: HashMap<String, Arc<dyn SortStrategy<T>>>,
}

impl<T> StrategyRegistry<T> {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy under its own `name()`.
    ///
    /// A second strategy with the same name is rejected instead of replacing the first.
    pub fn register(&mut self, strategy: Arc<dyn SortStrategy<T>>) -> Result<(), StrategyError> {
        let name = strategy.name().to_string();
        if self.strategies.contains_key(&name) {
            return Err(StrategyError::DuplicateStrategy(name));
        }
        tracing::debug!(strategy = %name, "registered sort strategy");
        self.strategies.insert(name, strategy);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SortStrategy<T>>> {
        self.strategies.get(name).cloned()
    }

    /// Look up a built-in kind, failing if it was never registered.
    pub fn resolve(&self, kind: StrategyKind) -> Result<Arc<dyn SortStrategy<T>>, StrategyError> {
        self.get(kind.name())
            .ok_or_else(|| StrategyError::StrategyNotFound(kind.name().to_string()))
    }

    /// Registered names in sorted order.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl<T: Ord + Clone> StrategyRegistry<T> {
    /// Registry preloaded with every `StrategyKind`.
    pub fn with_builtin() -> Result<Self, StrategyError> {
        let mut registry = Self::new();
        for kind in [StrategyKind::Ascending, StrategyKind::Descending] {
            registry.register(strategy_for(kind))?;
        }
        Ok(registry)
    }
}

impl<T> Default for StrategyRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{AscendingSort, DescendingSort};

    struct IdentitySort;

    impl SortStrategy<i32> for IdentitySort {
        fn name(&self) -> &'static str {
            "identity"
        }

        fn transform(&self, data: &[i32]) -> Vec<i32> {
            data.to_vec()
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = StrategyRegistry::<i32>::new();
        registry.register(Arc::new(AscendingSort)).unwrap();

        let strategy = registry.get("ascending").unwrap();
        assert_eq!(strategy.transform(&[2, 1]), vec![1, 2]);
        assert!(registry.get("descending").is_none());
    }

    #[test]
    fn double_registration_is_rejected() {
        let mut registry = StrategyRegistry::<i32>::new();
        registry.register(Arc::new(DescendingSort)).unwrap();

        let result = registry.register(Arc::new(DescendingSort));
        assert!(matches!(
            result,
            Err(StrategyError::DuplicateStrategy(name)) if name == "descending"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn builtin_registry_contains_every_kind() {
        let registry = StrategyRegistry::<&str>::with_builtin().unwrap();
        assert_eq!(registry.registered_names(), vec!["ascending", "descending"]);

        let desc = registry.resolve(StrategyKind::Descending).unwrap();
        assert_eq!(desc.transform(&["a", "c", "b"]), vec!["c", "b", "a"]);
    }

    #[test]
    fn builtin_strategies_go_through_register() {
        let mut registry = StrategyRegistry::<i32>::with_builtin().unwrap();

        for kind in [StrategyKind::Ascending, StrategyKind::Descending] {
            let result = registry.register(strategy_for(kind));
            assert!(matches!(
                result,
                Err(StrategyError::DuplicateStrategy(ref name)) if name == kind.name()
            ));
        }
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn resolve_fails_on_empty_registry() {
        let registry = StrategyRegistry::<i32>::default();
        assert!(registry.is_empty());

        let err = registry.resolve(StrategyKind::Ascending).err().unwrap();
        assert!(matches!(
            err,
            StrategyError::StrategyNotFound(ref name) if name == "ascending"
        ));
        assert_eq!(err.to_string(), "strategy not found: ascending");
    }

    #[test]
    fn custom_strategy_sits_next_to_builtins() {
        let mut registry = StrategyRegistry::<i32>::with_builtin().unwrap();
        registry.register(Arc::new(IdentitySort)).unwrap();

        assert_eq!(registry.len(), 3);
        let identity = registry.get("identity").unwrap();
        assert_eq!(identity.transform(&[3, 1, 2]), vec![3, 1, 2]);
    }
}
