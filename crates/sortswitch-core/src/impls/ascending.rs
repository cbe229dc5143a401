//! AscendingSort - 自然順序で並べ替え

use crate::ports::SortStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct AscendingSort;

impl AscendingSort {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Ord + Clone> SortStrategy<T> for AscendingSort {
    fn name(&self) -> &'static str {
        "ascending"
    }

    fn transform(&self, data: &[T]) -> Vec<T> {
        let mut sorted = data.to_vec();
        sorted.sort();
        sorted
    }
}
