//! DescendingSort - 自然順序の逆順で並べ替え

use crate::ports::SortStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingSort;

impl DescendingSort {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Ord + Clone> SortStrategy<T> for DescendingSort {
    fn name(&self) -> &'static str {
        "descending"
    }

    /// Orders with the reversed comparator and returns the owned result,
    /// not a lazy reversed view.
    fn transform(&self, data: &[T]) -> Vec<T> {
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_tokens_in_reverse() {
        let sorted = DescendingSort::new().transform(&["a", "b", "c", "d", "e"]);
        assert_eq!(sorted, vec!["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn result_joins_directly() {
        let sorted = DescendingSort.transform(&["b", "c", "a"]);
        assert_eq!(sorted.join(","), "c,b,a");
    }

    #[test]
    fn leaves_input_untouched() {
        let input = vec![1, 2, 3];
        let _ = DescendingSort.transform(&input);
        assert_eq!(input, vec![1, 2, 3]);
    }
}
