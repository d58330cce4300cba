//! Container conversions, the `IntBox` iterable and captured call arguments.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};

// ============================================================================
// Sequences and optionals
// ============================================================================

/// Sum a sequence of integers, rejecting overflow.
pub fn sum_vec(values: &[i64]) -> Result<i64> {
    values.iter().try_fold(0i64, |acc, &v| {
        acc.checked_add(v).ok_or(Error::Overflow {
            operation: "sum_vec",
        })
    })
}

/// `None` stays `None`; a value is incremented by one.
pub fn maybe_add_one(value: Option<i64>) -> Result<Option<i64>> {
    value
        .map(|v| {
            v.checked_add(1).ok_or(Error::Overflow {
                operation: "maybe_add_one",
            })
        })
        .transpose()
}

/// Sum a stream of floats, as read out of a numeric buffer.
pub fn sum_array<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().sum()
}

// ============================================================================
// IntBox
// ============================================================================

/// Growable box of integers that iterates in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntBox {
    items: Vec<i64>,
}

impl IntBox {
    pub fn new() -> Self {
        IntBox::default()
    }

    /// Append one value
    pub fn add(&mut self, value: i64) {
        self.items.push(value);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Option<i64> {
        let len = self.items.len() as isize;
        let index = if index < 0 { index + len } else { index };
        if (0..len).contains(&index) {
            Some(self.items[index as usize])
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a IntBox {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<i64> for IntBox {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        IntBox {
            items: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for IntBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntBox({:?})", self.items)
    }
}

// ============================================================================
// Captured arguments
// ============================================================================

/// Positional and keyword arguments exactly as a call received them.
///
/// Positional order is kept, and keywords keep the order they were passed
/// in, so the capture can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedArgs<V> {
    pub args: Vec<V>,
    pub kwargs: IndexMap<String, V>,
}

impl<V> CapturedArgs<V> {
    pub fn new() -> Self {
        CapturedArgs {
            args: Vec::new(),
            kwargs: IndexMap::new(),
        }
    }

    pub fn push_arg(&mut self, value: V) {
        self.args.push(value);
    }

    /// Record a keyword argument; a repeated key keeps its first position.
    pub fn insert_kwarg(&mut self, key: impl Into<String>, value: V) {
        self.kwargs.insert(key.into(), value);
    }
}

impl<V> Default for CapturedArgs<V> {
    fn default() -> Self {
        CapturedArgs::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sum_vec() {
        assert_eq!(sum_vec(&[1, 2, 3, 4]).unwrap(), 10);
        assert_eq!(sum_vec(&[]).unwrap(), 0);
        assert!(sum_vec(&[i64::MAX, 1]).is_err());
    }

    #[test]
    fn test_maybe_add_one() {
        assert_eq!(maybe_add_one(None).unwrap(), None);
        assert_eq!(maybe_add_one(Some(41)).unwrap(), Some(42));
        assert!(maybe_add_one(Some(i64::MAX)).is_err());
    }

    #[test]
    fn test_sum_array() {
        assert_eq!(sum_array([0.0, 1.0, 2.0, 3.0, 4.0]), 10.0);
        assert_eq!(sum_array(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_int_box_keeps_insertion_order() {
        let mut b = IntBox::new();
        for i in 0..5 {
            b.add(i);
        }
        assert_eq!(b.len(), 5);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        // a second traversal sees the same sequence
        assert_eq!((&b).into_iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_int_box_indexing() {
        let b: IntBox = [10, 20, 30].into_iter().collect();
        assert_eq!(b.get(0), Some(10));
        assert_eq!(b.get(-1), Some(30));
        assert_eq!(b.get(3), None);
        assert_eq!(b.get(-4), None);
    }

    #[test]
    fn test_int_box_display() {
        let b: IntBox = [0, 1].into_iter().collect();
        assert_eq!(b.to_string(), "IntBox([0, 1])");
        assert!(IntBox::new().is_empty());
    }

    #[test]
    fn test_captured_args_preserve_order() {
        let mut captured = CapturedArgs::new();
        captured.push_arg(1);
        captured.push_arg(2);
        captured.insert_kwarg("b", 20);
        captured.insert_kwarg("a", 10);

        assert_eq!(captured.args, vec![1, 2]);
        let keys: Vec<_> = captured.kwargs.keys().cloned().collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }
}
