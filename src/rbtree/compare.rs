use std::cmp::Ordering;

/// A three-way comparison over the values stored in an [`RBTree`](super::RBTree).
///
/// The ordering must be a strict total order, and must stay the same for as long as
/// the tree holding it is alive. A comparator that breaks this won't cause memory
/// unsafety, but lookups and traversal order stop meaning anything.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F where F: Fn(&T, &T) -> Ordering {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_and_natural_order() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare("b", "b"), Ordering::Equal);
    }
}
