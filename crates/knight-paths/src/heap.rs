//! An indexed binary min-heap with decrease-key.
//!
//! Items are flat cell indices in `0..capacity`; each carries its own key,
//! stored alongside the heap, so ordering never depends on outside state.

const ABSENT: usize = usize::MAX;

pub(crate) struct IndexedMinHeap<K> {
    heap: Vec<usize>,
    /// Position of each item in `heap`, or `ABSENT`.
    pos: Vec<usize>,
    keys: Vec<Option<K>>,
}

impl<K: Ord + Copy> IndexedMinHeap<K> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            pos: vec![ABSENT; capacity],
            keys: vec![None; capacity],
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub(crate) fn contains(&self, item: usize) -> bool {
        self.pos[item] != ABSENT
    }

    /// Insert `item`, or lower its key if it is already queued with a larger
    /// one. Returns whether the heap changed.
    pub(crate) fn push_or_decrease(&mut self, item: usize, key: K) -> bool {
        if self.contains(item) {
            match self.keys[item] {
                Some(old) if key < old => {
                    self.keys[item] = Some(key);
                    self.sift_up(self.pos[item]);
                    true
                }
                _ => false,
            }
        } else {
            self.keys[item] = Some(key);
            self.pos[item] = self.heap.len();
            self.heap.push(item);
            self.sift_up(self.heap.len() - 1);
            true
        }
    }

    /// Remove and return the item with the smallest key.
    pub(crate) fn pop(&mut self) -> Option<(usize, K)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop()?;
        self.pos[item] = ABSENT;
        let key = self.keys[item].take()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, key))
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.keys[self.heap[a]] < self.keys[self.heap[b]]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = a;
        self.pos[self.heap[b]] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut smallest = i;
            if l < n && self.less(l, smallest) {
                smallest = l;
            }
            if r < n && self.less(r, smallest) {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_key_order() {
        let mut h = IndexedMinHeap::new(8);
        for (item, key) in [(0, 5), (1, 3), (2, 9), (3, 1), (4, 7)] {
            assert!(h.push_or_decrease(item, key));
        }
        let order: Vec<_> = std::iter::from_fn(|| h.pop()).collect();
        assert_eq!(order, vec![(3, 1), (1, 3), (0, 5), (4, 7), (2, 9)]);
        assert!(h.is_empty());
    }

    #[test]
    fn decrease_key_reorders() {
        let mut h = IndexedMinHeap::new(4);
        h.push_or_decrease(0, 10);
        h.push_or_decrease(1, 20);
        h.push_or_decrease(2, 30);
        assert!(h.push_or_decrease(2, 5));
        assert_eq!(h.len(), 3);
        assert_eq!(h.pop(), Some((2, 5)));
        assert_eq!(h.pop(), Some((0, 10)));
    }

    #[test]
    fn larger_key_is_ignored() {
        let mut h = IndexedMinHeap::new(2);
        h.push_or_decrease(1, 4);
        assert!(!h.push_or_decrease(1, 8));
        assert!(!h.push_or_decrease(1, 4));
        assert_eq!(h.pop(), Some((1, 4)));
        assert_eq!(h.pop(), None);
    }

    #[test]
    fn popped_item_can_be_requeued() {
        let mut h = IndexedMinHeap::new(2);
        h.push_or_decrease(0, 1);
        assert_eq!(h.pop(), Some((0, 1)));
        assert!(!h.contains(0));
        assert!(h.push_or_decrease(0, 2));
        assert_eq!(h.pop(), Some((0, 2)));
    }

    #[test]
    fn tuple_keys_break_ties() {
        let mut h = IndexedMinHeap::new(3);
        h.push_or_decrease(0, (1, 2));
        h.push_or_decrease(1, (1, 0));
        h.push_or_decrease(2, (0, 9));
        assert_eq!(h.pop().map(|(i, _)| i), Some(2));
        assert_eq!(h.pop().map(|(i, _)| i), Some(1));
        assert_eq!(h.pop().map(|(i, _)| i), Some(0));
    }
}
