use super::HuffmanError;

/// Binary min-heap backed by a `Vec`.
///
/// Ordering is entirely up to `T: Ord`. The tree builder relies on that to break weight ties by
/// insertion sequence, so two runs over the same frequencies always pop candidates in the same order.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, HuffmanError> {
        let mut elements = Vec::new();
        elements.try_reserve_exact(capacity)?;
        Ok(Self { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Adds `value`, restoring the heap property by sifting it up. O(log n).
    pub fn insert(&mut self, value: T) -> Result<(), HuffmanError> {
        self.elements.try_reserve(1)?;
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
        Ok(())
    }

    /// Removes and returns the smallest element. O(log n).
    pub fn extract_min(&mut self) -> Result<T, HuffmanError> {
        if self.elements.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }

        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop().ok_or(HuffmanError::EmptyQueue)?;
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[i] >= self.elements[parent] {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < n && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < n && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }

            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
