/// A fixed-capacity circular queue.
///
/// Storage is an inline array of `Option<T>` slots with a front index and
/// a length; enqueue and dequeue are O(1) and logical FIFO order is
/// preserved across wraparound. A full queue rejects the incoming item by
/// handing it back, so nothing is lost on failure.
#[derive(Debug)]
pub struct CircularQueue<T, const N: usize> {
    slots: [Option<T>; N],
    front: usize,
    len: usize,
}

impl<T, const N: usize> CircularQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            front: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Appends to the logical rear. Hands the item back when full.
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        let rear = (self.front + self.len) % N;
        self.slots[rear] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the logical front element, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % N;
        self.len -= 1;
        item
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Element at logical offset `i` from the front.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        self.slots[(self.front + i) % N].as_ref()
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len {
            return None;
        }
        self.slots[(self.front + i) % N].as_mut()
    }

    /// Iterates front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let q: CircularQueue<i32, 5> = CircularQueue::new();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 5);
        assert_eq!(q.front(), None);
    }

    #[test]
    fn test_fifo_order() {
        let mut q: CircularQueue<i32, 5> = CircularQueue::new();
        for v in [10, 20, 30] {
            q.enqueue(v).unwrap();
        }
        assert_eq!(q.dequeue(), Some(10));
        assert_eq!(q.dequeue(), Some(20));
        assert_eq!(q.dequeue(), Some(30));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_enqueue_beyond_capacity_hands_item_back() {
        let mut q: CircularQueue<i32, 3> = CircularQueue::new();
        assert_eq!(q.enqueue(1), Ok(()));
        assert_eq!(q.enqueue(2), Ok(()));
        assert_eq!(q.enqueue(3), Ok(()));
        assert!(q.is_full());

        assert_eq!(q.enqueue(4), Err(4));
        assert_eq!(q.len(), 3);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_dequeue_empty_is_noop() {
        let mut q: CircularQueue<i32, 3> = CircularQueue::new();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_fifo_preserved_across_wraparound() {
        let mut q: CircularQueue<i32, 3> = CircularQueue::new();
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3).unwrap();
        q.enqueue(4).unwrap(); // wraps into the freed slot
        assert!(q.is_full());

        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), Some(4));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_logical_indexing_from_front() {
        let mut q: CircularQueue<i32, 3> = CircularQueue::new();
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        q.dequeue();
        q.enqueue(3).unwrap();

        assert_eq!(q.get(0), Some(&2));
        assert_eq!(q.get(1), Some(&3));
        assert_eq!(q.get(2), None);
        assert_eq!(q.front(), Some(&2));
    }

    #[test]
    fn test_front_mut_overwrites_in_place() {
        let mut q: CircularQueue<i32, 3> = CircularQueue::new();
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();

        if let Some(front) = q.front_mut() {
            *front = 99;
        }
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue(), Some(99));
        assert_eq!(q.dequeue(), Some(2));
    }

    #[test]
    fn test_long_churn_keeps_order() {
        let mut q: CircularQueue<u32, 5> = CircularQueue::new();
        let mut next = 0;
        let mut expected = 0;
        for _ in 0..5 {
            q.enqueue(next).unwrap();
            next += 1;
        }
        for _ in 0..100 {
            assert_eq!(q.dequeue(), Some(expected));
            expected += 1;
            q.enqueue(next).unwrap();
            next += 1;
            assert!(q.is_full());
        }
    }

    #[test]
    fn test_works_with_non_copy_types() {
        let mut q: CircularQueue<String, 2> = CircularQueue::new();
        q.enqueue("a".to_string()).unwrap();
        q.enqueue("b".to_string()).unwrap();
        let rejected = q.enqueue("c".to_string()).unwrap_err();
        assert_eq!(rejected, "c");
        assert_eq!(q.dequeue(), Some("a".to_string()));
    }
}
