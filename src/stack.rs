/// A fixed-capacity LIFO stack backed by an inline array.
///
/// Like [`CircularQueue`](crate::queue::CircularQueue), a full stack
/// rejects a push by handing the item back rather than evicting anything.
#[derive(Debug)]
pub struct BoundedStack<T, const N: usize> {
    slots: [Option<T>; N],
    len: usize,
}

impl<T, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
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

    /// Pushes onto the top. Hands the item back when full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    pub fn peek(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|top| self.slots[top].as_ref())
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.len.checked_sub(1).and_then(|top| self.slots[top].as_mut())
    }

    /// Iterates top to base.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).rev().filter_map(move |i| self.slots[i].as_ref())
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
