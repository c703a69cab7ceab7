//! A minimal LIFO used to hold traversal and construction state

/// A last-in, first-out stack
///
/// Popping an empty stack is a programmer error and panics.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item on top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("pop called on an empty stack"),
        }
    }

    /// Get the top item without removing it
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Get the top item mutably without removing it
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
