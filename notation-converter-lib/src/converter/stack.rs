/// A last-in-first-out container.
///
/// Only the top is reachable; there is no indexing or iteration, so the
/// algorithms built on it cannot step outside stack discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Creates an empty stack that can hold `capacity` items without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_come_out_in_reverse_order() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');

        assert_eq!(stack.peek(), Some(&'b'));
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_has_nothing_to_pop() {
        let mut stack: Stack<char> = Stack::with_capacity(4);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
    }
}
