/// A small ordered-set interface used to track qubit-index membership
/// (e.g. "which qubits currently carry an X frame") without committing
/// callers to a particular backing collection.
pub trait Set<'a> {
    type Element: 'a;

    fn new() -> Self;
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn contains(&self, item: &Self::Element) -> bool;
    fn insert(&mut self, item: Self::Element);
    fn remove(&mut self, item: &Self::Element);

    /// Inserts `item` if absent, removes it if present.
    fn symmetric_difference_item_update(&mut self, item: &Self::Element);
}
