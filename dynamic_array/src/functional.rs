use crate::DynamicArray;

impl<T> DynamicArray<T> {
    /// Calls `visitor` on every live element, front to back.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for item in self.iter() {
            visitor(item);
        }
    }

    /// Bubble-sorts the array in place.
    ///
    /// `should_swap(left, right)` is asked about each adjacent pair and the
    /// pair is swapped when it returns `true`, i.e. `true` means "left moves
    /// after right". Passing `|a, b| a < b` therefore produces a *descending*
    /// order and `|a, b| a > b` an ascending one. Runs in O(n²) and is stable
    /// for a strict predicate.
    pub fn sort_by_swap<F>(&mut self, mut should_swap: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let len = self.len();
        if len < 2 {
            return;
        }

        let items: &mut [T] = self;
        for pass in 0..len - 1 {
            for j in 0..len - pass - 1 {
                if should_swap(&items[j], &items[j + 1]) {
                    items.swap(j, j + 1);
                }
            }
        }
    }

    /// Returns a sorted copy, leaving `self` untouched. See
    /// [`sort_by_swap`](Self::sort_by_swap) for the predicate contract.
    pub fn to_sorted<F>(&self, should_swap: F) -> DynamicArray<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut sorted = self.clone();
        sorted.sort_by_swap(should_swap);
        sorted
    }

    /// Returns the elements matching `predicate`, in their original order.
    ///
    /// The result starts with no capacity and grows through `push`.
    pub fn filter<F>(&self, mut predicate: F) -> DynamicArray<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut out = DynamicArray::new();
        for item in self.iter() {
            if predicate(item) {
                out.push(item.clone());
            }
        }
        out
    }
}

/// Applies `transform` to every element, producing an array of the same
/// length whose capacity matches it exactly.
pub fn map<T, U, F>(array: &DynamicArray<T>, mut transform: F) -> DynamicArray<U>
where
    F: FnMut(&T) -> U,
{
    let mut out = DynamicArray::with_capacity(array.len());
    for item in array.iter() {
        out.push(transform(item));
    }
    out
}

/// Left fold over the array. `accumulator` receives the running value, the
/// element, and its index.
pub fn reduce<T, U, F>(array: &DynamicArray<T>, mut accumulator: F, initial: U) -> U
where
    F: FnMut(U, &T, usize) -> U,
{
    array
        .iter()
        .enumerate()
        .fold(initial, |acc, (index, item)| accumulator(acc, item, index))
}
