use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use crossbeam::scope;
use rand::Rng;

fn numbered(count: i32) -> DynamicArray<i32> {
    let mut v = DynamicArray::with_capacity(count as usize);
    for i in 0..count {
        v.push(i);
    }
    v
}

struct Droppable(Arc<AtomicUsize>);

impl Drop for Droppable {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_basic_push_get() {
    let mut v = DynamicArray::new();
    v.push(1);
    v.push(2);
    v.push(3);
    assert_eq!(v.len(), 3);
    assert_eq!(v.get(0), Ok(&1));
    assert_eq!(v.get(1), Ok(&2));
    assert_eq!(v.get(2), Ok(&3));
    assert_eq!(v[1], 2);
}

#[test]
fn test_push_into_zero_capacity() {
    let mut v = DynamicArray::with_capacity(0);
    assert_eq!(v.capacity(), 0);
    v.push(7);
    assert_eq!(v.len(), 1);
    assert_eq!(v.capacity(), 1);
    assert_eq!(v.get(0), Ok(&7));
}

#[test]
fn test_growth_doubles_and_keeps_order() {
    let mut v = DynamicArray::with_capacity(1);
    let mut seen = Vec::new();
    for i in 0..100 {
        v.push(i);
        seen.push(v.capacity());
    }
    assert_eq!(v.len(), 100);
    assert_eq!(v.capacity(), 128);
    assert_eq!(&seen[..5], &[1, 2, 4, 4, 8]);
    for i in 0..100 {
        assert_eq!(v.get(i as usize), Ok(&i));
    }
}

#[test]
fn test_get_checks_logical_length() {
    let mut v = DynamicArray::with_capacity(8);
    v.push(1);
    assert_eq!(v.get(1), Err(ArrayError::IndexOutOfRange { index: 1, len: 1 }));
    assert!(v.get_mut(5).is_err());
    *v.get_mut(0).unwrap() = 10;
    assert_eq!(v, [10]);
}

#[test]
fn test_pop() {
    let mut v = numbered(1);
    assert_eq!(v.pop(), Ok(0));
    assert!(v.is_empty());

    let mut v = numbered(3);
    assert_eq!(v.pop(), Ok(2));
    assert_eq!(v, [0, 1]);
}

#[test]
fn test_pop_uses_logical_length() {
    let mut v = DynamicArray::with_capacity(10);
    v.push(1);
    v.push(2);
    assert_eq!(v.pop(), Ok(2));
    assert_eq!(v.len(), 1);
    assert_eq!(v.capacity(), 1);
}

#[test]
fn test_pop_and_shift_on_empty() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(v.pop(), Err(ArrayError::EmptyContainerAccess));
    assert_eq!(v.shift(), Err(ArrayError::EmptyContainerAccess));
}

#[test]
fn test_remove_at() {
    let mut v = numbered(3);
    assert_eq!(v.remove_at(0), Ok(0));
    assert_eq!(v, [1, 2]);

    let mut v = numbered(3);
    assert_eq!(v.remove_at(1), Ok(1));
    assert_eq!(v, [0, 2]);

    let mut v = numbered(3);
    assert_eq!(v.remove_at(2), Ok(2));
    assert_eq!(v, [0, 1]);
}

#[test]
fn test_remove_at_out_of_range() {
    let mut v = numbered(3);
    assert_eq!(v.remove_at(3), Err(ArrayError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(v, [0, 1, 2]);
}

#[test]
fn test_removal_collapses_capacity() {
    let mut v = DynamicArray::with_capacity(16);
    for i in 0..5 {
        v.push(i);
    }
    v.remove_at(2).unwrap();
    assert_eq!(v.capacity(), v.len());
    v.shift().unwrap();
    assert_eq!(v.capacity(), 3);
    v.pop().unwrap();
    v.pop().unwrap();
    v.pop().unwrap();
    assert_eq!(v.capacity(), 0);
    v.push(42);
    assert_eq!(v, [42]);
}

#[test]
fn test_shift() {
    let mut v = numbered(1);
    assert_eq!(v.shift(), Ok(0));
    assert_eq!(v.len(), 0);

    let mut v = numbered(3);
    assert_eq!(v.shift(), Ok(0));
    assert_eq!(v, [1, 2]);
}

#[test]
fn test_for_each_visits_live_elements_only() {
    let mut v = DynamicArray::with_capacity(10);
    v.push(0);
    v.push(1);
    v.push(2);
    let mut visited = Vec::new();
    v.for_each(|x| visited.push(*x));
    assert_eq!(visited, vec![0, 1, 2]);
}

#[test]
fn test_range() {
    let mut v = DynamicArray::with_capacity(10);
    for i in 0..3 {
        v.push(i);
    }
    let range = v.range();
    assert_eq!(range.len(), 3);
    let collected: Vec<i32> = range.copied().collect();
    assert_eq!(collected, vec![0, 1, 2]);
}

#[test]
fn test_stream_matches_range() {
    let v = numbered(50);
    let received: Vec<i32> = v.stream(|s| s.copied().collect());
    let expected: Vec<i32> = v.range().copied().collect();
    assert_eq!(received, expected);
}

#[test]
fn test_stream_consumer_stops_early() {
    let v = numbered(1000);
    let first_three: Vec<i32> = v.stream(|s| s.take(3).copied().collect());
    assert_eq!(first_three, vec![0, 1, 2]);
}

#[test]
fn test_stream_empty() {
    let v: DynamicArray<i32> = DynamicArray::new();
    let count = v.stream(|s| s.count());
    assert_eq!(count, 0);
}

#[test]
fn test_sort_swaps_when_predicate_true() {
    let mut v = numbered(3);
    v.sort_by_swap(|a, b| a < b);
    assert_eq!(v, [2, 1, 0]);

    v.sort_by_swap(|a, b| a > b);
    assert_eq!(v, [0, 1, 2]);
}

#[test]
fn test_sort_small_arrays_untouched() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    v.sort_by_swap(|_, _| true);
    assert!(v.is_empty());

    v.push(5);
    v.sort_by_swap(|_, _| true);
    assert_eq!(v, [5]);
}

#[test]
fn test_to_sorted_leaves_source() {
    let v = numbered(3);
    let sorted = v.to_sorted(|a, b| a < b);
    assert_eq!(v, [0, 1, 2]);
    assert_eq!(sorted, [2, 1, 0]);
    assert_eq!(sorted.capacity(), 3);
}

#[test]
fn test_to_sorted_ignores_reserve() {
    let mut v = DynamicArray::with_capacity(8);
    v.push(3);
    v.push(9);
    let sorted = v.to_sorted(|a, b| a > b);
    assert_eq!(sorted.len(), 2);
    assert_eq!(sorted.capacity(), 2);
    assert_eq!(sorted, [3, 9]);
}

#[test]
fn test_to_sorted_random_round_trip() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        let size = rng.random_range(0..64);
        let mut v = DynamicArray::new();
        let mut reference = Vec::new();
        for _ in 0..size {
            let x: i32 = rng.random_range(-1000..1000);
            v.push(x);
            reference.push(x);
        }
        reference.sort_by(|a, b| b.cmp(a));

        let sorted = v.to_sorted(|a, b| a < b);
        assert_eq!(sorted.len(), reference.len());
        assert_eq!(&sorted[..], &reference[..]);
    }
}

#[test]
fn test_filter() {
    let v = numbered(3);
    let only_one = v.filter(|x| *x == 1);
    assert_eq!(only_one, [1]);
    assert_eq!(only_one.capacity(), 1);

    let none = v.filter(|_| false);
    assert!(none.is_empty());
    assert_eq!(none.capacity(), 0);

    let evens = numbered(10).filter(|x| x % 2 == 0);
    assert_eq!(evens, [0, 2, 4, 6, 8]);
}

#[test]
fn test_map() {
    let v = numbered(3);
    let plus_one = map(&v, |x| x + 1);
    assert_eq!(plus_one, [1, 2, 3]);

    let labels = map(&v, |x| format!("#{}", x));
    assert_eq!(labels, ["#0".to_string(), "#1".to_string(), "#2".to_string()]);
}

#[test]
fn test_map_ignores_reserve() {
    let mut v = DynamicArray::with_capacity(10);
    v.push(1);
    let doubled = map(&v, |x| x * 2);
    assert_eq!(doubled.len(), 1);
    assert_eq!(doubled.capacity(), 1);
}

#[test]
fn test_reduce() {
    let v = numbered(3);
    assert_eq!(reduce(&v, |acc, x, _| acc + x, 0), 3);

    let mut words = DynamicArray::with_capacity(2);
    words.push("Hello ".to_string());
    words.push("World!".to_string());
    let joined = reduce(&words, |acc: String, w, _| acc + w, "Wow".to_string());
    assert_eq!(joined, "WowHello World!");
}

#[test]
fn test_reduce_passes_index() {
    let v: DynamicArray<i32> = vec![10, 20, 30].into();
    let indices = reduce(&v, |mut acc: Vec<usize>, _, i| {
        acc.push(i);
        acc
    }, Vec::new());
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_raii_drop() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let mut v = DynamicArray::new();
        for _ in 0..10 {
            v.push(Droppable(counter.clone()));
        }
        drop(v.pop());
        drop(v.shift());
        drop(v.remove_at(3));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }
    assert_eq!(counter.load(Ordering::SeqCst), 10);
}

#[test]
fn test_into_iter_partial_consumption_drops_rest() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..5 {
        v.push(Droppable(counter.clone()));
    }
    let mut iter = v.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.load(Ordering::SeqCst), 2);
    drop(iter);
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[test]
fn test_iterators() {
    let mut v = DynamicArray::new();
    v.push(10);
    v.push(20);
    v.push(30);

    let mut sum = 0;
    for &x in &v {
        sum += x;
    }
    assert_eq!(sum, 60);

    for x in &mut v {
        *x += 1;
    }
    assert_eq!(v[0], 11);

    let collected: Vec<i32> = v.into_iter().collect();
    assert_eq!(collected, vec![11, 21, 31]);
}

#[test]
fn test_collect_clone_and_debug() {
    let v: DynamicArray<u8> = (1..=4).collect();
    assert_eq!(v.capacity(), 4);
    let copy = v.clone();
    assert_eq!(copy, v);
    assert_eq!(format!("{:?}", copy), "[1, 2, 3, 4]");

    let mut extended = copy;
    extended.extend([5, 6]);
    assert_eq!(extended, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_zero_sized_elements() {
    let mut v = DynamicArray::new();
    for _ in 0..5 {
        v.push(());
    }
    assert_eq!(v.len(), 5);
    assert_eq!(v.pop(), Ok(()));
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.into_iter().count(), 4);
}

#[test]
fn test_concurrency() {
    let v = numbered(100);

    scope(|s| {
        s.spawn(|_| {
            let sum: i32 = v.iter().sum();
            assert_eq!(sum, 4950);
        });
        s.spawn(|_| {
            assert_eq!(reduce(&v, |acc, x, _| acc.max(*x), 0), 99);
        });
    }).unwrap();
}

#[test]
fn test_try_reserve_and_try_push() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    assert!(v.try_reserve(10).is_ok());
    assert!(v.capacity() >= 10);
    assert_eq!(v.try_push(1), Ok(()));
    assert_eq!(v.len(), 1);

    assert_eq!(v.try_reserve(usize::MAX), Err(ArrayError::AllocationFailure));
    assert_eq!(v, [1]);
}

#[test]
fn test_try_with_capacity_overflow() {
    let result = DynamicArray::<u64>::try_with_capacity(usize::MAX);
    assert!(matches!(result, Err(ArrayError::AllocationFailure)));
}

#[test]
fn test_error_messages() {
    assert_eq!(ArrayError::EmptyContainerAccess.to_string(), "Cannot remove from an empty array");
    assert_eq!(
        ArrayError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
        "Index out of bounds: index 4 but length is 2"
    );
}
