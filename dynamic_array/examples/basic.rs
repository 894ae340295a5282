use dynamic_array::{map, reduce, DynamicArray};

fn main() {
    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::new();

    for i in 1..=5 {
        arr.push(i * 10);
        println!("Pushed: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }

    println!("Elements: {:?}", arr);
    println!("Halved: {:?}", map(&arr, |x| x / 2));
    println!("Sum: {}", reduce(&arr, |acc, x, _| acc + x, 0));
    println!("Descending: {:?}", arr.to_sorted(|a, b| a < b));

    while let Ok(val) = arr.pop() {
        println!("Popped: {}, len: {}, cap: {}", val, arr.len(), arr.capacity());
    }
}
