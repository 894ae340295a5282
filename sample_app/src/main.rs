use dynamic_array::{map, reduce, DynamicArray};

fn main() {
    println!("Initializing DynamicArray...");
    let mut array = DynamicArray::new();

    println!("Pushing elements...");
    for i in 0..10usize {
        array.push(i);
    }

    assert_eq!(array.len(), 10);
    println!("Array length verified: {}", array.len());

    println!("Iterating elements:");
    for (i, val) in array.range().enumerate() {
        println!("Index {}: {}", i, val);
        assert_eq!(i, *val);
    }

    let doubled = map(&array, |x| x * 2);
    let sum = reduce(&doubled, |acc, x, _| acc + x, 0);
    println!("Sum of doubled values: {}", sum);
    assert_eq!(sum, 90);

    let evens = array.filter(|x| x % 2 == 0);
    println!("Even values: {:?}", evens);

    println!("Shifting elements...");
    while let Ok(val) = array.shift() {
        print!("{} ", val);
    }
    println!("\nAll elements shifted.");

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
    println!("Integration test passed successfully.");
}
