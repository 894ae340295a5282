use dynamic_array::DynamicArray;
use std::thread;

fn main() {
    println!("--- Cross-thread Ownership Transfer Example ---");
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.push(i);
    }

    println!("Original array (thread main): {:?}", arr);

    let handle = thread::spawn(move || {
        println!("Array in new thread: {:?}", arr);
        arr.push(100);
        arr
    });

    let arr = match handle.join() {
        Ok(arr) => arr,
        Err(payload) => std::panic::resume_unwind(payload),
    };
    println!("Array back in main thread: {:?}", arr);

    println!("--- Rendezvous Stream ---");
    let firsts: Vec<i32> = arr.stream(|s| {
        s.take(3)
            .inspect(|v| println!("consumer took {}", v))
            .copied()
            .collect()
    });
    println!("Stopped early after {:?}", firsts);
}
