//! Executes a parsed [`Command`] against a freshly built array and renders
//! the outcome as output lines.

use anyhow::{Context, Result};
use dynamic_array::{map, reduce, DynamicArray};

use crate::cli::Command;

fn load(values: &[i64]) -> DynamicArray<i64> {
    let mut arr = DynamicArray::with_capacity(values.len());
    for &v in values {
        arr.push(v);
    }
    log::debug!("loaded {} values (capacity {})", arr.len(), arr.capacity());
    arr
}

fn swap_predicate(ascending: bool) -> impl Fn(&i64, &i64) -> bool {
    move |a: &i64, b: &i64| if ascending { a > b } else { a < b }
}

pub fn run(command: &Command) -> Result<Vec<String>> {
    let lines = match command {
        Command::Sort { ascending, values } => {
            let mut arr = load(values);
            arr.sort_by_swap(swap_predicate(*ascending));
            vec![format!("{:?}", arr)]
        }
        Command::Sorted { ascending, values } => {
            let arr = load(values);
            let sorted = arr.to_sorted(swap_predicate(*ascending));
            vec![format!("source: {:?}", arr), format!("sorted: {:?}", sorted)]
        }
        Command::Map { add, values } => {
            let arr = load(values);
            let shifted = map(&arr, |x| x + add);
            vec![format!("{:?}", shifted)]
        }
        Command::Reduce { init, values } => {
            let arr = load(values);
            let total = reduce(&arr, |acc, x, _| acc + x, *init);
            vec![total.to_string()]
        }
        Command::Where { eq, values } => {
            let arr = load(values);
            vec![format!("{:?}", arr.filter(|x| x == eq))]
        }
        Command::Pop { values } => {
            let mut arr = load(values);
            let last = arr.pop().context("pop failed")?;
            vec![format!("removed: {}", last), format!("remaining: {:?}", arr)]
        }
        Command::Shift { values } => {
            let mut arr = load(values);
            let first = arr.shift().context("shift failed")?;
            vec![format!("removed: {}", first), format!("remaining: {:?}", arr)]
        }
        Command::RemoveAt { index, values } => {
            let mut arr = load(values);
            let removed = arr
                .remove_at(*index)
                .with_context(|| format!("remove-at {} failed", index))?;
            vec![format!("removed: {}", removed), format!("remaining: {:?}", arr)]
        }
        Command::Stream { values } => {
            let arr = load(values);
            arr.stream(|s| s.map(|v| v.to_string()).collect())
        }
    };
    Ok(lines)
}
