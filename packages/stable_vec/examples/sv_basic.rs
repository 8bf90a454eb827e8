//! Basic usage of the `stable_vec` crate:
//!
//! * Creating a collection.
//! * Adding values.
//! * Retrieving values.
//! * Removing values and observing slot reuse.

use stable_vec::StableVec;

fn main() {
    let mut roster = StableVec::new();

    // Inserting a value gives you an index that you can later use to look it up again.
    let alice = roster.insert("Alice".to_string());
    let bob = roster.insert("Bob".to_string());
    let charlie = roster.insert("Charlie".to_string());

    println!(
        "Roster contains {} entries, with an auto-adjusting capacity of {}",
        roster.len(),
        roster.capacity()
    );

    // Retrieving a value is fast, similar to `Vec[index]`.
    println!("Entry at {alice}: {}", roster[alice]);

    // Removing a value vacates its slot without moving any other value.
    roster.remove(bob);
    println!("Entry at {charlie} after removal: {}", roster[charlie]);

    // The vacated slot is the next one that insert() reuses.
    let dave = roster.insert("Dave".to_string());
    println!("New entry reused index {dave} (was {bob})");

    // A push, in contrast, always appends a fresh slot at the end.
    let erin = roster.push("Erin".to_string());
    println!("Pushed entry got fresh index {erin}");

    // You can also modify the values in-place.
    roster[alice].push_str(" Smith");
    println!("Modified entry: {}", roster[alice]);
}
