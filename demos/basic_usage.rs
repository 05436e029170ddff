// demos/basic_usage.rs
//! Basic usage example of the vector

use growvec::prelude::*;

fn main() -> Result<()> {
    println!("=== Basic Vector Usage ===\n");

    // 1. Build from a slice with a growth factor of 2
    let mut v = Vector::from_slice(&[1.0, 2.0, 3.0], 2.0);
    println!("Start: {:?} (capacity {})", v, v.capacity());

    v.push_back(4.0);
    println!("After push_back(4): {:?} (capacity {})", v, v.capacity());

    v.insert(10.0, 1)?;
    println!("After insert(10, 1): {:?}", v);

    v.erase(0, 2)?;
    println!("After erase(0, 2): {:?}", v);

    println!("find(3) = {:?}", v.find(3.0));
    println!("find(99) = {:?}", v.find(99.0));

    println!("\n=== Out of Range ===\n");

    // Rejected calls leave the vector as it was
    match v.insert(7.0, 10) {
        Ok(()) => println!("Unexpected success"),
        Err(e) => println!("Rejected: {}", e),
    }
    println!("Still: {:?} (size {})", v, v.size());

    println!("\n=== Wrap-Around Indexing ===\n");

    println!("v[0] = {}, v[4] = {}", v[0], v[4]);

    println!("\n=== Copy and Move ===\n");

    let copy = v.clone();
    let moved = v.take();
    println!("Clone: {:?}", copy);
    println!("Moved: {:?}", moved);
    println!("Source after take: size {}, capacity {}", v.size(), v.capacity());

    println!("\n=== Cursor Walk ===\n");

    let mut it = moved.begin();
    let end = moved.end();
    while it != end {
        if let Some(value) = it.get() {
            println!("  [{}] = {}", it.offset(), value);
        }
        it.advance();
    }

    println!("\n=== Capacity Management ===\n");

    let mut grown = moved;
    grown.reserve(32);
    println!("After reserve(32): {:?}", grown.stats());
    grown.shrink_to_fit();
    println!("After shrink_to_fit: {:?}", grown.stats());

    Ok(())
}
