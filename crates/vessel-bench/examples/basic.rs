//! Minimal lifecycle walkthrough: init, fill, search, shrink, destroy.
//!
//! Run with `cargo run -p vessel-bench --example basic`.

use vessel::{Vessel, VesselError};

fn main() -> Result<(), VesselError> {
    let mut values = Vessel::new();
    values.init();

    values.push_back(5)?;
    values.push_back(12)?;
    values.push_back(13)?;
    values.extend_from_slice(&[14, 48, 50])?;

    print!("contents:");
    for value in &values {
        print!(" {value}");
    }
    println!();
    println!("len {} capacity {}", values.len(), values.capacity());

    match values.find(&48) {
        Some(index) => println!("48 found at index {index}"),
        None => println!("48 not found"),
    }

    values.shrink_to_fit()?;
    println!("after shrink: capacity {}", values.capacity());

    values.destroy()?;
    Ok(())
}
