//! Example 01: Basic List Operations
//!
//! This example walks through adding, completing and removing tasks, first
//! by display position and then by stable id.
//!
//! Run with: cargo run --example 01_basic_list

use eyre::Result;
use tasklist::{TaskList, render};

fn main() -> Result<()> {
    println!("tasklist Basic Operations Example");
    println!("=================================\n");

    let mut list = TaskList::new();

    // ADD: Append two tasks
    println!("1. ADD - Appending tasks...");
    list.add_task("Buy milk");
    let snapshot = list.add_task("Walk dog");
    print!("{}", render::render_text(&snapshot));
    println!();

    // ADD (blank): Ignored without error
    println!("2. ADD - Submitting blank text...");
    let snapshot = list.add_task("   ");
    println!("   Still {} tasks at revision {}\n", snapshot.len(), snapshot.revision);

    // COMPLETE: By position, as a checkbox click would
    println!("3. COMPLETE - Checking off position 0...");
    let snapshot = list.set_completed(0, true)?;
    print!("{}", render::render_text(&snapshot));
    println!();

    // REMOVE: By id, which stays valid however the list shifts
    println!("4. REMOVE - Deleting the first task by id...");
    let id = list.tasks()[0].id.clone();
    let snapshot = list.remove_by_id(&id)?;
    print!("{}", render::render_text(&snapshot));
    println!();

    // Out-of-range positions fail instead of corrupting the order
    println!("5. ERROR - Removing position 7...");
    match list.remove_task(7) {
        Ok(_) => println!("   Unexpectedly succeeded"),
        Err(e) => println!("   Error: {}", e),
    }
    println!();

    println!("Example complete!");
    Ok(())
}
