//! Combinators example for sentinel-validator

use sentinel_validator::prelude::*;
use sentinel_validator::{all_of, any_of};

#[derive(Debug)]
struct Reservation {
    table: u8,
    guests: u8,
    seats: u8,
    note: Option<String>,
}

fn main() {
    // Combine validators with AND
    let table = and(greater_or_equal(1u8), less_or_equal(20u8));

    println!("Testing table number validation (1-20):\n");

    for n in [7u8, 0, 25] {
        match table.validate(&n) {
            Ok(()) => println!("✓ table {n} is valid"),
            Err(e) => println!("✗ table {n} is invalid:\n{e}"),
        }
    }

    // Flat composition over a struct, mixing field and cross-field checks
    let reservation = all_of![
        with_value(|r: &Reservation| r.table, table),
        with_value(|r: &Reservation| r.guests, positive()),
        with_values(|r: &Reservation| r.guests, |r: &Reservation| r.seats, less_or_equal),
        with_value(|r: &Reservation| r.note.is_some(), is_false()),
    ];

    let requests = [
        Reservation {
            table: 4,
            guests: 2,
            seats: 4,
            note: None,
        },
        Reservation {
            table: 21,
            guests: 6,
            seats: 4,
            note: Some("window seat".to_string()),
        },
    ];

    println!("\nTesting reservations:\n");

    for request in &requests {
        match reservation.validate(request) {
            Ok(()) => println!("✓ {request:?}"),
            Err(e) => println!("✗ {request:?}\n{e}"),
        }
    }

    // Alternatives: accept one of a few fixed values
    let party_size = any_of![equal(2u8), equal(4u8), equal(6u8)];
    println!("\nparty of 3 accepted: {}", party_size.validate(&3).is_ok());
}
