//! A short tour of heterogeneous sets.

use hset::prelude::*;

fn main() -> Result<(), SetError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let a = hset![1, 'a'];
    let b = hset!['a', F32::from(2.5)];

    println!("A:     {a}\nB:     {b}");
    println!("A ∪ B: {}", &a | &b);
    println!("A ∩ B: {}", &a & &b);
    println!("A − B: {}", &a - &b);
    println!("A △ B: {}", &a ^ &b);

    for pair in &a * &b {
        println!("A × B ∋ {pair}");
    }
    for subset in power_set(&a)? {
        println!("P(A) ∋ {subset}");
    }

    Ok(())
}
