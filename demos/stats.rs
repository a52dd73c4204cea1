use clap::Parser;
use duo_hash::HashTable;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'k', long = "keys", default_value_t = 1000)]
    keys: usize,

    #[arg(short = 'r', long = "remove_fraction", default_value_t = 0.3)]
    remove_fraction: f64,
}

fn main() -> duo_hash::Result<()> {
    let args = Args::parse();

    println!("Creating HashTable with target capacity: {}", args.keys);

    let mut table = HashTable::with_capacity(args.keys)?;

    println!("Actual capacity: {}", table.capacity());
    println!("Filling table with {} byte-string entries...", args.keys);

    for i in 0..args.keys {
        table.insert(format!("key_{i:08}"), format!("value_{i:08}"))?;
    }

    println!("Inserted {} entries", table.len());
    println!("Capacity after growth: {}", table.capacity());

    let removals = ((args.keys as f64 * args.remove_fraction) as usize).min(args.keys);
    println!("Removing {removals} entries to seed tombstones...");

    for i in 0..removals {
        table.remove(format!("key_{i:08}"))?;
    }

    println!();
    table.stats().print();

    Ok(())
}
