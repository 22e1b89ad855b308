//! Irreducible Polynomials and Extension Fields
//!
//! This demo:
//! - Sieves the monic irreducible polynomials over a prime field
//! - Persists them under `--dir` so reruns only load them
//! - Builds GF(p^n) from the cached defining polynomial and does arithmetic
//!
//! Run with: cargo run --example irreducible_polys -- [PRIME] [DEGREE] [--dir DIR]

use std::path::PathBuf;
use std::process;

use clap::Parser;
use gfext::{
    CacheConfig, ExtensionField, Field, IrreduciblePolynomialCache, Ring, SieveBound,
    DEFAULT_DIRECTORY,
};

/// List irreducible polynomials over GF(p) and build GF(p^n) from them.
#[derive(Parser, Debug)]
#[command(name = "irreducible_polys")]
struct Args {
    /// Characteristic of the base field.
    #[arg(default_value_t = 2)]
    prime: u64,

    /// Extension degree; every degree up to it is listed.
    #[arg(default_value_t = 4)]
    degree: usize,

    /// Directory holding the `irred_polys_<p>.txt` files.
    #[arg(long, default_value = DEFAULT_DIRECTORY)]
    dir: PathBuf,

    /// Keep nothing on disk.
    #[arg(long, conflicts_with = "dir")]
    in_memory: bool,

    /// Use the floor(sqrt(degree)) sieve cutoff of older cache files.
    #[arg(long)]
    sqrt_bound: bool,
}

impl Args {
    fn config(&self) -> CacheConfig {
        let config = if self.in_memory {
            CacheConfig::in_memory()
        } else {
            CacheConfig::default().with_directory(&self.dir)
        };
        if self.sqrt_bound {
            config.with_sieve_bound(SieveBound::SquareRoot)
        } else {
            config
        }
    }
}

fn main() {
    let args = Args::parse();
    let cache = IrreduciblePolynomialCache::new(args.config());

    if let Err(e) = run(&cache, args.prime, args.degree) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cache: &IrreduciblePolynomialCache, prime: u64, degree: usize) -> gfext::Result<()> {
    println!("=== Irreducible polynomials over GF({prime}) ===\n");

    for d in 1..=degree {
        let polys = cache.irreducibles(prime, d)?;
        println!("degree {d}: {} polynomials", polys.len());
        for p in polys.iter().take(6) {
            println!("  {p:?}");
        }
        if polys.len() > 6 {
            println!("  ...");
        }
    }

    println!("\n=== GF({prime}^{degree}) ===\n");

    let field = ExtensionField::new(prime, degree, cache)?;
    println!("defining polynomial: {:?}", field.defining_polynomial());
    match field.order() {
        Some(order) => println!("order: {order}"),
        None => println!("order: {prime}^{degree}"),
    }

    let Some(x) = field.x() else {
        println!("degree 1: the field is GF({prime}) itself");
        return Ok(());
    };

    let a = &x + &field.one();
    let b = a.pow(3);
    println!("a = x + 1       = {a:?}");
    println!("a^3             = {b:?}");
    println!("a * a^3         = {:?}", &a * &b);

    let inv = a.inverse()?;
    println!("a^-1            = {inv:?}");
    println!("a * a^-1 is one : {}", (&a * &inv).is_one());

    Ok(())
}
