/*++

Licensed under the Apache-2.0 license.

File Name:

   main.rs

Abstract:

    Main entry point for the RSA key conversion tool. Reads the modulus,
    exponent and firmware signature files from the current directory and
    emits the C header/source pair the bootloader links against.

--*/

use anyhow::Context;

mod codegen;
mod keys;

use keys::KeyMaterial;

const MODULUS_PATH: &str = "modulus.hex";
const EXPONENT_PATH: &str = "exponent.txt";
const SIGNATURE_PATH: &str = "signature.sig";
const HEADER_PATH: &str = "rsa_keys.h";
const SOURCE_PATH: &str = "rsa_keys.c";

// Sentinel exit code the build scripts check for.
const EXIT_FAILURE: i32 = 49;

fn run() -> anyhow::Result<()> {
    println!("Converting RSA key data to C arrays...\n");

    println!("Reading {MODULUS_PATH}...");
    let modulus_hex = std::fs::read_to_string(MODULUS_PATH)
        .with_context(|| format!("Failed to read {MODULUS_PATH}"))?;
    let modulus =
        keys::decode_hex(&modulus_hex).with_context(|| format!("Invalid {MODULUS_PATH}"))?;

    println!("Reading {EXPONENT_PATH}...");
    let exponent_str = std::fs::read_to_string(EXPONENT_PATH)
        .with_context(|| format!("Failed to read {EXPONENT_PATH}"))?;
    let exponent =
        keys::parse_exponent(&exponent_str).with_context(|| format!("Invalid {EXPONENT_PATH}"))?;

    println!("Reading {SIGNATURE_PATH}...");
    let signature = std::fs::read(SIGNATURE_PATH)
        .with_context(|| format!("Failed to read {SIGNATURE_PATH}"))?;

    let keys = KeyMaterial {
        modulus,
        exponent,
        signature,
    };
    let header = codegen::header_file(&keys);
    let source = codegen::source_file(&keys);

    println!("Writing {HEADER_PATH}...");
    std::fs::write(HEADER_PATH, header)
        .with_context(|| format!("Failed to write {HEADER_PATH}"))?;

    println!("Writing {SOURCE_PATH}...");
    std::fs::write(SOURCE_PATH, source)
        .with_context(|| format!("Failed to write {SOURCE_PATH}"))?;

    println!("Done.");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        println!("Error: {err:#}");
        std::process::exit(EXIT_FAILURE);
    }
}
