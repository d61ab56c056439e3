// ============================================================================
// Basic Usage Example
// ============================================================================

use number_format::prelude::*;

fn main() -> Result<(), FormatError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Number Format Example ===\n");

    // Amount field from an interchange record: N(17,2), non-negative
    let amount = NumberFormat::new(17, 2, true)?;
    println!("Created rule {} for amount fields\n", amount);

    println!("Checking candidate amounts...");
    for value in ["0", "0.0", "1,23", "1234567890.12", "0.000", "-1.23", "a.sd"] {
        println!("  {:>16} -> {}", value, amount.is_valid(value));
    }

    // The same rule read from interchange notation (sign policy is not
    // part of the notation, so parsed rules allow a minus)
    let parsed: NumberFormat = "N(17,2)".parse()?;
    println!("\nParsed {} from notation", parsed);
    println!("  {:>16} -> {}", "-1.23", parsed.is_valid("-1.23"));

    // Preset rules for common fields
    println!("\nPreset rules:");
    println!("  amount:        {}", NumberFormat::amount());
    println!("  signed amount: {}", NumberFormat::signed_amount());
    println!("  rate:          {}", NumberFormat::rate());
    println!("  sequence no:   {}", NumberFormat::integer(9)?);

    // Decomposition is available on its own
    println!("\nDecomposition of \"-12.34\":");
    if let Some(parts) = decompose("-12.34") {
        println!("  sign:     {:?}", parts.sign);
        println!("  integer:  {}", parts.integer);
        println!("  fraction: {}", parts.fraction);
    }

    Ok(())
}
