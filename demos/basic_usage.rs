// ============================================================================
// Basic Usage Example
// ============================================================================

use scaled_decimal::{DecimalError, ScaledDecimal};

fn main() -> Result<(), DecimalError> {
    println!("=== Scaled Decimal Example ===\n");

    // Token balances arrive at whatever precision the source uses:
    // a 6-decimal stablecoin, an 8-decimal wrapped asset, an 18-decimal token.
    let usdc = ScaledDecimal::parse("1523.904312", 6)?;
    let wbtc = ScaledDecimal::parse("0.04815230", 8)?;
    let weth = ScaledDecimal::parse("2.456789012345678901", 18)?;

    println!("Balances:");
    println!("  USDC: {}", usdc);
    println!("  WBTC: {}", wbtc);
    println!("  WETH: {}", weth);

    // Prices quoted in USD at 8 decimals
    let wbtc_price = ScaledDecimal::parse("64123.50000000", 8)?;
    let weth_price = ScaledDecimal::parse("3412.75000000", 8)?;

    // Multiplication is exact; the products carry summed precision until we
    // extract them at the reporting precision.
    let wbtc_value = wbtc.mul(&wbtc_price);
    let weth_value = weth.mul(&weth_price);
    let total = usdc.add(&wbtc_value).add(&weth_value);

    println!("\nPortfolio value (USD, 2dp): {}", rounded(&total, 2)?);

    // Division fixes its output precision at the call site
    let weth_per_wbtc = wbtc_price.div(&weth_price, 6)?;
    println!("WETH per WBTC: {}", weth_per_wbtc);

    // Comparisons are scale-independent; min keeps the winning operand's
    // original precision.
    let quote_a = ScaledDecimal::parse("176.398663", 6)?;
    let quote_b = ScaledDecimal::parse("176.398662", 9)?;
    let best = quote_a.clone().min(quote_b.clone());
    println!("\nBest quote of {} and {}: {}", quote_a, quote_b, best);

    // Precision loss is never silent
    match ScaledDecimal::parse("3.456", 2) {
        Err(DecimalError::FractionalComponentExceedsDecimals) => {
            println!("\nRejected '3.456' at 2 decimals: fractional component exceeds decimals");
        },
        other => println!("\nUnexpected: {:?}", other),
    }

    Ok(())
}

/// Re-wrap a value at a coarser reporting precision.
fn rounded(value: &ScaledDecimal, decimals: i32) -> Result<ScaledDecimal, DecimalError> {
    Ok(ScaledDecimal::from_raw(
        value.to_raw(decimals)?,
        decimals as u32,
    ))
}
