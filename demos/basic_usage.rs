// ============================================================================
// Basic Usage Example
// ============================================================================

use nano_money::prelude::*;

fn main() -> MoneyResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Nano Money Example ===\n");

    let price = Money::parse("USD 19.99")?;
    let shipping = Money::new("USD", 4, 500_000_000)?;
    println!("Price:    {}", price);
    println!("Shipping: {}", shipping);

    let total = price.checked_add(&shipping)?;
    println!("Total:    {}", total);

    let discounted = total.checked_sub(5)?;
    println!("After 5 off: {}", discounted);

    let split = discounted.checked_div(3)?;
    println!("Split 3 ways: {} ({:?})", split, split);

    let ledger = vec![
        Money::new("USD", 10, 0)?,
        Money::new("USD", -2, -750_000_000)?,
        Money::new("USD", 0, 1)?,
    ];
    if let Some(balance) = Money::sum(ledger)? {
        println!("Ledger balance: {}", balance);
    }

    println!("\nRejected operations:");
    if let Err(err) = total.checked_add(Money::new("EUR", 1, 0)?) {
        println!("  {}", err);
    }
    if let Err(err) = total.checked_div(0) {
        println!("  {}", err);
    }
    if let Err(err) = Money::new("USD", 1, -1) {
        println!("  {}", err);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
