//! Click Demo
//!
//! Drives the calculator through the mock DOM page, clicking buttons by
//! element ID the way a user would, then runs the unified specifications.
//!
//! Run with: RUST_LOG=debug cargo run --example click_demo

use pocket_calc::core::CalcResult;
use pocket_calc::driver::{run_full_specification, CalculatorDriver};
use pocket_calc::wasm::WasmDriver;
use tracing_subscriber::EnvFilter;

fn main() -> CalcResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Pocket Calculator - Mock DOM Clicks ===");
    println!();

    let mut driver = WasmDriver::new()?;

    let clicks = [
        "btn-1", "btn-2", "btn-plus", "btn-3", "btn-times", "btn-4", "equal",
    ];
    for id in clicks {
        driver.click(id)?;
        println!(
            "click {id:<10} number={:<8} equation={}",
            format!("{:?}", driver.number_text()),
            driver.equation_text()
        );
    }

    println!();
    println!("DOM event history:");
    for (i, event) in driver.dom().borrow().event_history().iter().enumerate() {
        println!("  [{i:>2}] {event:?}");
    }

    println!();
    println!("State after the run:");
    println!("  {:?}", driver.state());

    let mut fresh = WasmDriver::new()?;
    run_full_specification(&mut fresh)?;
    println!();
    println!("Unified specification: all checks passed");
    Ok(())
}
