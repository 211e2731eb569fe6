//! gather CLI - runs the built-in scenarios and prints one line per scenario.
//!
//! ```text
//! main() -> builtin_scenarios() -> run_scenario() -> println!("{report}")
//! ```
//!
//! Scenario results never affect the exit status.

use anyhow::{Context, Result};
use tokio::runtime::Builder;

use gather::{builtin_scenarios, logging, run_scenario};

fn main() -> Result<()> {
    logging::init();

    let runtime = Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        for scenario in builtin_scenarios() {
            let report = run_scenario(scenario).await;
            println!("{report}");
        }
    });

    Ok(())
}
