//! Reasons command implementation.

use boson_domain::{reasons_table, RevertReason};

use crate::output;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&reasons_table())?);
        return Ok(());
    }

    for reason in RevertReason::ALL {
        println!("{}", output::format_reason_row(reason.name(), reason.message()));
    }
    Ok(())
}
