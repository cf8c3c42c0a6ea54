use lens_core::{TestCase, TestSuite};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaRecord};
use crate::commands::scan::ScanReport;
use crate::output::output;

/// Handle `lens schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for(args.record)?, flags.format)
}

/// JSON Schema of an output record.
pub fn schema_for(record: SchemaRecord) -> anyhow::Result<serde_json::Value> {
    let schema = match record {
        SchemaRecord::Suite => schemars::schema_for!(TestSuite),
        SchemaRecord::Case => schemars::schema_for!(TestCase),
        SchemaRecord::Report => schemars::schema_for!(ScanReport),
    };
    Ok(serde_json::to_value(schema)?)
}
