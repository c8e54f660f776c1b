use schemars::{Schema, schema_for};
use yaga_core::{MapRecord, Omission, ParsedLink, Scene};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

fn schema(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::Scene => schema_for!(Scene),
        SchemaType::Record => schema_for!(MapRecord),
        SchemaType::Omission => schema_for!(Omission),
        SchemaType::Link => schema_for!(ParsedLink),
    }
}

/// Handle `yagamap schema`. Table format falls back to pretty JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema(args.type_name);
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}
