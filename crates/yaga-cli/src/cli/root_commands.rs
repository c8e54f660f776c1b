use clap::{Args, Subcommand, ValueEnum};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build the marker scene for one zone from an operator's sheet.
    Render(RenderArgs),
    /// List zones registered in the dimension sheet.
    Servers,
    /// Show what a single marker link parses to.
    Link(LinkArgs),
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Marker sheet share link, or a bare sheet ID.
    #[arg(long)]
    pub sheet: String,

    /// Zone (server) to render; case-insensitive.
    #[arg(long)]
    pub server: String,

    /// Show markers already marked completed.
    #[arg(long)]
    pub include_completed: bool,

    /// Hide completed markers even when the config shows them.
    #[arg(long, conflicts_with = "include_completed")]
    pub hide_completed: bool,

    /// Also write an interactive HTML map to the output directory.
    #[arg(long)]
    pub html: bool,
}

impl RenderArgs {
    /// Whether completed markers stay on the map, given the configured default.
    #[must_use]
    pub const fn completed_visible(&self, default: bool) -> bool {
        if self.include_completed {
            true
        } else if self.hide_completed {
            false
        } else {
            default
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct LinkArgs {
    /// Marker link, e.g. `https://xanadu.yaga.host/#120,40`.
    pub url: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Output type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Scene,
    Record,
    Omission,
    Link,
}
