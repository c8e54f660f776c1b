use serde::Serialize;
use yaga_core::{LinkParser, ParsedLink};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LinkArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, PartialEq, Eq, Serialize)]
struct LinkResponse {
    link: String,
    #[serde(flatten)]
    parsed: ParsedLink,
}

impl Tabular for LinkResponse {
    const HEADERS: &'static [&'static str] = &["Server", "X Coord", "Y Coord"];

    fn cells(&self) -> Vec<String> {
        let absent = || String::from("-");
        vec![
            self.parsed.zone.as_ref().map_or_else(absent, ToString::to_string),
            self.parsed.coords.map_or_else(absent, |c| c.x.to_string()),
            self.parsed.coords.map_or_else(absent, |c| c.y.to_string()),
        ]
    }
}

fn inspect(parser: &LinkParser, link: &str) -> LinkResponse {
    LinkResponse {
        link: link.to_string(),
        parsed: parser.parse(link),
    }
}

/// Handle `yagamap link`.
pub fn handle(args: &LinkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = inspect(&ctx.link_parser(), &args.url);
    output(&response, std::slice::from_ref(&response), flags.format)
}
