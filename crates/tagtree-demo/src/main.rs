//! # tagtree-demo
//!
//! Prints hand-assembled markup next to a tree rendered by [`tagtree::HtmlBuilder`].

use clap::Parser;
use tagtree::{LineEnding, RenderOptions};
use tracing::debug;

use crate::{logging::init_logging, walkthrough::walkthrough};

mod logging;
mod walkthrough;

#[derive(Debug, Parser)]
#[command(name = "tagtree-demo", version, about = "Render a sample markup tree")]
struct Cli {
    /// Spaces per indent level
    #[arg(long, default_value_t = 2, value_name = "N")]
    indent: usize,

    /// Terminate lines with CRLF instead of LF
    #[arg(long)]
    crlf: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent_size: self.indent,
            line_ending: if self.crlf {
                LineEnding::CrLf
            } else {
                LineEnding::Lf
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let options = cli.render_options();
    debug!(?options, "starting walkthrough");

    print!("{}", walkthrough(&options)?);
    Ok(())
}
