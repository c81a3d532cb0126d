//! `smd man` – render the man page to stdout.

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let man = Man::new(Cli::command());
    let mut page = Vec::new();
    man.render(&mut page)?;
    std::io::stdout().write_all(&page)?;
    Ok(())
}
