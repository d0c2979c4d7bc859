use std::path::PathBuf;

use clap::{Parser, Subcommand};
use timebar::{Consistency, document, document::Format};

use crate::{prelude::*, tables::build_intervals_table};

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the intervals of a document and report inconsistent ones.
    #[clap(name = "check")]
    Check(CheckArgs),

    /// Re-encode a document in another format.
    #[clap(name = "convert")]
    Convert(ConvertArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// JSON or TOML document.
    #[clap(env = "TIMEBAR_DOCUMENT")]
    pub path: PathBuf,

    /// Document format, inferred from the extension by default.
    #[clap(long, env = "TIMEBAR_FORMAT")]
    pub format: Option<Format>,

    /// Relative tolerance when comparing the duration with the span between start and end.
    #[clap(long, env = "TIMEBAR_TOLERANCE", default_value_t = Consistency::DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Fail when any interval is inconsistent.
    #[clap(long, env = "TIMEBAR_STRICT")]
    pub strict: bool,
}

impl CheckArgs {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn run(&self) -> Result {
        let consistency = Consistency::builder().tolerance(self.tolerance).build()?;
        let intervals = document::read(&self.path, self.format)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        info!(n_intervals = intervals.len(), "loaded");
        println!("{}", build_intervals_table(&intervals, &consistency));

        let mut n_inconsistent = 0_usize;
        for (index, inconsistency) in consistency.report(&intervals) {
            warn!(index, %inconsistency, "inconsistent interval");
            n_inconsistent += 1;
        }
        info!(n_inconsistent, "checked");

        if self.strict && n_inconsistent != 0 {
            bail!("{n_inconsistent} of {} intervals are inconsistent", intervals.len());
        }
        Ok(())
    }
}

#[derive(Parser)]
pub struct ConvertArgs {
    pub input: PathBuf,

    pub output: PathBuf,

    /// Input format, inferred from the extension by default.
    #[clap(long)]
    pub from: Option<Format>,

    /// Output format, inferred from the extension by default.
    #[clap(long)]
    pub to: Option<Format>,
}

impl ConvertArgs {
    #[instrument(skip_all, fields(input = %self.input.display(), output = %self.output.display()))]
    pub fn run(&self) -> Result {
        let intervals = document::read(&self.input, self.from)
            .with_context(|| format!("failed to read `{}`", self.input.display()))?;
        document::write(&self.output, &intervals, self.to)
            .with_context(|| format!("failed to write `{}`", self.output.display()))?;
        info!(n_intervals = intervals.len(), "converted");
        Ok(())
    }
}
