use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use kinbook_core::birthdays_per_week;
use kinbook_core::time::{local_today, parse_iso_date};

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Reference date (YYYY-MM-DD); defaults to the local date
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}

pub fn birthdays(ctx: &Context<'_>, args: BirthdaysArgs) -> Result<()> {
    let today = match args.today.as_deref() {
        Some(raw) => parse_iso_date(raw).with_context(|| format!("parse --today {raw:?}"))?,
        None => local_today(),
    };
    let directory = ctx.store.load().with_context(|| "load address book")?;
    let report = birthdays_per_week(&directory, today);

    if ctx.json {
        return print_json(&report);
    }
    println!("{}", report.render());
    Ok(())
}
