use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use kinbook_core::dto::RecordDto;

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
}

pub fn list_contacts(ctx: &Context<'_>) -> Result<()> {
    let directory = ctx.store.load().with_context(|| "load address book")?;

    if ctx.json {
        let items: Vec<RecordDto> = directory.iter().map(RecordDto::from).collect();
        return print_json(&items);
    }

    if directory.is_empty() {
        println!("No contacts.");
        return Ok(());
    }
    for record in &directory {
        println!("{}", record);
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let directory = ctx.store.load().with_context(|| "load address book")?;
    let record = directory.find(&args.name)?;

    if ctx.json {
        return print_json(&RecordDto::from(record));
    }
    println!("{}", record);
    Ok(())
}
