use chrono::Local;
use haven_core::collection::{LinkCollection, TimelineDay};
use haven_core::timeline::CategoryFilter;

use crate::commands::common::{format_timeline_lines, CommandContext};
use crate::error::CliError;

pub async fn run_list(
    mut context: CommandContext,
    category: Option<&str>,
    as_json: bool,
) -> Result<(), CliError> {
    context.require_dashboard()?;
    let api = context.api_client()?;

    let mut collection = LinkCollection::new();
    collection.refresh(&api, &mut context.store).await?;
    if let Some(label) = category {
        collection.select(CategoryFilter::from_label(label));
    }

    let days: Vec<TimelineDay> = collection.timeline(&Local);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else {
        for line in format_timeline_lines(&days) {
            println!("{line}");
        }
    }

    Ok(())
}
