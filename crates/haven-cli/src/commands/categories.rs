use haven_core::collection::LinkCollection;
use haven_core::timeline::CategoryFilter;

use crate::commands::common::{format_category_lines, CommandContext};
use crate::error::CliError;

pub async fn run_categories(mut context: CommandContext, as_json: bool) -> Result<(), CliError> {
    context.require_dashboard()?;
    let api = context.api_client()?;

    let mut collection = LinkCollection::new();
    collection.refresh(&api, &mut context.store).await?;
    let categories = collection.categories();

    if as_json {
        let labels = categories
            .iter()
            .map(CategoryFilter::label)
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&labels)?);
    } else {
        for line in format_category_lines(&categories, collection.selected()) {
            println!("{line}");
        }
    }
    Ok(())
}
