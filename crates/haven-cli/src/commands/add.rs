use haven_core::capture::LinkCaptureForm;
use haven_core::collection::LinkCollection;
use haven_core::Source;

use crate::commands::common::CommandContext;
use crate::error::CliError;

pub async fn run_add(
    mut context: CommandContext,
    url: &str,
    source: Source,
    category: Option<&str>,
) -> Result<(), CliError> {
    context.require_dashboard()?;

    let mut form = LinkCaptureForm::new();
    form.set_url(url)?;
    form.set_source(source);
    form.set_category(category.unwrap_or_default());

    let api = context.api_client()?;
    let mut collection = LinkCollection::new();
    let link = collection.save_from(&mut form, &api, &mut context.store).await?;

    println!("Saved {} [{}] ({})", link.url, link.category_label(), link.id);
    if !collection.links().is_empty() {
        println!("{} links saved", collection.links().len());
    }
    Ok(())
}
