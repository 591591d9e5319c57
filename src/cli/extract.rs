use std::path::Path;

use anyhow::Context;
use fitcoach_shared::nutrition::NutritionPlan;

/// Run the grocery pipeline over a plan document on disk and print the list
pub fn extract(path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let plan: NutritionPlan = serde_json::from_str(&content)
        .with_context(|| format!("invalid nutrition plan in {}", path.display()))?;

    let items = fitcoach_grocery::extract_items(&plan);
    tracing::info!(items = items.len(), "Grocery items extracted");

    println!("{}", serde_json::to_string_pretty(&items)?);

    Ok(())
}
