//! Centroid summary command.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// Print the model, dimensionality and per-class centroid counts.
pub fn show_centroids(state: &AppState, json: bool) -> Result<()> {
    let summary = state.classifier.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} ({} dims, {} training examples, k = {})",
        style("Model:").bold(),
        style(&summary.model).cyan(),
        summary.dimension,
        summary.training_examples,
        summary.clusters_per_class
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Label").fg(Color::White),
        Cell::new("Centroids").fg(Color::White),
    ]);
    for class in &summary.classes {
        table.add_row(vec![
            Cell::new(class.label).fg(Color::Cyan),
            Cell::new(class.centroids),
        ]);
    }
    println!("{table}");
    println!();

    Ok(())
}
