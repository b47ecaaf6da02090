//! One-shot classification from the command line.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Classify each text and print the predicted label.
///
/// A text that cannot be classified is reported and the command fails after
/// all texts have been attempted.
pub async fn classify_texts(state: &AppState, texts: &[String], json: bool) -> Result<()> {
    let mut results = Vec::with_capacity(texts.len());
    let mut failures = 0usize;

    for text in texts {
        let outcome = state.classifier.predict(text).await;
        if outcome.is_err() {
            failures += 1;
        }
        results.push((text, outcome));
    }

    if json {
        let rows: Vec<serde_json::Value> = results
            .iter()
            .map(|(text, outcome)| match outcome {
                Ok(p) => serde_json::json!({
                    "text": text,
                    "label": p.label,
                    "similarity": p.similarity,
                }),
                Err(e) => serde_json::json!({
                    "text": text,
                    "error": e.to_string(),
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!();
        for (text, outcome) in &results {
            match outcome {
                Ok(p) => println!(
                    "  {} {}  {}",
                    style(format!("[{}]", p.label)).cyan().bold(),
                    text,
                    style(format!("(similarity {:.3})", p.similarity)).dim()
                ),
                Err(e) => println!("  {} {}  {}", style("[?]").red().bold(), text, style(e).red()),
            }
        }
        println!();
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} texts could not be classified", texts.len());
    }
    Ok(())
}
