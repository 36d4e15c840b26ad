//! Text rendering for tool responses.
//!
//! The bridge answers every invocation with plain text; these helpers produce
//! the delimited result blocks and the fixed informational messages.

use std::fmt::Write as _;

use crate::supermemory::SearchResult;
use serde_json::Value;

/// Message returned when the store reports no matches.
pub(crate) const NO_RESULTS_MESSAGE: &str = "No memories found matching your query.";

/// Maximum number of content chunks rendered per result.
const CHUNKS_PER_RESULT: usize = 3;

const RESULT_RULE: &str =
    "================================================================================";

/// Render a search response as a count line followed by one delimited block
/// per shown result, in the order the store returned them.
pub(crate) fn render_search_results(results: &[SearchResult], limit: usize) -> String {
    let shown = limit.min(results.len());
    let blocks: Vec<String> = results
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, result)| render_result_block(index + 1, result))
        .collect();

    format!(
        "Found {} memories (showing top {}):\n{}",
        results.len(),
        shown,
        blocks.join("\n")
    )
}

fn render_result_block(position: usize, result: &SearchResult) -> String {
    let title = result.title.as_deref().unwrap_or("Untitled");
    let score = result.score.unwrap_or(0.0);

    let mut block =
        format!("\n{RESULT_RULE}\nResult {position}: {title}\nRelevance Score: {score:.4}\n");

    if let Some(summary) = result.summary.as_deref().filter(|text| !text.is_empty()) {
        let _ = write!(block, "\nSummary: {summary}\n");
    }

    if !result.chunks.is_empty() {
        let _ = write!(block, "\nContent ({} chunks):\n", result.chunks.len());
        for (index, chunk) in result.chunks.iter().take(CHUNKS_PER_RESULT).enumerate() {
            if let Some(content) = chunk.content.as_deref().filter(|text| !text.is_empty()) {
                let _ = write!(block, "\n--- Chunk {} ---\n{content}\n", index + 1);
            }
        }
    }

    if let Some(metadata) = result.metadata.as_ref().filter(|map| !map.is_empty()) {
        let _ = write!(block, "\nMetadata: {}\n", Value::Object((*metadata).clone()));
    }

    block
}
