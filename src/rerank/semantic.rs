//! Semantic rerank scoring via an external relevance judge.

use regex::Regex;
use serde::Deserialize;

use crate::analysis;
use crate::error::{Result, XiphosError};
use crate::hybrid_search::types::ScoredText;
use crate::judge::RelevanceJudge;

/// One `{index, score}` entry from the judge's response.
///
/// `index` is 1-based, matching the numbered snippet listing. Entries
/// without an index are skipped; entries without a score count as 0.0.
#[derive(Debug, Deserialize)]
struct JudgeEntry {
    index: Option<i64>,
    #[serde(default)]
    score: f32,
}

/// Score candidates by asking the relevance judge.
///
/// Presents the query and a 1-based numbered listing of snippets (each
/// truncated to `snippet_max_chars`) and parses the response into one score
/// per candidate. Errors when the judge is unreachable or the response
/// carries no parseable JSON list; the caller decides the fallback.
pub(crate) async fn score(
    judge: &dyn RelevanceJudge,
    query: &str,
    results: &[ScoredText],
    snippet_max_chars: usize,
) -> Result<Vec<f32>> {
    let snippets = results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}", i + 1, analysis::truncate_chars(&r.text, snippet_max_chars)))
        .collect::<Vec<_>>()
        .join("\n");

    let response = judge.judge(query, &snippets).await?;

    parse_scores(&response, results.len())
        .ok_or_else(|| XiphosError::rerank("judge response carried no parseable score list"))
}

/// Extract per-candidate scores from a judge response.
///
/// Finds the outermost JSON list in the response (the judge is asked for
/// bare JSON but routinely wraps it in prose) and parses it into
/// [`JudgeEntry`] records. Indices outside `1..=candidates` are ignored;
/// candidates the judge did not score default to 0.0. Returns `None` when
/// no list is present or it does not parse, so the caller can fall back to
/// lexical scoring for the whole batch.
pub(crate) fn parse_scores(response: &str, candidates: usize) -> Option<Vec<f32>> {
    let list_pattern = Regex::new(r"(?s)\[.*\]").ok()?;
    let list = list_pattern.find(response)?.as_str();

    let entries: Vec<JudgeEntry> = serde_json::from_str(list).ok()?;

    let mut scores = vec![0.0; candidates];
    for entry in entries {
        let Some(index) = entry.index else { continue };
        if index >= 1 && (index as usize) <= candidates {
            scores[index as usize - 1] = entry.score;
        }
    }

    Some(scores)
}
