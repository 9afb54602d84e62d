// src/platforms/hackerone/scope.rs
use tracing::debug;

use super::client::HackerOneClient;
use super::types::ProgramDetail;
use crate::error::{Result, ScopeError};
use crate::types::{ProgramData, ScopeElement, ScopeQuery};

/// Fetch one program's structured scope and filter it
pub async fn fetch_program_scope(
    client: &HackerOneClient,
    handle: &str,
    query: &ScopeQuery,
) -> Result<ProgramData> {
    let url = client.program_detail_url(handle)?;
    debug!("Fetching scope for program: {}", handle);

    let response = client.get_with_retry(&url).await?;
    let detail: ProgramDetail =
        serde_json::from_str(&response.body).map_err(|e| ScopeError::MalformedPayload {
            url: url.clone(),
            source: e,
        })?;

    let program = extract_scope(client.public_program_url(handle), &detail, query);

    debug!(
        "Found {} in-scope and {} out-of-scope assets for program: {}",
        program.in_scope.len(),
        program.out_of_scope.len(),
        handle
    );
    Ok(program)
}

/// Apply category and eligibility filters to a program's structured scope
///
/// A program without any structured scope yields the single
/// `NO_IN_SCOPE_TABLE` element. A program whose entries are all filtered out
/// yields an empty in-scope list.
pub fn extract_scope(url: String, detail: &ProgramDetail, query: &ScopeQuery) -> ProgramData {
    let scopes = &detail.relationships.structured_scopes.data;
    let mut in_scope = Vec::new();
    let mut out_of_scope = Vec::new();

    for scope in scopes {
        let attributes = &scope.attributes;
        let asset_type = attributes.asset_type.as_deref().unwrap_or("");

        if !query.categories.contains(asset_type) {
            continue;
        }

        let element = ScopeElement::new(
            attributes.asset_identifier.clone().unwrap_or_default(),
            single_line(attributes.instruction.as_deref().unwrap_or("")),
        );

        if !attributes.eligible_for_submission.unwrap_or(false) {
            out_of_scope.push(element);
        } else if !query.bounty_only || attributes.eligible_for_bounty.unwrap_or(false) {
            in_scope.push(element);
        }
    }

    if scopes.is_empty() {
        in_scope.push(ScopeElement::no_scope_table());
    }

    ProgramData {
        url,
        in_scope,
        out_of_scope,
    }
}

fn single_line(text: &str) -> String {
    text.replace('\n', "  ")
}
