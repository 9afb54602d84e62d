// src/platforms/hackerone/handles.rs
use tracing::{debug, info};

use super::client::HackerOneClient;
use super::types::{ErrorEnvelope, ProgramsPage};
use crate::error::{Result, ScopeError};
use crate::types::VisibilityFilter;

/// Walk every page of the program listing and collect matching handles
///
/// Handles keep the order the API returns them in: page by page, then
/// position within the page. Stops at the first page without a `next` link.
pub async fn list_handles(
    client: &HackerOneClient,
    filter: &VisibilityFilter,
) -> Result<Vec<String>> {
    let mut handles = Vec::new();
    let mut current_url = client.programs_url()?;
    let mut pages = 0;

    loop {
        let response = client.get_with_retry(&current_url).await?;
        pages += 1;

        if response.status != 200 {
            return Err(ScopeError::UnexpectedStatus {
                url: current_url,
                status: response.status,
            });
        }

        if ErrorEnvelope::signals_unauthorized(&response.body) {
            return Err(ScopeError::Unauthorized);
        }

        let page: ProgramsPage =
            serde_json::from_str(&response.body).map_err(|e| ScopeError::MalformedPayload {
                url: current_url.clone(),
                source: e,
            })?;

        let before = handles.len();
        for program in page.data {
            let attributes = program.attributes;
            let state = attributes.state.as_deref().unwrap_or("");
            let submission_state = attributes.submission_state.as_deref().unwrap_or("");

            if !filter.admits(state, submission_state) {
                continue;
            }

            match attributes.handle {
                Some(handle) if !handle.is_empty() => handles.push(handle),
                _ => debug!("Skipping listed program without a handle"),
            }
        }

        debug!(
            "Page {} ({}): {} matching programs",
            pages,
            current_url,
            handles.len() - before
        );

        match page.links.next {
            Some(next) if !next.is_empty() => current_url = next,
            _ => break,
        }
    }

    info!("Found {} programs across {} pages", handles.len(), pages);
    Ok(handles)
}
