// src/platforms/hackerone/types.rs
use serde::Deserialize;

/// One page of `GET /programs`
#[derive(Debug, Default, Deserialize)]
pub struct ProgramsPage {
    #[serde(default)]
    pub data: Vec<ListedProgram>,
    #[serde(default)]
    pub links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageLinks {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListedProgram {
    #[serde(default)]
    pub attributes: ListedProgramAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListedProgramAttributes {
    pub handle: Option<String>,
    pub state: Option<String>,        // public_mode, soft_launched, ...
    pub submission_state: Option<String>, // open, paused, disabled
}

/// Response of `GET /programs/{handle}`
#[derive(Debug, Default, Deserialize)]
pub struct ProgramDetail {
    #[serde(default)]
    pub relationships: Relationships,
}

#[derive(Debug, Default, Deserialize)]
pub struct Relationships {
    #[serde(default)]
    pub structured_scopes: StructuredScopes,
}

#[derive(Debug, Default, Deserialize)]
pub struct StructuredScopes {
    #[serde(default)]
    pub data: Vec<StructuredScope>,
}

#[derive(Debug, Deserialize)]
pub struct StructuredScope {
    #[serde(default)]
    pub attributes: StructuredScopeAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct StructuredScopeAttributes {
    pub asset_type: Option<String>,
    pub asset_identifier: Option<String>,
    pub instruction: Option<String>,
    pub eligible_for_submission: Option<bool>,
    pub eligible_for_bounty: Option<bool>,
}

/// Error envelope returned on authentication failures
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub status: Option<u16>,
}

impl ErrorEnvelope {
    /// Whether a response body signals an invalid credential
    pub fn signals_unauthorized(body: &str) -> bool {
        if body.contains(":401}") {
            return true;
        }

        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.errors.iter().any(|e| e.status == Some(401)))
            .unwrap_or(false)
    }
}
