// src/platforms/mod.rs
//! Bug bounty platform scope sources

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::output::OutputHandler;
use crate::types::{FetchOptions, ProgramData};

pub mod hackerone;

pub use hackerone::HackerOneAPI;

/// A platform that can enumerate programs and their scope
#[async_trait]
pub trait PlatformAPI: Send + Sync {
    /// Get the platform name (e.g., "HackerOne")
    fn name(&self) -> &str;

    /// Fetch every program matching `options`, in no particular order
    async fn fetch_programs(&self, options: &FetchOptions) -> Result<Vec<ProgramData>>;
}

/// Fetch all programs from `platform` and hand each one to `output`
///
/// Nothing is printed unless the whole collection succeeds. Programs are
/// printed sorted by URL so repeated runs diff cleanly.
pub async fn print_all_scope(
    platform: &dyn PlatformAPI,
    options: &FetchOptions,
    output: &dyn OutputHandler,
) -> anyhow::Result<()> {
    let mut programs = platform.fetch_programs(options).await?;
    programs.sort_by(|a, b| a.url.cmp(&b.url));

    info!("Printing scope for {} programs", programs.len());

    for program in &programs {
        output.emit_program(program).await?;
    }

    output.flush().await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ScopeError;
    use crate::types::{ScopeElement, VisibilityFilter};

    struct MockPlatform {
        fail: bool,
    }

    #[async_trait]
    impl PlatformAPI for MockPlatform {
        fn name(&self) -> &str {
            "Mock"
        }

        async fn fetch_programs(&self, _options: &FetchOptions) -> Result<Vec<ProgramData>> {
            if self.fail {
                return Err(ScopeError::Unauthorized);
            }

            Ok(vec![
                ProgramData {
                    url: "https://h1.test/b".to_string(),
                    in_scope: vec![ScopeElement::no_scope_table()],
                    out_of_scope: vec![],
                },
                ProgramData {
                    url: "https://h1.test/a".to_string(),
                    in_scope: vec![ScopeElement::new("a.com", "")],
                    out_of_scope: vec![],
                },
            ])
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl OutputHandler for RecordingOutput {
        async fn emit_program(&self, program: &ProgramData) -> anyhow::Result<()> {
            self.urls.lock().unwrap().push(program.url.clone());
            Ok(())
        }

        async fn flush(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn options() -> FetchOptions {
        FetchOptions::new("all", false, VisibilityFilter::default()).unwrap()
    }

    #[tokio::test]
    async fn test_print_all_scope() {
        let output = RecordingOutput::default();
        print_all_scope(&MockPlatform { fail: false }, &options(), &output)
            .await
            .unwrap();

        assert_eq!(
            *output.urls.lock().unwrap(),
            vec!["https://h1.test/a", "https://h1.test/b"]
        );
    }

    #[tokio::test]
    async fn test_print_all_scope_prints_nothing_on_failure() {
        let output = RecordingOutput::default();
        let result = print_all_scope(&MockPlatform { fail: true }, &options(), &output).await;

        assert!(result.is_err());
        assert!(output.urls.lock().unwrap().is_empty());
    }
}
