// src/output/text.rs
//! Delimited text output, one line per scope element

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;

use super::{OutputFlags, OutputHandler};
use crate::types::ProgramData;

/// Prefix for out-of-scope lines
pub const OOS_PREFIX: &str = "[OOS] ";

pub struct TextOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    flags: OutputFlags,
    delimiter: String,
    include_out_of_scope: bool,
    use_colors: bool,
}

impl TextOutput {
    /// Create a new TextOutput that writes to stdout
    pub fn new(flags: OutputFlags, delimiter: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            flags,
            delimiter: delimiter.into(),
            include_out_of_scope: false,
            use_colors: is_terminal::is_terminal(std::io::stdout()),
        }
    }

    /// Create a new TextOutput that writes to a file
    pub fn to_file(file: std::fs::File, flags: OutputFlags, delimiter: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(Box::new(file)),
            flags,
            delimiter: delimiter.into(),
            include_out_of_scope: false,
            use_colors: false, // No colors when writing to file
        }
    }

    /// Also print assets listed as out of scope
    pub fn with_out_of_scope(mut self, include: bool) -> Self {
        self.include_out_of_scope = include;
        self
    }
}

#[async_trait]
impl OutputHandler for TextOutput {
    async fn emit_program(&self, program: &ProgramData) -> anyhow::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("output writer poisoned"))?;

        for element in &program.in_scope {
            if let Some(line) = self.flags.render(program, element, &self.delimiter) {
                writeln!(writer, "{}", line)?;
            }
        }

        if self.include_out_of_scope {
            for element in &program.out_of_scope {
                if let Some(line) = self.flags.render(program, element, &self.delimiter) {
                    if self.use_colors {
                        writeln!(writer, "{}{}", OOS_PREFIX.red(), line.dimmed())?;
                    } else {
                        writeln!(writer, "{}{}", OOS_PREFIX, line)?;
                    }
                }
            }
        }

        Ok(())
    }

    async fn flush(&self) -> anyhow::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| anyhow::anyhow!("output writer poisoned"))?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::types::ScopeElement;

    fn program() -> ProgramData {
        ProgramData {
            url: "https://hackerone.com/acme".to_string(),
            in_scope: vec![
                ScopeElement::new("*.acme.com", "Main site"),
                ScopeElement::new("api.acme.com", ""),
            ],
            out_of_scope: vec![ScopeElement::new("blog.acme.com", "Hosted by a vendor")],
        }
    }

    async fn render(output: TextOutput, temp: &NamedTempFile) -> String {
        output.emit_program(&program()).await.unwrap();
        output.flush().await.unwrap();
        fs::read_to_string(temp.path()).unwrap()
    }

    #[tokio::test]
    async fn test_targets_only() {
        let temp = NamedTempFile::new().unwrap();
        let output = TextOutput::to_file(temp.reopen().unwrap(), OutputFlags::default(), " ");

        assert_eq!(render(output, &temp).await, "*.acme.com\napi.acme.com\n");
    }

    #[tokio::test]
    async fn test_custom_fields_and_delimiter() {
        let temp = NamedTempFile::new().unwrap();
        let flags = OutputFlags::parse("tu").unwrap();
        let output = TextOutput::to_file(temp.reopen().unwrap(), flags, ",");

        assert_eq!(
            render(output, &temp).await,
            "*.acme.com,https://hackerone.com/acme\napi.acme.com,https://hackerone.com/acme\n"
        );
    }

    #[tokio::test]
    async fn test_out_of_scope_lines() {
        let temp = NamedTempFile::new().unwrap();
        let output = TextOutput::to_file(temp.reopen().unwrap(), OutputFlags::default(), " ")
            .with_out_of_scope(true);

        let content = render(output, &temp).await;
        assert_eq!(content.lines().count(), 3);
        assert_eq!(content.lines().last(), Some("[OOS] blog.acme.com"));
    }

    #[tokio::test]
    async fn test_out_of_scope_hidden_by_default() {
        let temp = NamedTempFile::new().unwrap();
        let output = TextOutput::to_file(temp.reopen().unwrap(), OutputFlags::default(), " ");

        let content = render(output, &temp).await;
        assert!(!content.contains("blog.acme.com"));
    }
}
