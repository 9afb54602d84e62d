// src/output/mod.rs
//! Output handling for harvested scope
//!
//! Text output prints one line per scope element with user-selected fields;
//! JSON output prints one object per program.

use async_trait::async_trait;

use crate::error::{Result, ScopeError};
use crate::types::{ProgramData, ScopeElement};

pub mod json;
pub mod text;

/// Trait for output handlers that print harvested programs
#[async_trait]
pub trait OutputHandler: Send + Sync {
    /// Emit one program's scope
    async fn emit_program(&self, program: &ProgramData) -> anyhow::Result<()>;

    /// Flush any buffered output
    async fn flush(&self) -> anyhow::Result<()>;
}

/// A field selectable in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Target,
    Description,
    Category,
    ProgramUrl,
}

impl Field {
    fn from_flag(flag: char) -> Result<Self> {
        match flag {
            't' => Ok(Field::Target),
            'd' => Ok(Field::Description),
            'c' => Ok(Field::Category),
            'u' => Ok(Field::ProgramUrl),
            other => Err(ScopeError::InvalidOutputFlag(other)),
        }
    }

    fn value<'a>(&self, program: &'a ProgramData, element: &'a ScopeElement) -> &'a str {
        match self {
            Field::Target => element.target.as_str(),
            Field::Description => element.description.as_str(),
            Field::Category => element.category.as_str(),
            Field::ProgramUrl => program.url.as_str(),
        }
    }
}

/// Ordered list of fields parsed from a flag string such as `"tdu"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFlags {
    fields: Vec<Field>,
}

impl OutputFlags {
    pub fn parse(flags: &str) -> Result<Self> {
        let fields = flags
            .chars()
            .map(Field::from_flag)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the selected fields of one element, or `None` if all are empty
    pub fn render(
        &self,
        program: &ProgramData,
        element: &ScopeElement,
        delimiter: &str,
    ) -> Option<String> {
        let values: Vec<&str> = self
            .fields
            .iter()
            .map(|field| field.value(program, element))
            .collect();

        if values.iter().all(|v| v.is_empty()) {
            return None;
        }

        Some(values.join(delimiter))
    }
}

impl Default for OutputFlags {
    fn default() -> Self {
        Self {
            fields: vec![Field::Target],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> ProgramData {
        ProgramData {
            url: "https://hackerone.com/acme".to_string(),
            in_scope: vec![ScopeElement::new("*.acme.com", "Main  site")],
            out_of_scope: vec![],
        }
    }

    #[test]
    fn test_parse_flags() {
        let flags = OutputFlags::parse("tdu").unwrap();
        assert_eq!(
            flags.fields(),
            &[Field::Target, Field::Description, Field::ProgramUrl]
        );
    }

    #[test]
    fn test_parse_invalid_flag() {
        let err = OutputFlags::parse("tx").unwrap_err();
        assert!(matches!(err, ScopeError::InvalidOutputFlag('x')));
    }

    #[test]
    fn test_render_in_flag_order() {
        let program = program();
        let element = &program.in_scope[0];

        let flags = OutputFlags::parse("ut").unwrap();
        assert_eq!(
            flags.render(&program, element, " ").as_deref(),
            Some("https://hackerone.com/acme *.acme.com")
        );

        let flags = OutputFlags::parse("tdc").unwrap();
        assert_eq!(
            flags.render(&program, element, ",").as_deref(),
            Some("*.acme.com,Main  site,")
        );
    }

    #[test]
    fn test_render_skips_empty_lines() {
        let program = program();
        let element = ScopeElement::new("", "");
        let flags = OutputFlags::parse("dc").unwrap();
        assert_eq!(flags.render(&program, &element, " "), None);
    }

    #[test]
    fn test_default_flags() {
        assert_eq!(OutputFlags::default().fields(), &[Field::Target]);
    }
}
