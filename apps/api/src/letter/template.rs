//! Typed prompt templates.
//!
//! A template declares its variable names up front. Construction fails if the
//! declaration and the `{placeholder}`s in the text disagree; binding fails if a
//! declared variable is left unbound or an undeclared one is supplied. Both raise
//! `AppError::MalformedTemplate`.
//!
//! Rendering is a single pass over the template text, so a bound value that itself
//! contains `{something}` is inserted literally and never re-expanded.

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: &'static str,
    text: &'static str,
    variables: &'static [&'static str],
}

impl PromptTemplate {
    pub fn new(
        name: &'static str,
        text: &'static str,
        variables: &'static [&'static str],
    ) -> Result<Self, AppError> {
        let found: Vec<&str> = Segments::new(text)
            .filter_map(|s| match s {
                Segment::Placeholder(p) => Some(p),
                Segment::Literal(_) => None,
            })
            .collect();

        for declared in variables {
            if !found.contains(declared) {
                return Err(malformed(name, declared));
            }
        }
        for placeholder in &found {
            if !variables.contains(placeholder) {
                return Err(malformed(name, placeholder));
            }
        }

        Ok(Self {
            name,
            text,
            variables,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fills every placeholder from `bindings` and returns the finished prompt.
    pub fn bind(&self, bindings: &[(&str, &str)]) -> Result<String, AppError> {
        for declared in self.variables {
            if !bindings.iter().any(|(k, _)| k == declared) {
                return Err(malformed(self.name, declared));
            }
        }
        if let Some((extra, _)) = bindings
            .iter()
            .find(|(k, _)| !self.variables.iter().any(|v| v == k))
        {
            return Err(malformed(self.name, extra));
        }

        let mut out = String::with_capacity(self.text.len() + 256);
        for segment in Segments::new(self.text) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(key) => {
                    let value = bindings
                        .iter()
                        .find(|(k, _)| *k == key)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| malformed(self.name, key))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn malformed(template: &'static str, variable: &str) -> AppError {
    AppError::MalformedTemplate {
        template,
        variable: variable.to_string(),
    }
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Splits template text into literal runs and `{identifier}` placeholders.
/// Braces that do not enclose a lowercase identifier are kept as literal text.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some(inner) = self.rest.strip_prefix('{') {
            if let Some(end) = inner.find('}') {
                let key = &inner[..end];
                if is_identifier(key) {
                    self.rest = &inner[end + 1..];
                    return Some(Segment::Placeholder(key));
                }
            }
            // Not a placeholder: emit the brace on its own.
            let (brace, rest) = self.rest.split_at(1);
            self.rest = rest;
            return Some(Segment::Literal(brace));
        }

        let end = self.rest.find('{').unwrap_or(self.rest.len());
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Literal(literal))
    }
}

fn is_identifier(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> PromptTemplate {
        PromptTemplate::new("greeting", "Dear {name},\n{body}", &["name", "body"]).unwrap()
    }

    #[test]
    fn test_bind_fills_all_placeholders() {
        let out = greeting()
            .bind(&[("name", "Jane"), ("body", "Please pay.")])
            .unwrap();
        assert_eq!(out, "Dear Jane,\nPlease pay.");
    }

    #[test]
    fn test_bind_rejects_unbound_variable() {
        let err = greeting().bind(&[("name", "Jane")]).unwrap_err();
        match err {
            AppError::MalformedTemplate { template, variable } => {
                assert_eq!(template, "greeting");
                assert_eq!(variable, "body");
            }
            other => panic!("expected MalformedTemplate, got {other:?}"),
        }
    }

    #[test]
    fn test_bind_rejects_undeclared_variable() {
        let err = greeting()
            .bind(&[("name", "Jane"), ("body", "x"), ("extra", "y")])
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_new_rejects_declared_variable_missing_from_text() {
        let result = PromptTemplate::new("t", "Hello {name}", &["name", "date"]);
        assert!(matches!(result, Err(AppError::MalformedTemplate { .. })));
    }

    #[test]
    fn test_new_rejects_undeclared_placeholder() {
        let result = PromptTemplate::new("t", "Hello {name} on {date}", &["name"]);
        assert!(matches!(result, Err(AppError::MalformedTemplate { .. })));
    }

    #[test]
    fn test_bound_values_are_not_re_expanded() {
        let out = greeting()
            .bind(&[("name", "{body}"), ("body", "text")])
            .unwrap();
        assert_eq!(out, "Dear {body},\ntext");
    }

    #[test]
    fn test_non_identifier_braces_are_literal() {
        let t = PromptTemplate::new("t", "Use {} or {Not Var} for {x}", &["x"]).unwrap();
        assert_eq!(t.bind(&[("x", "1")]).unwrap(), "Use {} or {Not Var} for 1");
    }

    #[test]
    fn test_repeated_placeholder_filled_everywhere() {
        let t = PromptTemplate::new("t", "{a} and {a}", &["a"]).unwrap();
        assert_eq!(t.bind(&[("a", "z")]).unwrap(), "z and z");
    }
}
