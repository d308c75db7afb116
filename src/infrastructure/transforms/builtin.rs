//! Built-in collaborators
//!
//! Small, dependency-free transforms good enough for well-formed icon sets.
//! None of them parse their input; anything smarter is plugged in through
//! [`super::CommandTransform`].

use async_trait::async_trait;

use crate::domain::ports::{
    MarkupMinifier, MarkupOptimizer, MinifyOptions, StyleMinifier, TransformError,
};

/// Drops the XML prolog, DOCTYPE and comments, then trims
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSvgOptimizer;

impl MarkupOptimizer for BasicSvgOptimizer {
    fn optimize(&self, markup: &str) -> Result<String, TransformError> {
        let text = strip_delimited(markup, "<!--", "-->")?;
        let text = strip_delimited(&text, "<?", "?>")?;
        let text = strip_delimited(&text, "<!DOCTYPE", ">")?;
        Ok(text.trim().to_string())
    }
}

/// Removes every `open ... close` span
fn strip_delimited(text: &str, open: &str, close: &str) -> Result<String, TransformError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        let after = &rest[start + open.len()..];
        let end = after
            .find(close)
            .ok_or_else(|| TransformError::Failed(format!("unterminated `{}`", open)))?;
        rest = &after[end + close.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Comment and whitespace stripping stylesheet minifier
///
/// String literals are copied untouched. Whitespace around `{ } : ; ,` is
/// removed and the last `;` of a block is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCssMinifier;

const CSS_PUNCTUATION: [char; 5] = ['{', '}', ':', ';', ','];

impl StyleMinifier for BasicCssMinifier {
    fn minify(&self, stylesheet: &str) -> Result<String, TransformError> {
        let mut out = String::with_capacity(stylesheet.len());
        let mut chars = stylesheet.chars().peekable();
        let mut pending_space = false;

        while let Some(c) = chars.next() {
            match c {
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    let mut previous = '\0';
                    loop {
                        match chars.next() {
                            Some('/') if previous == '*' => break,
                            Some(next) => previous = next,
                            None => {
                                return Err(TransformError::Failed(
                                    "unterminated comment".to_string(),
                                ))
                            }
                        }
                    }
                    pending_space = true;
                }
                c if c.is_whitespace() => pending_space = true,
                c if CSS_PUNCTUATION.contains(&c) => {
                    pending_space = false;
                    if c == '}' && out.ends_with(';') {
                        out.pop();
                    }
                    out.push(c);
                }
                quote @ ('"' | '\'') => {
                    push_pending_space(&mut out, &mut pending_space);
                    out.push(quote);
                    loop {
                        match chars.next() {
                            Some('\\') => {
                                out.push('\\');
                                if let Some(escaped) = chars.next() {
                                    out.push(escaped);
                                }
                            }
                            Some(next) if next == quote => {
                                out.push(next);
                                break;
                            }
                            Some(next) => out.push(next),
                            None => {
                                return Err(TransformError::Failed(
                                    "unterminated string".to_string(),
                                ))
                            }
                        }
                    }
                }
                other => {
                    push_pending_space(&mut out, &mut pending_space);
                    out.push(other);
                }
            }
        }

        Ok(out)
    }
}

fn push_pending_space(out: &mut String, pending_space: &mut bool) {
    if std::mem::take(pending_space)
        && out
            .chars()
            .last()
            .is_some_and(|last| !CSS_PUNCTUATION.contains(&last))
    {
        out.push(' ');
    }
}

/// Collapses whitespace when asked to
///
/// Runs of whitespace become one space and whitespace between `>` and `<`
/// disappears. With `collapse_whitespace` off the input is returned as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceMinifier;

#[async_trait]
impl MarkupMinifier for WhitespaceMinifier {
    async fn minify(&self, markup: &str, options: MinifyOptions) -> Result<String, TransformError> {
        if !options.collapse_whitespace {
            return Ok(markup.to_string());
        }

        let mut out = String::with_capacity(markup.len());
        let mut pending_space = false;

        for c in markup.chars() {
            if c.is_whitespace() {
                pending_space = true;
                continue;
            }
            if pending_space && !out.is_empty() && !(out.ends_with('>') && c == '<') {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }

        Ok(out)
    }
}
