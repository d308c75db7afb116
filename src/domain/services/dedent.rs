//! Indentation normalizer for generated source
//!
//! Generated files are written as indented literals inside this crate's own
//! source. [`dedent`] strips the blank boundary lines and the common leading
//! space indentation, so the output does not depend on how deeply the
//! generator itself is nested.
//!
//! Normalization always runs on the fully joined text: a value containing
//! newlines contributes its own lines to the indentation analysis.

use std::collections::{HashMap, VecDeque};

use crate::domain::value_objects::Fingerprint;
use crate::error::{IconError, IconResult};

const INDENT: char = ' ';

/// `dedent(&format!(...))`
#[macro_export]
macro_rules! dedent {
    ($($arg:tt)*) => {
        $crate::domain::services::dedent::dedent(&format!($($arg)*))
    };
}

/// Strip blank leading/trailing lines and the common space indentation.
///
/// - Lines before the first and after the last non-whitespace line are dropped.
/// - The indentation is the minimum count of leading spaces over lines that
///   are not whitespace-only. Tabs are never indentation.
/// - Every retained line loses up to that many leading spaces.
///
/// Entirely blank input yields an empty string.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let is_blank = |line: &&str| line.trim().is_empty();

    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return String::new();
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    let retained = &lines[first..=last];

    let indentation = retained
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| leading_spaces(l))
        .min()
        .unwrap_or(0);

    retained
        .iter()
        .map(|line| &line[leading_spaces(line).min(indentation)..])
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == INDENT).count()
}

/// Literal fragments of a template, interleaved with values at render time
///
/// `fragments.len()` must be `values.len() + 1`: values are inserted between
/// consecutive fragments, verbatim and exactly once each.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    fragments: &'a [&'a str],
}

impl<'a> Template<'a> {
    pub const fn new(fragments: &'a [&'a str]) -> Self {
        Self { fragments }
    }

    /// Number of values this template takes
    pub fn arity(&self) -> usize {
        self.fragments.len().saturating_sub(1)
    }

    pub fn fragments(&self) -> &'a [&'a str] {
        self.fragments
    }

    /// Join fragments and values without normalizing
    pub fn join(&self, values: &[&str]) -> IconResult<String> {
        if values.len() != self.arity() || (self.fragments.is_empty() && !values.is_empty()) {
            return Err(IconError::TemplateArity {
                expected: self.arity(),
                actual: values.len(),
            });
        }

        let capacity = self.fragments.iter().map(|f| f.len()).sum::<usize>()
            + values.iter().map(|v| v.len()).sum::<usize>();
        let mut joined = String::with_capacity(capacity);

        for (i, fragment) in self.fragments.iter().enumerate() {
            joined.push_str(fragment);
            if let Some(value) = values.get(i) {
                joined.push_str(value);
            }
        }

        Ok(joined)
    }

    /// Join and normalize
    pub fn render(&self, values: &[&str]) -> IconResult<String> {
        self.join(values).map(|joined| dedent(&joined))
    }

    pub fn fingerprint(&self, values: &[&str]) -> Fingerprint {
        Fingerprint::of_template(self.fragments, values)
    }
}

/// Caller-owned memo of normalized templates
///
/// Keys are structural fingerprints of fragments and values. Once `capacity`
/// entries are stored the oldest entry is evicted first. A capacity of zero
/// disables storage.
///
/// Library API for callers that render the same template instances more than
/// once. A generate run renders every instance exactly once, so
/// `GenerateUseCase` does not keep a cache.
#[derive(Debug)]
pub struct DedentCache {
    capacity: usize,
    entries: HashMap<Fingerprint, String>,
    order: VecDeque<Fingerprint>,
    hits: u64,
    misses: u64,
}

impl DedentCache {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Render through the cache
    pub fn render(&mut self, template: &Template<'_>, values: &[&str]) -> IconResult<String> {
        let key = template.fingerprint(values);
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(hit.clone());
        }

        self.misses += 1;
        let rendered = template.render(values)?;

        if self.capacity > 0 {
            if self.entries.len() >= self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
            self.entries.insert(key, rendered.clone());
            self.order.push_back(key);
        }

        Ok(rendered)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl Default for DedentCache {
    fn default() -> Self {
        Self::new()
    }
}
