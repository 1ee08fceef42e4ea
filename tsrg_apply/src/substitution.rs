use crate::mapping::{Mappings, FIELD_PREFIX, FUNCTION_PREFIX};
use std::collections::HashSet;
use tracing::warn;

/// A token that had no entry in either table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    /// 1-based line number in the source file.
    pub line: usize,
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOutcome {
    pub text: String,
    /// Number of replacement steps taken on this line.
    pub substitutions: usize,
    /// Unresolved tokens in the order they were encountered, repeats included.
    pub unresolved: Vec<String>,
    /// Set when the mappings kept rewriting the line without settling.
    pub cycle: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub lines: Vec<String>,
    pub substitutions: usize,
    pub unresolved: Vec<Unresolved>,
}

/// Rewrites `field_`/`func_` tokens with the readable names from a [`Mappings`].
pub struct Substitutor<'a> {
    mappings: &'a Mappings,
}

impl<'a> Substitutor<'a> {
    pub fn new(mappings: &'a Mappings) -> Self {
        Self { mappings }
    }

    /// Resolves every token on one line.
    ///
    /// Each successful replacement rewrites all occurrences of the token and
    /// restarts the scan at the beginning of the line, so an unresolved token
    /// that precedes it is reported again on the next pass.
    ///
    /// A token whose readable name contains the token itself is replaced once
    /// and stepped over afterwards. A line that returns to an earlier state, or
    /// needs more replacements than the tables could ever justify, is left as
    /// it stands with `cycle` set.
    pub fn substitute_line(&self, line: &str) -> LineOutcome {
        let mut outcome = LineOutcome {
            text: line.to_string(),
            ..LineOutcome::default()
        };
        let mut self_embedding: HashSet<String> = HashSet::new();
        let mut snapshots: HashSet<String> = HashSet::from([line.to_string()]);
        let step_limit = 2 * self.mappings.entry_count() + 1;
        let mut cursor = 0;

        while let Some(start) = next_prefix(&outcome.text, cursor) {
            let end = token_end(&outcome.text, start);
            let token = &outcome.text[start..end];

            if self_embedding.contains(token) {
                cursor = end;
                continue;
            }

            let Some(name) = self.mappings.resolve(token) else {
                outcome.unresolved.push(token.to_string());
                cursor = end;
                continue;
            };

            let token = token.to_string();
            let embeds_itself = name.contains(token.as_str());
            if embeds_itself {
                warn!(
                    token = %token,
                    name,
                    "Readable name contains its own symbol, replacing it only once"
                );
                self_embedding.insert(token.clone());
            }
            outcome.text = outcome.text.replace(&token, name);
            outcome.substitutions += 1;
            cursor = 0;

            let repeated = !snapshots.insert(outcome.text.clone());
            if (repeated && !embeds_itself) || outcome.substitutions > step_limit {
                warn!(
                    token = %token,
                    "Substitution cycle, leaving the rest of the line as is"
                );
                outcome.cycle = true;
                break;
            }
        }
        outcome
    }

    /// Runs [`Substitutor::substitute_line`] over a whole file and logs one
    /// warning per unresolved encounter.
    pub fn substitute_lines<I, S>(&self, lines: I) -> SubstitutionReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = SubstitutionReport::default();
        for (index, line) in lines.into_iter().enumerate() {
            let outcome = self.substitute_line(line.as_ref());
            for token in outcome.unresolved {
                warn!(line = index + 1, "Could not deobfuscate \"{}\". Skipping...", token);
                report.unresolved.push(Unresolved {
                    line: index + 1,
                    token,
                });
            }
            report.substitutions += outcome.substitutions;
            report.lines.push(outcome.text);
        }
        report
    }
}

/// Byte index of the left-most `field_` or `func_` at or after `from`.
fn next_prefix(line: &str, from: usize) -> Option<usize> {
    let rest = line.get(from..)?;
    let field = rest.find(FIELD_PREFIX);
    let function = rest.find(FUNCTION_PREFIX);
    let found = match (field, function) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => return None,
    };
    Some(from + found)
}

/// End of the `[A-Za-z0-9_]` run starting at `start`.
fn token_end(line: &str, start: usize) -> usize {
    line.as_bytes()[start..]
        .iter()
        .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
        .map_or(line.len(), |offset| start + offset)
}
