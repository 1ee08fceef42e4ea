use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const FIELD_PREFIX: &str = "field_";
pub const FUNCTION_PREFIX: &str = "func_";

/// Location of the mapping file ForgeGradle writes, relative to the project root.
pub const DEFAULT_MAPPING_PATH: &str = "build/createMcpToSrg/output.tsrg";

/// What was wrong with a single line of the mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineIssue {
    #[error("line is not valid UTF-8; mapping files must be UTF-8 text")]
    NotUtf8,
    #[error("expected strictly 2 tokens on a class line, found {0}")]
    ClassTokenCount(usize),
    #[error("expected first token \"{first}\" to be equal to second one \"{second}\"")]
    ClassNameMismatch { first: String, second: String },
    #[error("expected strictly 2 or 3 tokens on a member line, found {0}")]
    MemberTokenCount(usize),
    #[error("expected second token \"{0}\" to start with \"field_\"")]
    NotAField(String),
    #[error("expected third token \"{0}\" to start with \"func_\"")]
    NotAFunction(String),
    #[error("field \"{symbol}\" re-registered as \"{name}\", already mapped to \"{existing}\"")]
    FieldReregistered {
        symbol: String,
        name: String,
        existing: String,
    },
    #[error("function \"{symbol}\" re-registered as \"{name}\", already mapped to \"{existing}\"")]
    FunctionReregistered {
        symbol: String,
        name: String,
        existing: String,
    },
}

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "could not find this tsrg file: {}. Have you run any Gradle commands against the project?",
        .0.display()
    )]
    NotFound(PathBuf),
    #[error("found an issue on line {line}. Description: {issue}")]
    BadLine { line: usize, issue: LineIssue },
}

/// Field and function symbol tables read from one mapping file.
///
/// Built once by the loader and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mappings {
    fields: HashMap<String, String>,
    functions: HashMap<String, String>,
}

impl Mappings {
    /// Reads the mapping file at `path`.
    pub fn load(path: &Path) -> Result<Self, MappingError> {
        if !path.is_file() {
            let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            return Err(MappingError::NotFound(shown));
        }
        info!("Loading {}", path.display());
        let file = fs::File::open(path)?;
        let mappings = Self::from_reader(io::BufReader::new(file))?;
        info!(
            fields = mappings.field_count(),
            functions = mappings.function_count(),
            "Done loading mappings"
        );
        Ok(mappings)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MappingError> {
        let mut mappings = Self::default();
        // The header ("tsrg2 left right") is line 1 and carries nothing we need.
        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line.map_err(|err| match err.kind() {
                io::ErrorKind::InvalidData => MappingError::BadLine {
                    line: index + 1,
                    issue: LineIssue::NotUtf8,
                },
                _ => MappingError::Io(err),
            })?;
            mappings
                .register_line(&line)
                .map_err(|issue| MappingError::BadLine {
                    line: index + 1,
                    issue,
                })?;
        }
        Ok(mappings)
    }

    pub fn parse(text: &str) -> Result<Self, MappingError> {
        Self::from_reader(text.as_bytes())
    }

    fn register_line(&mut self, line: &str) -> Result<(), LineIssue> {
        let Some(member) = line.strip_prefix('\t') else {
            let parts = tokens(line);
            if parts.len() != 2 {
                return Err(LineIssue::ClassTokenCount(parts.len()));
            }
            if parts[0] != parts[1] {
                return Err(LineIssue::ClassNameMismatch {
                    first: parts[0].to_string(),
                    second: parts[1].to_string(),
                });
            }
            return Ok(());
        };

        match tokens(member).as_slice() {
            [name, symbol] => self.register_field(name, symbol),
            [name, _, symbol] => self.register_function(name, symbol),
            other => Err(LineIssue::MemberTokenCount(other.len())),
        }
    }

    fn register_field(&mut self, name: &str, symbol: &str) -> Result<(), LineIssue> {
        if !symbol.starts_with(FIELD_PREFIX) {
            if name == symbol {
                return Ok(());
            }
            return Err(LineIssue::NotAField(symbol.to_string()));
        }
        if let Some(existing) = self.fields.get(symbol) {
            return Err(LineIssue::FieldReregistered {
                symbol: symbol.to_string(),
                name: name.to_string(),
                existing: existing.clone(),
            });
        }
        self.fields.insert(symbol.to_string(), name.to_string());
        Ok(())
    }

    fn register_function(&mut self, name: &str, symbol: &str) -> Result<(), LineIssue> {
        if !symbol.starts_with(FUNCTION_PREFIX) {
            if name == symbol {
                return Ok(());
            }
            return Err(LineIssue::NotAFunction(symbol.to_string()));
        }
        match self.functions.get(symbol) {
            Some(existing) if existing == name => {
                debug!(symbol, name, "repeated function mapping");
                Ok(())
            }
            Some(existing) => Err(LineIssue::FunctionReregistered {
                symbol: symbol.to_string(),
                name: name.to_string(),
                existing: existing.clone(),
            }),
            None => {
                self.functions.insert(symbol.to_string(), name.to_string());
                Ok(())
            }
        }
    }

    pub fn field(&self, symbol: &str) -> Option<&str> {
        self.fields.get(symbol).map(String::as_str)
    }

    pub fn function(&self, symbol: &str) -> Option<&str> {
        self.functions.get(symbol).map(String::as_str)
    }

    /// Looks a token up in the field table first, then in the function table.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.field(token).or_else(|| self.function(token))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of distinct function symbols.
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn entry_count(&self) -> usize {
        self.field_count() + self.function_count()
    }
}

/// Splits on single spaces. Trailing empty tokens are dropped, inner ones are kept.
fn tokens(line: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = line.split(' ').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

pub fn mapping_path(project_dir: &Path, relative: &str) -> PathBuf {
    project_dir.join(relative)
}
