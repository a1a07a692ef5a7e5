use ctk_analyses::{AstMapReport, NodeIdIndex, validate_ast_map};
use ctk_data::{Ast, IndexVec, SourceId};
use ctk_parser::{ScriptError, fold_source, highlight_span};
use ctk_source_map::{
    ExpandedEntry, SourceMapArtifact, SourceMapError, compress_entries, expand_source_map,
};
use std::{
    fmt::Write,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", display_input(.path))]
    Read {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", display_input(.path))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    SourceMap(#[from] SourceMapError),

    /// Script diagnostics, already rendered with source excerpts.
    #[error("{0}")]
    Script(String),
}

fn display_input(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_owned(),
    }
}

/// `None` and `-` read stdin.
pub fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    let input = input.filter(|path| path.to_str() != Some("-"));
    match input {
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Read { path: None, source })?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path)
            .map_err(|source| CliError::Read { path: Some(path.to_owned()), source }),
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(
    text: &str,
    path: Option<&Path>,
) -> Result<T, CliError> {
    serde_json::from_str(text)
        .map_err(|source| CliError::Json { path: path.map(Path::to_owned), source })
}

/// One `%name = value` line per statement.
pub fn fold(source: &str, hex: bool) -> Result<String, CliError> {
    let folded =
        fold_source(source).map_err(|errs| CliError::Script(render_errors(source, &errs)))?;
    let mut out = String::new();
    for value in folded {
        if hex {
            writeln!(out, "%{} = 0x{:x}", value.name, value.value)
        } else {
            writeln!(out, "%{} = {}", value.name, value.value)
        }
        .expect("writing to a String cannot fail");
    }
    Ok(out)
}

fn render_errors(source: &str, errs: &[ScriptError]) -> String {
    let mut out = String::new();
    for (i, err) in errs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "{err}").expect("writing to a String cannot fail");
        highlight_span(&mut out, source, err.span().clone(), 1)
            .expect("writing to a String cannot fail");
    }
    out.trim_end().to_owned()
}

/// JSON array of `[start, length, depth, jump]` rows.
pub fn expand(compressed: &str) -> Result<String, CliError> {
    let entries = expand_source_map(compressed.trim())?;
    Ok(serde_json::to_string(&entries).expect("entries always serialize"))
}

pub fn compress(rows_json: &str, path: Option<&Path>) -> Result<String, CliError> {
    let entries: Vec<ExpandedEntry> = parse_json(rows_json, path)?;
    Ok(compress_entries(&entries))
}

/// Validates the `pc_ast_map` of an artifact. The i-th AST belongs to source id `i`.
pub fn check_ast(artifact_path: &Path, ast_paths: &[PathBuf]) -> Result<AstMapReport, CliError> {
    let text = read_input(Some(artifact_path))?;
    let artifact: SourceMapArtifact = parse_json(&text, Some(artifact_path))?;

    let asts = ast_paths
        .iter()
        .map(|path| {
            let text = read_input(Some(path))?;
            let json: serde_json::Value = parse_json(&text, Some(path))?;
            Ok(Ast::from_json(&json))
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    Ok(check_artifact(&artifact, &asts))
}

pub fn check_artifact(artifact: &SourceMapArtifact, asts: &[Ast]) -> AstMapReport {
    let indices: IndexVec<SourceId, _> = asts.iter().map(NodeIdIndex::build).collect();
    validate_ast_map(&artifact.pc_ast_map, &indices)
}
