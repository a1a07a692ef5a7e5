//! Straight-line folding of parsed scripts.

use crate::parser::{Operand, ParseError, Script, Span, Statement, parse};
use ctk_fold::{FoldError, Word, eval, word};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("syntax error: {message}")]
    Syntax { message: String, span: Span },

    #[error("use of undefined variable `%{name}`")]
    UndefinedVariable { name: String, span: Span },

    #[error("variable `%{name}` is already assigned")]
    ReassignedVariable { name: String, span: Span, first: Span },

    #[error("{source}")]
    Fold {
        #[source]
        source: FoldError,
        span: Span,
    },
}

impl ScriptError {
    /// Byte range of the source text the error points at.
    pub fn span(&self) -> &Span {
        match self {
            ScriptError::Syntax { span, .. }
            | ScriptError::UndefinedVariable { span, .. }
            | ScriptError::ReassignedVariable { span, .. }
            | ScriptError::Fold { span, .. } => span,
        }
    }
}

impl From<ParseError<'_>> for ScriptError {
    fn from(err: ParseError<'_>) -> Self {
        ScriptError::Syntax { message: err.reason().to_string(), span: err.span().clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folded<'src> {
    pub name: &'src str,
    pub value: Word,
    pub span: Span,
}

/// Folds every statement in order. Stops at the first error.
pub fn fold_script<'src>(script: &Script<'src>) -> Result<Vec<Folded<'src>>, ScriptError> {
    let mut env: HashMap<&'src str, (Word, &Span)> =
        HashMap::with_capacity(script.statements.len());
    let mut folded = Vec::with_capacity(script.statements.len());

    for stmt in &script.statements {
        let value = fold_statement(stmt, &env)?;
        let name = stmt.target.inner;
        if let Some((_, first)) = env.get(name) {
            return Err(ScriptError::ReassignedVariable {
                name: name.to_owned(),
                span: stmt.target.span.clone(),
                first: (*first).clone(),
            });
        }
        env.insert(name, (value, &stmt.target.span));
        folded.push(Folded { name, value, span: stmt.span.clone() });
    }

    Ok(folded)
}

fn fold_statement(
    stmt: &Statement<'_>,
    env: &HashMap<&str, (Word, &Span)>,
) -> Result<Word, ScriptError> {
    let operands = stmt
        .operands
        .iter()
        .map(|operand| match operand.inner {
            Operand::Literal { negative, magnitude } => word::from_literal(negative, magnitude)
                .map_err(|source| ScriptError::Fold { source, span: operand.span.clone() }),
            Operand::Var(name) => env.get(name).map(|&(value, _)| value).ok_or_else(|| {
                ScriptError::UndefinedVariable { name: name.to_owned(), span: operand.span.clone() }
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let value = eval(stmt.opcode.inner, &operands)
        .map_err(|source| ScriptError::Fold { source, span: stmt.span.clone() })?;
    tracing::debug!(var = stmt.target.inner, opcode = %stmt.opcode.inner, %value, "folded statement");
    Ok(value)
}

/// Parses and folds `source`. Every syntax error is reported; folding stops at the first error.
pub fn fold_source(source: &str) -> Result<Vec<Folded<'_>>, Vec<ScriptError>> {
    let script = parse(source)
        .map_err(|errs| errs.into_iter().map(ScriptError::from).collect::<Vec<_>>())?;
    fold_script(&script).map_err(|err| vec![err])
}
