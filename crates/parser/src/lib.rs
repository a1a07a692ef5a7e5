//! Text format for literal fold scripts.
//!
//! ```text
//! // comment
//! %a = add 1, 2
//! %b = sdiv -7, %a
//! ```
//!
//! Each statement binds `%name` to an opcode applied to comma separated operands, top of stack
//! first. [`fold_source`] parses a script and evaluates it top to bottom.

mod fold;
mod lexer;
pub mod parser;

use smallvec::SmallVec;
use std::fmt;

pub use fold::{Folded, ScriptError, fold_script, fold_source};
pub use lexer::Token;
pub use parser::{Operand, Script, Span, Spanned, Statement, parse};

/// Writes the line containing `span.start` with `line_range` lines of context on either side and a
/// row of carets under the highlighted part. Spans crossing a line break are cut at the line end.
pub fn highlight_span(
    out: &mut impl fmt::Write,
    source: &str,
    span: Span,
    line_range: usize,
) -> fmt::Result {
    let mut line_starts: SmallVec<[usize; 64]> = SmallVec::new();
    line_starts.push(0);
    line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));

    let offset = span.start.min(source.len());
    let line = line_starts.partition_point(|&start| start <= offset) - 1;
    // A trailing newline does not open another displayable line.
    let mut last_line = line_starts.len() - 1;
    if source.ends_with('\n') && last_line > line {
        last_line -= 1;
    }

    let show_start = line.saturating_sub(line_range);
    let show_end = (line + line_range).min(last_line);
    let dig_width = (show_end + 1).ilog10() as usize + 1;

    for i in show_start..=show_end {
        let line_start = line_starts[i];
        let line_end = line_starts.get(i + 1).map_or(source.len(), |&next| next - 1);
        writeln!(out, "{:>dig_width$} | {}", i + 1, &source[line_start..line_end])?;
        if i == line {
            let start = offset.clamp(line_start, line_end);
            let end = span.end.clamp(start, line_end).max(start + 1);
            let pad = dig_width + 3 + (start - line_start);
            writeln!(out, "{:pad$}{}", "", "^".repeat(end - start))?;
        }
    }
    Ok(())
}
