use crate::lexer::{Lexer, Token};
use alloy_primitives::{
    U256,
    ruint::{BaseConvertError, ParseError as UintParseError},
};
use chumsky::{extra, input::IterInput, prelude::*};
use ctk_data::Opcode;
use std::ops::Range;

pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub span: Span,
    pub inner: T,
}

impl<T> Spanned<T> {
    pub fn new(inner: T, span: Span) -> Self {
        Self { inner, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<'src> {
    pub statements: Vec<Statement<'src>>,
}

/// `%target = opcode operand, operand, ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'src> {
    /// Variable name without the `%` sigil.
    pub target: Spanned<&'src str>,
    pub opcode: Spanned<Opcode>,
    /// In evaluator order, top of stack first.
    pub operands: Vec<Spanned<Operand<'src>>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'src> {
    /// Sign and magnitude as written; range checking happens when the script is folded.
    Literal { negative: bool, magnitude: U256 },
    Var(&'src str),
}

pub type ParseError<'src> = Rich<'src, Token, Span>;
type ParserExtra<'src> = extra::Err<ParseError<'src>>;

pub fn parse(source: &str) -> Result<Script<'_>, Vec<ParseError<'_>>> {
    let token_iter = Lexer::new(source);
    let eoi = source.len()..source.len();
    let input = IterInput::new(token_iter, eoi);

    parser(source).parse(input).into_result()
}

fn parser<'src>(
    source: &'src str,
) -> impl Parser<'src, IterInput<Lexer<'src>, Span>, Script<'src>, ParserExtra<'src>> + Clone {
    let variable = select! { Token::Variable => () }.map_with(|_, e| {
        let span: Span = e.span();
        let s: &str = &source[span.clone()];
        Spanned::new(s.strip_prefix('%').unwrap_or(s), span)
    });

    let opcode = select! { Token::Identifier => () }.try_map_with(|_, e| {
        let span: Span = e.span();
        match source[span.clone()].parse::<Opcode>() {
            Ok(op) => Ok(Spanned::new(op, span)),
            Err(err) => Err(Rich::custom(span, err.to_string())),
        }
    });

    let dec_literal_as_u256 = select! { Token::DecLiteral => () }.map_with(|_, e| {
        let s: &str = &source[e.span() as Span];
        s.parse::<U256>()
    });

    let hex_as_u256 = select! { Token::HexLiteral => () }.map_with(|_, e| {
        let s: &str = &source[e.span() as Span];
        let hex_str = &s[2..];
        U256::from_str_radix(hex_str, 16)
    });

    let u256_value = dec_literal_as_u256.or(hex_as_u256).try_map_with(|v, e| {
        let span: Span = e.span();
        let s = &source[span.clone()];
        v.map_err(|err| match err {
            UintParseError::BaseConvertError(BaseConvertError::Overflow) => {
                Rich::custom(span, format!("literal {s:?} doesn't fit into 256 bits"))
            }
            err => Rich::custom(span, format!("invalid literal {s:?}: {err}")),
        })
    });

    let literal = just(Token::Minus)
        .or_not()
        .then(u256_value)
        .map_with(|(minus, magnitude), e| {
            Spanned::new(Operand::Literal { negative: minus.is_some(), magnitude }, e.span())
        });

    let operand = choice((
        variable.clone().map(|v| Spanned::new(Operand::Var(v.inner), v.span)),
        literal,
    ));

    let statement = variable
        .then_ignore(just(Token::Equals))
        .then(opcode)
        .then(operand.separated_by(just(Token::Comma)).collect::<Vec<_>>())
        .map_with(|((target, opcode), operands), e| Statement {
            target,
            opcode,
            operands,
            span: e.span(),
        });

    let newlines = just(Token::Newline).ignored().repeated();

    newlines
        .clone()
        .ignore_then(
            statement
                .separated_by(newlines.clone().at_least(1))
                .collect::<Vec<_>>(),
        )
        .then_ignore(newlines)
        .then_ignore(end())
        .map(|statements| Script { statements })
}
