use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `%name`
    Variable,
    /// Bare word, used for mnemonics.
    Identifier,
    DecLiteral,
    /// `0x`-prefixed, at least one digit.
    HexLiteral,
    Minus,
    Comma,
    Equals,
    Newline,
    /// Any character that does not start a token.
    Error,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Token::Variable => "variable",
            Token::Identifier => "identifier",
            Token::DecLiteral => "decimal literal",
            Token::HexLiteral => "hex literal",
            Token::Minus => "`-`",
            Token::Comma => "`,`",
            Token::Equals => "`=`",
            Token::Newline => "newline",
            Token::Error => "invalid character",
        };
        f.write_str(text)
    }
}

/// Splits a fold script into `(token, byte span)` pairs. Spaces, tabs, carriage returns and `//`
/// comments are skipped; newlines are significant.
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Advances past the longest prefix of the remaining input matching `pred`.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let len = self.rest().find(|c| !pred(c)).unwrap_or(self.rest().len());
        self.pos += len;
    }

    fn skip_trivia(&mut self) {
        loop {
            self.eat_while(|c| matches!(c, ' ' | '\t' | '\r'));
            if self.rest().starts_with("//") {
                self.eat_while(|c| c != '\n');
            } else {
                return;
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Iterator for Lexer<'_> {
    type Item = (Token, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_trivia();
        let start = self.pos;
        let c = self.rest().chars().next()?;

        let token = match c {
            '\n' => {
                self.pos += 1;
                Token::Newline
            }
            ',' => {
                self.pos += 1;
                Token::Comma
            }
            '=' => {
                self.pos += 1;
                Token::Equals
            }
            '-' => {
                self.pos += 1;
                Token::Minus
            }
            '%' => {
                self.pos += 1;
                let name_start = self.pos;
                self.eat_while(is_word_char);
                if self.pos == name_start { Token::Error } else { Token::Variable }
            }
            '0' if self.rest()[1..].starts_with(['x', 'X']) => {
                self.pos += 2;
                let digits_start = self.pos;
                self.eat_while(|c| c.is_ascii_hexdigit());
                let has_digits = self.pos > digits_start;
                // `0x12g` is one malformed token, not a literal followed by an identifier.
                let trailing = self.pos;
                self.eat_while(is_word_char);
                if has_digits && self.pos == trailing { Token::HexLiteral } else { Token::Error }
            }
            c if c.is_ascii_digit() => {
                self.eat_while(|c| c.is_ascii_digit());
                let trailing = self.pos;
                self.eat_while(is_word_char);
                if self.pos == trailing { Token::DecLiteral } else { Token::Error }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.eat_while(is_word_char);
                Token::Identifier
            }
            c => {
                self.pos += c.len_utf8();
                Token::Error
            }
        };

        Some((token, start..self.pos))
    }
}
