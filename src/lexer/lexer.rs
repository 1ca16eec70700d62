use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::buffer::{DoubleBuffer, Source, StrSource, EOF_CHAR};
use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

// Scanner modes. Each mode past Start is entered on the one character
// class that can begin the corresponding lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Ident,
    Int,
    Frac,
    Less,
    Greater,
    Minus,
    Slash,
    Comment,
    Colon,
    Bang,
}

pub struct Lexer<S: Source> {
    buffer: DoubleBuffer<S>,
    file: Rc<String>,
    line: u32,
    column: u32,
    accumulator: u32,
    lex_begin: u32,
}

impl Lexer<StrSource> {
    pub fn new(source: String, file: Option<String>) -> Lexer<StrSource> {
        Lexer::from_source(StrSource::new(source), file)
    }
}

impl<S: Source> Lexer<S> {
    pub fn from_source(source: S, file: Option<String>) -> Lexer<S> {
        Lexer::from_buffer(DoubleBuffer::new(source), file)
    }

    /// Same as `from_source` with an explicit buffer capacity. The token
    /// stream is identical for any capacity; small capacities exercise
    /// the reload path on nearly every character.
    pub fn with_capacity(source: S, capacity: usize, file: Option<String>) -> Lexer<S> {
        Lexer::from_buffer(DoubleBuffer::with_capacity(source, capacity), file)
    }

    fn from_buffer(buffer: DoubleBuffer<S>, file: Option<String>) -> Lexer<S> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            buffer,
            file: file_name,
            line: 1,
            column: 1,
            accumulator: 1,
            lex_begin: 1,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    // Swaps the reported column to the start of the finished lexeme and
    // advances the begin marker for the next one.
    fn finalize(&mut self) {
        self.column = self.lex_begin;
        self.lex_begin = self.accumulator;
    }

    fn finish_word(&mut self, lexeme: String) -> Token {
        self.finalize();
        let kind = RESERVED_LOOKUP
            .get(lexeme.as_str())
            .copied()
            .unwrap_or(TokenKind::Id);
        MK_TOKEN!(kind, lexeme, self.position())
    }

    fn finish_num(&mut self, lexeme: String) -> Token {
        self.finalize();
        MK_TOKEN!(TokenKind::Num, lexeme, self.position())
    }

    // Marks the current column as the start of a lexeme and consumes the
    // character that opened it.
    fn begin_lexeme(&mut self) {
        self.lex_begin = self.accumulator;
        self.accumulator += 1;
    }

    /// Scans and returns the next token. The `Eof`-kinded token signals
    /// end of input; a lexical error halts the scan.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let mut state = State::Start;
        let mut lexeme = String::new();

        loop {
            let c = self.buffer.next_char();
            self.column = self.accumulator;

            match state {
                State::Start => {
                    if c == EOF_CHAR {
                        return Ok(MK_TOKEN!(TokenKind::Eof, String::from("EOF"), self.position()));
                    } else if c.is_ascii_alphabetic() {
                        self.begin_lexeme();
                        lexeme.push(c);
                        state = State::Ident;
                    } else if c.is_ascii_digit() {
                        self.begin_lexeme();
                        lexeme.push(c);
                        state = State::Int;
                    } else if c == ' ' || c == '\t' || c == '\r' {
                        // a tab counts as a single column
                        self.accumulator += 1;
                    } else if c == '\n' {
                        self.line += 1;
                        self.accumulator = 1;
                        self.lex_begin = 1;
                    } else if c == '<' {
                        self.begin_lexeme();
                        lexeme.push(c);
                        state = State::Less;
                    } else if c == '>' {
                        self.begin_lexeme();
                        lexeme.push(c);
                        state = State::Greater;
                    } else if c == '-' {
                        self.begin_lexeme();
                        lexeme.push(c);
                        state = State::Minus;
                    } else if c == '/' {
                        self.begin_lexeme();
                        lexeme.push(c);
                        state = State::Slash;
                    } else if c == ':' {
                        self.begin_lexeme();
                        state = State::Colon;
                    } else if c == '!' {
                        self.begin_lexeme();
                        state = State::Bang;
                    } else if let Some(kind) = single_char_kind(c) {
                        self.accumulator += 1;
                        return Ok(MK_TOKEN!(kind, c.to_string(), self.position()));
                    } else {
                        return Err(Error::new(
                            ErrorImpl::UnrecognisedCharacter { character: c },
                            self.position(),
                        ));
                    }
                }

                State::Ident => {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        self.accumulator += 1;
                        lexeme.push(c);
                    } else {
                        self.buffer.retract();
                        return Ok(self.finish_word(lexeme));
                    }
                }

                State::Int => {
                    if c.is_ascii_digit() {
                        self.accumulator += 1;
                        lexeme.push(c);
                    } else if c == '.' {
                        self.accumulator += 1;
                        lexeme.push(c);
                        state = State::Frac;
                    } else {
                        self.buffer.retract();
                        return Ok(self.finish_num(lexeme));
                    }
                }

                State::Frac => {
                    if c.is_ascii_digit() {
                        self.accumulator += 1;
                        lexeme.push(c);
                    } else if c == '.' {
                        // A second separator directly after the first is
                        // malformed ("3.."); past at least one fractional
                        // digit the literal is cut before this dot and the
                        // dot is left for the next scan, so "123.456.789"
                        // scans as "123.456".
                        self.buffer.retract();
                        if lexeme.ends_with(|p: char| p.is_ascii_digit()) {
                            return Ok(self.finish_num(lexeme));
                        }
                        self.column = self.lex_begin;
                        return Err(Error::new(
                            ErrorImpl::MalformedNumber {
                                literal: format!("{}.", lexeme),
                            },
                            self.position(),
                        ));
                    } else {
                        self.buffer.retract();
                        return Ok(self.finish_num(lexeme));
                    }
                }

                State::Less => {
                    if c == '=' {
                        self.accumulator += 1;
                        lexeme.push(c);
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Relop, lexeme, self.position()));
                    } else if c == '-' {
                        self.accumulator += 1;
                        lexeme.push(c);
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Assign, lexeme, self.position()));
                    } else {
                        self.buffer.retract();
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Relop, lexeme, self.position()));
                    }
                }

                State::Greater => {
                    if c == '=' {
                        self.accumulator += 1;
                        lexeme.push(c);
                    } else {
                        self.buffer.retract();
                    }
                    self.finalize();
                    return Ok(MK_TOKEN!(TokenKind::Relop, lexeme, self.position()));
                }

                State::Minus => {
                    if c == '>' {
                        self.accumulator += 1;
                        lexeme.push(c);
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Funcret, lexeme, self.position()));
                    } else {
                        self.buffer.retract();
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Op, lexeme, self.position()));
                    }
                }

                State::Slash => {
                    if c == '/' {
                        self.accumulator += 1;
                        lexeme.clear();
                        state = State::Comment;
                    } else {
                        self.buffer.retract();
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Op, lexeme, self.position()));
                    }
                }

                State::Comment => {
                    if c == '\n' {
                        self.line += 1;
                        self.accumulator = 1;
                        self.lex_begin = 1;
                        state = State::Start;
                    } else if c == EOF_CHAR {
                        return Ok(MK_TOKEN!(TokenKind::Eof, String::from("EOF"), self.position()));
                    } else {
                        self.accumulator += 1;
                    }
                }

                State::Colon => {
                    if c == ':' {
                        self.accumulator += 1;
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Typeof, String::from("::"), self.position()));
                    } else {
                        self.buffer.retract();
                        self.column = self.lex_begin;
                        return Err(Error::new(
                            ErrorImpl::IncompleteOperator {
                                found: ':',
                                expected: ':',
                            },
                            self.position(),
                        ));
                    }
                }

                State::Bang => {
                    if c == '=' {
                        self.accumulator += 1;
                        self.finalize();
                        return Ok(MK_TOKEN!(TokenKind::Relop, String::from("!="), self.position()));
                    } else {
                        self.buffer.retract();
                        self.column = self.lex_begin;
                        return Err(Error::new(
                            ErrorImpl::IncompleteOperator {
                                found: '!',
                                expected: '=',
                            },
                            self.position(),
                        ));
                    }
                }
            }
        }
    }
}

// Tokens fully resolved by their first character, no lookahead needed.
fn single_char_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::Lparen),
        ')' => Some(TokenKind::Rparen),
        '{' => Some(TokenKind::Begin),
        '}' => Some(TokenKind::End),
        '=' => Some(TokenKind::Relop),
        '+' | '*' => Some(TokenKind::Op),
        ';' => Some(TokenKind::Semi),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
