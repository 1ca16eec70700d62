use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("print", TokenKind::Print);
        map.insert("var", TokenKind::Var);
        map.insert("func", TokenKind::Func);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("void", TokenKind::Void);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Num,
    Id,

    Op,      // + - * /
    Relop,   // < > = != <= >=
    Typeof,  // ::
    Assign,  // <-
    Funcret, // ->

    Lparen,
    Rparen,
    Begin, // {
    End,   // }
    Semi,
    Comma,

    // Reserved
    Int,
    Print,
    Var,
    Func,
    If,
    Else,
    While,
    Void,
}

impl Display for TokenKind {
    // The stable names the downstream parser matches on.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Num => "NUM",
            TokenKind::Id => "ID",
            TokenKind::Op => "OP",
            TokenKind::Relop => "RELOP",
            TokenKind::Typeof => "TYPEOF",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Funcret => "FUNCRET",
            TokenKind::Lparen => "LPAREN",
            TokenKind::Rparen => "RPAREN",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Semi => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::Int => "INT",
            TokenKind::Print => "PRINT",
            TokenKind::Var => "VAR",
            TokenKind::Func => "FUNC",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Void => "VOID",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}, token-attr:\"{}\", {}:{}>",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}
