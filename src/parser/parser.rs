use crate::errors::errors::Error;
use crate::lexer::buffer::Source;
use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::TokenKind;

/// Pulls tokens until end of input, reporting each one to stdout. The
/// first lexical error aborts the loop and is returned unchanged for the
/// driver to render.
pub fn parse<S: Source>(lexer: &mut Lexer<S>) -> Result<(), Error> {
    loop {
        let token = lexer.next_token()?;

        if token.kind == TokenKind::Eof {
            println!("Success!");
            return Ok(());
        }

        println!("{}", token);
    }
}
