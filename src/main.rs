use std::{env, fs::File, io::BufReader, path::PathBuf, time::Instant};

use lexer::{
    display_error,
    lexer::{buffer::IoSource, lexer::Lexer},
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file = File::open(file_path).expect("Failed to read file!");
    let source = IoSource::new(BufReader::new(file));
    let mut lex = Lexer::from_source(source, Some(String::from(file_name)));

    let start = Instant::now();

    if let Err(error) = parse(&mut lex) {
        display_error(error, PathBuf::from(file_path));
        panic!()
    }

    println!("Tokenized in {:?}", start.elapsed());
}
