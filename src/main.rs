use std::{env, fs::read_to_string, process};

use lexcheck::errors::errors::AnalysisError;
use lexcheck::lexer::tokens::Token;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (strict, path) = match args.len() {
        2 => (false, &args[1]),
        3 if args[1] == "--strict" => (true, &args[2]),
        _ => {
            eprintln!("usage: lexcheck [--strict] <file>");
            process::exit(2);
        }
    };

    let contents = match read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(2);
        }
    };

    // A file's trailing newline would trip the missing-semicolon rule
    match run(contents.trim(), strict) {
        Ok(tokens) => print_tokens(&tokens),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}

fn run(text: &str, strict: bool) -> Result<Vec<Token>, AnalysisError> {
    lexcheck::validate(text)?;
    if strict {
        Ok(lexcheck::tokenize_strict(text)?)
    } else {
        Ok(lexcheck::tokenize(text))
    }
}

fn print_tokens(tokens: &[Token]) {
    println!("{:>4}  {:<12}  {}", "No", "Kind", "Lexeme");
    for (idx, token) in tokens.iter().enumerate() {
        println!(
            "{:>4}  {:<12}  {}",
            idx + 1,
            token.kind.to_string(),
            token.lexeme
        );
    }
}
