use std::{env, path::PathBuf, process::ExitCode, rc::Rc, str::FromStr, time::Instant};

use krn::{
    ast::node::write_tree, errors::errors::Error, format_error, lexer::loader::load_tokens,
    parser::parser::parse,
};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_TOKENS: &str = "tokens.krn";
const DEFAULT_TREE: &str = "tree.krn";

fn main() -> ExitCode {
    initialize_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [tokens file] [tree file]", args[0]);
        return ExitCode::FAILURE;
    }

    let tokens_path = PathBuf::from(args.get(1).map_or(DEFAULT_TOKENS, String::as_str));
    let tree_path = PathBuf::from(args.get(2).map_or(DEFAULT_TREE, String::as_str));

    match run(tokens_path, tree_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", format_error(&error));
            ExitCode::FAILURE
        }
    }
}

fn run(tokens_path: PathBuf, tree_path: PathBuf) -> Result<(), Error> {
    let start = Instant::now();

    let tokens = load_tokens(&tokens_path)?;
    info!(count = tokens.len(), elapsed = ?start.elapsed(), "loaded tokens");

    let parse_start = Instant::now();
    let file_name = Rc::new(tokens_path.to_string_lossy().into_owned());
    let (_, tree) = parse(tokens, file_name);
    let tree = tree?;
    info!(nodes = tree.size(), elapsed = ?parse_start.elapsed(), "parsed");

    write_tree(&tree, &tree_path)?;
    info!(path = %tree_path.display(), elapsed = ?start.elapsed(), "wrote tree");

    Ok(())
}

fn initialize_logging() {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| String::from("info"));
    let filter = EnvFilter::from_str(&env_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .init();
}
