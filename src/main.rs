use clap::Parser;
use shunter::evaluate;

/// shunter evaluates infix arithmetic expressions with `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate.
    #[arg(default_value = "3 + 2")]
    expression: String,
}

fn main() {
    let args = Args::parse();

    match evaluate(&args.expression) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
