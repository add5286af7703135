//! `greet` - a small argmark CLI.
//!
//! ```text
//! $ greet formal --name Alice -a 30
//! Good day, Alice.
//! You are 30 years old.
//!
//! $ greet -- --help
//! ```

use anyhow::{Context, Result};
use argmark::Args;

#[derive(Args, Debug, Default)]
#[argmark(
    name = "greet",
    about = "Prints a greeting for the given person",
    version = "0.1.0",
    help
)]
struct Cli {
    #[arg(short = 'n', long = "name", desc = "User name")]
    name: String,

    #[arg(short, long, desc = "Age of the user")]
    age: Option<u32>,

    #[arg(short, long, desc = "Print the greeting in upper case")]
    loud: bool,

    #[arg(desc = "Greeting style: casual or formal")]
    style: Option<String>,
}

fn greeting(cli: &Cli) -> String {
    let who = if cli.name.is_empty() {
        "stranger"
    } else {
        cli.name.as_str()
    };
    let line = match cli.style.as_deref() {
        Some("formal") => format!("Good day, {}.", who),
        _ => format!("Hello, {}!", who),
    };
    if cli.loud {
        line.to_uppercase()
    } else {
        line
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::default();
    argmark::parse(&mut cli).context("failed to parse arguments")?;

    println!("{}", greeting(&cli));
    if let Some(age) = cli.age {
        println!("You are {} years old.", age);
    }
    Ok(())
}
