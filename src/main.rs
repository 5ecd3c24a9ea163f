use std::error::Error;
use std::fs::File;
use std::io::{self, Read};
use std::process::exit;

use clap::{crate_description, crate_version, App, Arg, SubCommand};
use colored::Colorize;

use textfold::convert::parse_integer;
use textfold::paragraph::{unwrap_paragraph, wrap_to_width, DEFAULT_BREAKABLE};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".bold().red(), e);
        exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new("textfold")
        .version(crate_version!())
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("wrap")
                .about("Folds text into a fixed-width paragraph")
                .arg(
                    Arg::with_name("width")
                        .short("w")
                        .long("width")
                        .takes_value(true)
                        .default_value("72")
                        .help("Maximum line width"),
                )
                .arg(Arg::with_name("FILE").required(false)),
        )
        .subcommand(
            SubCommand::with_name("merge")
                .about("Merges a wrapped paragraph back into a single line")
                .arg(Arg::with_name("FILE").required(false)),
        )
        .get_matches();

    if let Some(wrap) = matches.subcommand_matches("wrap") {
        let width = parse_integer::<usize>(wrap.value_of("width").unwrap_or("72"));
        let text = read_input(wrap.value_of("FILE"))?;
        print!("{}", wrap_to_width(&text, width, DEFAULT_BREAKABLE));
    } else if let Some(merge) = matches.subcommand_matches("merge") {
        let text = read_input(merge.value_of("FILE"))?;
        print!("{}", unwrap_paragraph(&text));
    }

    Ok(())
}

/// Reads the whole input, either from a file or from stdin.
fn read_input(path: Option<&str>) -> Result<String, Box<dyn Error>> {
    let mut content = String::new();
    match path {
        Some(path) => {
            File::open(path)?.read_to_string(&mut content)?;
        }
        None => {
            io::stdin().read_to_string(&mut content)?;
        }
    }
    Ok(content)
}
