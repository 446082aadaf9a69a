//! Command-line interface for matdoc
//! This binary turns the documentation comments of MATLAB files into Markdown, and helps inspect
//! how a comment was parsed.
//!
//! Usage:
//!   matdoc render `<path>` [--config `<file>`] [--output `<file>`]   - Render the comment block as Markdown
//!   matdoc inspect `<path>` [--config `<file>`] [--format `<format>`] - Dump the parse (treeviz, json, yaml, terminals)
//!   matdoc autodoc `<path>` [--in-place]                            - Insert documentation skeletons

use clap::{Arg, ArgAction, Command};
use matdoc::matdoc::autodoc::insert_doc_skeletons;
use matdoc::matdoc::config::Loader;
use matdoc::matdoc::extraction::extract_comment_block;
use matdoc::matdoc::formats::{self, InspectFormat};
use matdoc::matdoc::{parse, process_source, MatdocConfig, MatdocError};

fn main() {
    env_logger::init();

    let matches = Command::new("matdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and inspecting MatDoc comments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render the documentation comment of a MATLAB file as Markdown")
                .arg(
                    Arg::new("path")
                        .help("Path to the MATLAB file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the default configuration"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the Markdown here instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show how the documentation comment is parsed")
                .arg(
                    Arg::new("path")
                        .help("Path to the MATLAB file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the default configuration"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (treeviz, json, yaml, terminals)")
                        .default_value("treeviz"),
                ),
        )
        .subcommand(
            Command::new("autodoc")
                .about("Insert documentation skeletons after undocumented functions")
                .arg(
                    Arg::new("path")
                        .help("Path to the MATLAB file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .help("Rewrite the file instead of printing the result")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(
            required(render_matches, "path"),
            render_matches.get_one::<String>("config").map(String::as_str),
            render_matches.get_one::<String>("output").map(String::as_str),
        ),
        Some(("inspect", inspect_matches)) => handle_inspect_command(
            required(inspect_matches, "path"),
            inspect_matches.get_one::<String>("config").map(String::as_str),
            required(inspect_matches, "format"),
        ),
        Some(("autodoc", autodoc_matches)) => handle_autodoc_command(
            required(autodoc_matches, "path"),
            autodoc_matches.get_flag("in-place"),
        ),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Arguments clap guarantees to be present (required or defaulted).
fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn read_source(path: &str) -> Result<String, MatdocError> {
    std::fs::read_to_string(path).map_err(|e| MatdocError::io(path, e))
}

fn load_config(path: Option<&str>) -> Result<MatdocConfig, MatdocError> {
    Ok(Loader::new().with_user_file(path).build()?)
}

/// Handle the render command
fn handle_render_command(
    path: &str,
    config: Option<&str>,
    output: Option<&str>,
) -> Result<(), MatdocError> {
    let source = read_source(path)?;
    let config = load_config(config)?;
    let markdown = process_source(&source, &config)?.join("\n");

    match output {
        Some(output) => std::fs::write(output, markdown).map_err(|e| MatdocError::io(output, e)),
        None => {
            println!("{}", markdown);
            Ok(())
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    config: Option<&str>,
    format: &str,
) -> Result<(), MatdocError> {
    let format: InspectFormat = format.parse()?;
    let source = read_source(path)?;
    let config = load_config(config)?;
    let block = extract_comment_block(&source, config.extraction.comment_leader);

    let output = match format {
        InspectFormat::Terminals => formats::to_terminals_str(&block.body),
        InspectFormat::Treeviz => formats::to_treeviz_str(&parse(&block.body)?),
        InspectFormat::Json => formats::to_json(&parse(&block.body)?)?,
        InspectFormat::Yaml => formats::to_yaml(&parse(&block.body)?)?,
    };

    print!("{}", output);
    Ok(())
}

/// Handle the autodoc command
fn handle_autodoc_command(path: &str, in_place: bool) -> Result<(), MatdocError> {
    let source = read_source(path)?;
    let documented = insert_doc_skeletons(&source);

    if in_place {
        std::fs::write(path, documented).map_err(|e| MatdocError::io(path, e))
    } else {
        print!("{}", documented);
        Ok(())
    }
}
