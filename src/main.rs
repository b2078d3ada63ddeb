//! Path grammar CLI - inspect, join and normalize drive-letter and UNC paths.

use anyhow::{anyhow, bail, Context};
use path_grammar::transformers::transform_to_json;
use path_grammar::{
    install_grammar, load_grammar_config, BatchPathHandler, DirnameOptions, Operation,
    OutputFormat,
};
use std::env;

fn print_usage() {
    eprintln!("Usage: path-grammar <command> [options]");
    eprintln!("  drive <path>...                        - Print the drive specifier");
    eprintln!("  is-absolute <path>...                  - Print whether the path is absolute");
    eprintln!("  basename <path>...                     - Print the last component");
    eprintln!("  dirname [--no-drive] <path>...         - Print the parent directory");
    eprintln!("  join <path>...                         - Join all paths into one");
    eprintln!("  normalize <path>...                    - Collapse . and .. segments");
    eprintln!("  split <path>...                        - Print drive, absoluteness and components");
    eprintln!("  batch <operation> <file> [json|yaml] [--write]");
    eprintln!("                                         - Apply an operation to each line of a file;");
    eprintln!("                                           --write saves <stem>.report.<ext> beside it");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let cwd = env::current_dir().context("failed to read the current directory")?;
    let config = load_grammar_config(&cwd).await.unwrap_or_default();
    let grammar = install_grammar(&config);

    let command = &args[1];
    let paths = &args[2..];

    match command.as_str() {
        "drive" => {
            for path in paths {
                println!("{}", grammar.get_drive(path).unwrap_or(""));
            }
        }
        "is-absolute" => {
            for path in paths {
                println!("{}", grammar.is_absolute(path));
            }
        }
        "basename" => {
            for path in paths {
                println!("{}", grammar.basename(path));
            }
        }
        "dirname" => {
            let options = DirnameOptions {
                no_drive: paths.iter().any(|a| a == "--no-drive"),
            };
            for path in paths.iter().filter(|a| *a != "--no-drive") {
                println!("{}", grammar.dirname(path, options));
            }
        }
        "join" => {
            println!("{}", grammar.join(paths));
        }
        "normalize" => {
            for path in paths {
                let normalized = grammar
                    .normalize(path)
                    .with_context(|| format!("failed to normalize {}", path))?;
                println!("{}", normalized);
            }
        }
        "split" => {
            for path in paths {
                println!("{}", transform_to_json(&grammar.split(path)));
            }
        }
        "batch" => {
            let write = paths.iter().any(|a| a == "--write");
            let paths: Vec<&String> = paths.iter().filter(|a| *a != "--write").collect();
            let operation: Operation = paths
                .first()
                .context("batch needs an operation")?
                .parse()
                .map_err(|e: String| anyhow!(e))?;
            let file_path = paths.get(1).context("batch needs a path-list file")?;
            let format = match paths.get(2) {
                Some(name) => name.parse::<OutputFormat>().map_err(|e| anyhow!(e))?,
                None => config.format,
            };
            let handler = BatchPathHandler::new(*grammar);
            let result = if write {
                handler.write_report(file_path, operation, format).await
            } else {
                handler.process(file_path, operation, format).await
            };
            let output = result
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("failed to process {}", file_path))?;
            match output {
                Some(output) => println!("{}", output),
                None => bail!("{} is not a path-list file", file_path),
            }
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
        }
    }

    Ok(())
}
