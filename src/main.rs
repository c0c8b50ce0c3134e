mod debug_report;

use numparse::{NumberParser, Options, ParseMetrics, ParseStrategy, ParsedNumber, create_parser_from_pattern};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NUMPARSE_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_env(LOG_ENV)).with_writer(io::stderr).init();

    let (number, metrics) = match &config.pattern {
        Some(pattern) => match create_parser_from_pattern(pattern) {
            Ok(parser) => run_parser(&parser, &config.input, config.strategy),
            Err(err) => {
                eprintln!("error: invalid --pattern '{pattern}': {err}");
                std::process::exit(2);
            }
        },
        None => {
            let res = numparse::parse_verbose_with(&config.input, &Options { strategy: config.strategy });
            (res.output.number, res.metrics)
        }
    };

    debug_report::print_run(&config.input, &number, &metrics, config.color);
}

fn run_parser(parser: &NumberParser, input: &str, strategy: ParseStrategy) -> (ParsedNumber, ParseMetrics) {
    let mut number = ParsedNumber::new();
    let metrics = parser.parse_with_metrics(input, strategy, &mut number);
    (number, metrics)
}

struct CliConfig {
    input: String,
    strategy: ParseStrategy,
    pattern: Option<String>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut strategy = ParseStrategy::Greedy;
    let mut pattern: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("numparse {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--greedy" => strategy = ParseStrategy::Greedy,
            "--longest" => strategy = ParseStrategy::LongestMatch,
            "--pattern" | "-p" => {
                let value = args.next().ok_or_else(|| "error: --pattern expects a value".to_string())?;
                pattern = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--pattern=") => {
                pattern = Some(arg.trim_start_matches("--pattern=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, strategy, pattern, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "numparse {version}

Locale-aware numeric string parser CLI.

Usage:
  numparse [OPTIONS] [--] <input...>
  numparse [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  -p, --pattern <pattern>    Build the parser from a decimal pattern such as
                             '#,##0.00;(#,##0.00)' instead of the default en-US parser.
  --greedy                   Commit to the first matcher that consumes input (default).
  --longest                  Search all matcher/window combinations for the longest parse.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}=<filter>      tracing filter, e.g. 'numparse=trace'.

Exit codes:
  0  Success.
  2  Invalid arguments, pattern, or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_only_exit_codes_the_binary_uses() {
        let help = help_text();
        let codes: Vec<&str> = help
            .lines()
            .skip_while(|line| !line.starts_with("Exit codes:"))
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(codes, vec!["0", "2"]);
    }
}
