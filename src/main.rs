//! Titlecase CLI - title case formatting for catalogue titles and author names.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use similar::TextDiff;
use titlecase::{AuthorName, Config, ConfigError, Formatter, Locale};

/// A locale-aware title case formatter for book titles and author names.
///
/// Input is read line by line; each non-empty line is one title, or one
/// author name with `--author`.
#[derive(Parser, Debug)]
#[command(name = "titlecase")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s) to format.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write formatted output back to the input file(s).
    #[arg(short, long, conflicts_with = "author")]
    write: bool,

    /// Check if files are already formatted (exit 1 if not).
    #[arg(short, long, conflicts_with = "author")]
    check: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Locale name or code, such as `english` or `fr`.
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Parse each line as an author name and print its fields.
    #[arg(short, long)]
    author: bool,

    /// Configuration file to use instead of searching for `.titlecase.toml`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log formatting decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// What to do with each line.
#[derive(Clone, Copy)]
struct Settings<'a> {
    formatter: Formatter<'a>,
    locale: Locale,
    author: bool,
}

/// One formatted input line.
struct Line {
    display: String,
    name: Option<AuthorName>,
}

impl Settings<'_> {
    fn format_line(&self, line: &str) -> Line {
        if line.trim().is_empty() {
            return Line {
                display: line.to_string(),
                name: None,
            };
        }
        if self.author {
            let (display, name) = self.formatter.author(line, self.locale);
            Line {
                display,
                name: Some(name),
            }
        } else {
            Line {
                display: self.formatter.title(line, self.locale),
                name: None,
            }
        }
    }

    fn format_lines(&self, input: &str) -> Vec<Line> {
        let lines: Vec<&str> = input.lines().collect();
        lines.par_iter().map(|line| self.format_line(line)).collect()
    }
}

/// Reassemble formatted lines, keeping the input's final newline.
fn join_lines(input: &str, lines: &[Line]) -> String {
    let mut output = lines
        .iter()
        .map(|line| line.display.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn print_lines(lines: &[Line]) {
    for line in lines {
        match &line.name {
            Some(name) => println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                line.display, name.title, name.first, name.middle, name.last, name.suffix
            ),
            None => println!("{}", line.display),
        }
    }
}

/// Print a unified diff of `input` against `output` and report whether
/// they differ.
fn report_changes(label: &str, input: &str, output: &str) -> bool {
    if input == output {
        return false;
    }
    let diff = TextDiff::from_lines(input, output);
    print!("{}", diff.unified_diff().header(label, label));
    true
}

/// Author mode prints names without their titles and suffixes, so its
/// output must never replace or be compared with the input.
fn check_mode(args: &Args, author: bool) -> Result<(), &'static str> {
    if author && (args.write || args.check) {
        return Err("--write and --check cannot be used in author mode");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        return Config::from_file(path);
    }
    let Ok(cwd) = std::env::current_dir() else {
        return Ok(Config::default());
    };
    Ok(match Config::discover(&cwd)? {
        Some((path, config)) => {
            log::debug!("using configuration from {}", path.display());
            config
        }
        None => Config::default(),
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let tables = config.tables();
    let settings = Settings {
        formatter: Formatter::new(&tables),
        locale: args.locale.unwrap_or(config.locale),
        author: args.author || config.author,
    };
    log::debug!("locale: {}, author mode: {}", settings.locale, settings.author);

    if let Err(message) = check_mode(&args, settings.author) {
        eprintln!("Error: {}", message);
        return ExitCode::FAILURE;
    }

    if args.stdin || args.files.is_empty() {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::FAILURE;
        }

        let lines = settings.format_lines(&input);
        if args.check {
            let output = join_lines(&input, &lines);
            if report_changes("<stdin>", &input, &output) {
                return ExitCode::FAILURE;
            }
        } else {
            print_lines(&lines);
        }
        return ExitCode::SUCCESS;
    }

    let mut all_formatted = true;

    for file in &args.files {
        let input = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", file.display(), e);
                return ExitCode::FAILURE;
            }
        };

        let lines = settings.format_lines(&input);
        if args.check {
            let output = join_lines(&input, &lines);
            if report_changes(&file.display().to_string(), &input, &output) {
                eprintln!("{}: not formatted", file.display());
                all_formatted = false;
            }
        } else if args.write {
            let output = join_lines(&input, &lines);
            if input != output
                && let Err(e) = fs::write(file, &output)
            {
                eprintln!("Error writing {}: {}", file.display(), e);
                return ExitCode::FAILURE;
            }
        } else {
            print_lines(&lines);
        }
    }

    if args.check && !all_formatted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_flag_conflicts_with_write_and_check() {
        assert!(Args::try_parse_from(["titlecase", "-a", "-w", "names.txt"]).is_err());
        assert!(Args::try_parse_from(["titlecase", "--author", "--check", "names.txt"]).is_err());
        assert!(Args::try_parse_from(["titlecase", "-a", "names.txt"]).is_ok());
    }

    #[test]
    fn test_author_mode_from_config_rejects_write() {
        let args = Args::try_parse_from(["titlecase", "-w", "names.txt"]).unwrap();
        assert!(check_mode(&args, true).is_err());
        assert!(check_mode(&args, false).is_ok());

        let args = Args::try_parse_from(["titlecase", "names.txt"]).unwrap();
        assert!(check_mode(&args, true).is_ok());
    }

    #[test]
    fn test_join_lines_keeps_final_newline() {
        let lines = vec![
            Line {
                display: "Henry VIII".to_string(),
                name: None,
            },
            Line {
                display: String::new(),
                name: None,
            },
        ];
        assert_eq!(join_lines("henry viii\n\n", &lines), "Henry VIII\n\n");
        assert_eq!(join_lines("henry viii\n", &lines[..1]), "Henry VIII\n");
    }
}
