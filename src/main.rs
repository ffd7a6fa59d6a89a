mod report;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordgrid::{Error, GridSize, LexiconKind, Options, solve};

const LOG_ENV: &str = "WORDGRID_LOG";

fn main() {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Ok(Command::Version) => {
            println!("wordgrid {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("{}", err.message);
            println!("{}", usage_line(err.size));
            std::process::exit(2);
        }
    };

    std::process::exit(run(&config));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

/// Search and print; returns the process exit code.
fn run(config: &CliConfig) -> i32 {
    let mut out = io::stdout().lock();
    let mut write_err: Option<io::Error> = None;
    let mut print_word = |word: &[u8]| {
        if write_err.is_none() {
            if let Err(err) = out.write_all(word).and_then(|_| out.write_all(b"\n")) {
                write_err = Some(err);
            }
        }
    };

    let result = solve(&config.word_list, &config.grid, &config.options, &mut print_word);
    if let Some(err) = write_err {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return 0;
        }
        eprintln!("error: failed to write output: {err}");
        return 1;
    }

    match result {
        Ok(details) => {
            if let Err(err) = writeln!(out, "{} words found", details.search.emitted) {
                if err.kind() != io::ErrorKind::BrokenPipe {
                    eprintln!("error: failed to write output: {err}");
                    return 1;
                }
                return 0;
            }
            drop(out);
            if config.verbose {
                report::print_run(&details, config.color);
            }
            0
        }
        Err(err @ (Error::MalformedGrid { .. } | Error::InvalidSize(_))) => {
            eprintln!("error: {err}");
            drop(out);
            println!("{}", usage_line(config.options.size));
            2
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

#[derive(Debug)]
struct CliConfig {
    word_list: PathBuf,
    grid: String,
    options: Options,
    verbose: bool,
    color: bool,
}

#[derive(Debug)]
enum Command {
    Run(CliConfig),
    Help,
    Version,
}

/// Argument error, carrying the grid size so the usage line can name the
/// expected grid length.
#[derive(Debug)]
struct ArgError {
    message: String,
    size: GridSize,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, ArgError> {
    let mut size = GridSize::default();
    let mut lexicon = LexiconKind::default();
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut positional: Vec<String> = Vec::new();
    let mut args = args.into_iter();

    let fail = |message: String, size: GridSize| ArgError { message, size };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-v" | "--verbose" => verbose = true,
            "--flat" => lexicon = LexiconKind::Flat,
            "--color" => color = true,
            "--no-color" => color = false,
            "--size" | "-s" => {
                let value = args.next().ok_or_else(|| fail("error: --size expects a value".to_string(), size))?;
                size = GridSize::parse(&value).map_err(|err| fail(format!("error: {err}"), size))?;
            }
            "--" => {
                positional.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--size=") => {
                let value = arg.trim_start_matches("--size=");
                size = GridSize::parse(value).map_err(|err| fail(format!("error: {err}"), size))?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(fail(format!("error: unknown option '{arg}'"), size));
            }
            _ => positional.push(arg),
        }
    }

    let [word_list, grid]: [String; 2] = positional.try_into().map_err(|got: Vec<String>| {
        fail(format!("error: expected 2 arguments (word list and grid), got {}", got.len()), size)
    })?;

    if grid.len() != size.cells() {
        return Err(fail(
            format!("error: grid must be {} characters long for {size}, got {}", size.cells(), grid.len()),
            size,
        ));
    }

    Ok(Command::Run(CliConfig {
        word_list: PathBuf::from(word_list),
        grid,
        options: Options { size, lexicon },
        verbose,
        color,
    }))
}

fn usage_line(size: GridSize) -> String {
    format!("Usage: wordgrid [OPTIONS] <word-list-file> <grid-as-{}-chars-string>", size.cells())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "wordgrid {version}

Find every word from a word list that can be spelled by a path of adjacent
grid cells (eight directions, each cell used at most once per word).

{usage}

Arguments:
  <word-list-file>           Word list, one word per line.
  <grid>                     The grid as one string, row by row
                             (exactly rows*cols characters).

Options:
  -s, --size <RxC>           Grid dimensions. Default: {default_size}
  --flat                     Use a flat word set instead of the prefix trie.
                             No pruning: only practical for tiny grids.
  -v, --verbose              Print a run report after the word list.
  --color                    Force ANSI color in the report.
  --no-color                 Disable ANSI color in the report.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}=<filter>        Log filter for diagnostics on stderr
                             (e.g. debug, trace). Default: warn
  WORDGRID_DEBUG=1           Keep sample words per origin for --verbose.

Exit codes:
  0  Success (including when no words are found).
  1  Word list missing or unreadable.
  2  Invalid arguments or malformed grid.
",
        version = env!("CARGO_PKG_VERSION"),
        usage = usage_line(GridSize::default()),
        default_size = GridSize::default(),
        log_env = LOG_ENV,
    )
}
