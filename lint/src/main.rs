use clap::Parser;
use color_print::{cformat, cprintln};
use std::io::Read;

use arch::limits::Limits;
use ic10lint::{error::Error, report, Validator};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
#[clap(group(clap::ArgGroup::new("input").required(true)))]
struct Args {
    /// Source file to validate
    #[clap(short, long, group = "input")]
    file: Option<String>,

    /// Read source from stdin
    #[clap(long, group = "input")]
    stdin: bool,

    /// Inline source string to validate
    #[clap(short, long, group = "input")]
    code: Option<String>,

    /// Report strict parser availability and exit
    #[clap(long, group = "input")]
    check: bool,

    /// Output format
    #[clap(long, value_enum, default_value = "pretty")]
    format: Format,

    /// Override the maximum line count
    #[clap(long)]
    max_lines: Option<usize>,

    /// Override the maximum line length
    #[clap(long)]
    max_line_length: Option<usize>,

    /// Override the maximum source size in bytes
    #[clap(long)]
    max_bytes: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    Pretty,
    Json,
}

fn main() {
    let args = Args::parse();

    let mut limits = Limits::default();
    if let Some(n) = args.max_lines {
        limits.max_lines = n;
    }
    if let Some(n) = args.max_line_length {
        limits.max_line_length = n;
    }
    if let Some(n) = args.max_bytes {
        limits.max_bytes = n;
    }
    let validator = Validator::with_limits(limits);

    if args.check {
        if validator.parser_available() {
            cprintln!("<green>strict parser available</>");
        } else {
            cprintln!("<yellow>strict parser not available</>");
            println!("Using line-oriented checks");
        }
        return;
    }

    let src = match read_source(&args) {
        Ok(src) => src,
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            std::process::exit(1);
        }
    };

    let result = validator.validate(&src);

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&result)
                .expect(&cformat!("<red,bold>Failed to serialize report</>"));
            println!("{}", json);
        }
        Format::Pretty => println!("{}", report::format_pretty(&result, validator.limits())),
    }

    std::process::exit(if result.passed { 0 } else { 1 });
}

fn read_source(args: &Args) -> Result<String, Error> {
    if let Some(path) = &args.file {
        if !std::path::Path::new(path).exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
        return std::fs::read_to_string(path).map_err(|e| Error::FileRead(path.clone(), e));
    }
    if args.stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(Error::StdinRead)?;
        return Ok(buf);
    }
    // The input group is required, so --code is what remains.
    Ok(args.code.clone().unwrap_or_default())
}
