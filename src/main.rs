use anyhow::Result;
use clap::Parser;
use dirdiff::areas::session::Session;
use dirdiff::artifacts::core::options::{DEFAULT_PATTERN, DiffOptions};
use dirdiff::artifacts::equality::CompareMode;
use dirdiff::artifacts::snapshot::name_filter::CaseFolding;
use dirdiff::errors::DiffError;
use dirdiff::logging;
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dirdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare the files of two directories",
    long_about = "Compares the regular files directly inside two directories and prints one line \
    per difference: `M` for modified, `D` for files only in the baseline and `A` for files only \
    in the candidate. Subdirectories are not descended into.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, value_name = "DIR", help = "The baseline directory followed by the candidate directory")]
    dirs: Vec<PathBuf>,
    #[arg(
        short = 'i',
        long = "include",
        value_name = "PATTERN",
        default_value = DEFAULT_PATTERN,
        help = "Only compare files matching this glob (case-insensitive unless --case-sensitive)"
    )]
    pattern: String,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = CompareMode::Bytes,
        help = "How files present in both directories are compared"
    )]
    mode: CompareMode,
    #[arg(long, help = "Match the pattern and pair file names case-sensitively")]
    case_sensitive: bool,
    #[arg(short, long, help = "Log every scanning and comparison decision to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            err.print()?;
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    logging::init(cli.verbose);

    let [baseline, candidate, ..] = cli.dirs.as_slice() else {
        return Err(DiffError::Usage {
            program: env!("CARGO_PKG_NAME").to_string(),
        }
        .into());
    };

    let case_folding = if cli.case_sensitive {
        CaseFolding::Sensitive
    } else {
        CaseFolding::Insensitive
    };
    let options = DiffOptions::new(cli.pattern, cli.mode, case_folding);

    let color = std::io::stdout().is_terminal();
    colored::control::set_override(color);

    Session::new(baseline, candidate, options, Box::new(std::io::stdout()))
        .with_color(color)
        .compare()?;

    Ok(())
}
