//! pkgup CLI - print the closest package.json (or any file) above a directory.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pkgup::{
    find_up_any, find_up_any_sync, package_up, package_up_sync, EntryType, ErrorPolicy,
    FindUpOptions, PackageUpOptions, PACKAGE_JSON,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "package-up")]
#[command(version, about = "Find the closest package.json by walking up from a directory", long_about = None)]
struct Cli {
    /// Directory to start from (default: current directory)
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// File name to look for, checked in order at each level
    ///
    /// Can be specified multiple times.
    #[arg(short, long = "name", value_name = "NAME", default_value = PACKAGE_JSON)]
    names: Vec<String>,

    /// Kind of entry that counts as a match
    #[arg(long = "type", value_enum, default_value_t = TypeArg::File)]
    entry_type: TypeArg,

    /// Last directory to check (default: filesystem root)
    #[arg(long, value_name = "DIR")]
    stop_at: Option<PathBuf>,

    /// Fail on unreadable directories instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Use blocking I/O instead of the async runtime
    #[arg(long)]
    sync: bool,

    /// Print `{"path": ...}` instead of a bare path
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    File,
    Directory,
}

impl From<TypeArg> for EntryType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::File => EntryType::File,
            TypeArg::Directory => EntryType::Directory,
        }
    }
}

impl Cli {
    fn find_options(&self) -> FindUpOptions {
        FindUpOptions {
            cwd: self.cwd.clone(),
            entry_type: self.entry_type.into(),
            stop_at: self.stop_at.clone(),
            error_policy: if self.strict {
                ErrorPolicy::Strict
            } else {
                ErrorPolicy::Skip
            },
        }
    }

    /// True when nothing beyond `--cwd` deviates from a plain package lookup.
    fn is_package_lookup(&self) -> bool {
        self.names.len() == 1
            && self.names[0] == PACKAGE_JSON
            && self.find_options() == FindUpOptions::from(&self.package_options())
    }

    fn package_options(&self) -> PackageUpOptions {
        PackageUpOptions {
            cwd: self.cwd.clone(),
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    path: Option<&'a Path>,
}

fn search(cli: &Cli) -> Result<Option<PathBuf>> {
    let found = match (cli.is_package_lookup(), cli.sync) {
        (true, true) => package_up_sync(&cli.package_options())?,
        (false, true) => find_up_any_sync(&cli.names, &cli.find_options())?,
        (package_lookup, false) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(async {
                if package_lookup {
                    package_up(&cli.package_options()).await
                } else {
                    find_up_any(&cli.names, &cli.find_options()).await
                }
            })?
        }
    };
    Ok(found)
}

fn render(found: Option<&Path>, json: bool) -> Result<Option<String>> {
    if json {
        let output = serde_json::to_string(&Output { path: found })
            .context("Failed to serialize result")?;
        return Ok(Some(output));
    }
    Ok(found.map(|path| path.display().to_string()))
}

fn run(cli: &Cli) -> Result<bool> {
    debug!(names = ?cli.names, sync = cli.sync, "searching");
    let found = search(cli)
        .with_context(|| format!("Search for {} failed", cli.names.join(", ")))?;

    if let Some(line) = render(found.as_deref(), cli.json)? {
        println!("{}", line);
    }
    Ok(found.is_some())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}
