//! hop: jump across the filesystem by frecency.
//!
//! Prints the resolved target directory and exits with a distinguished
//! code so the shell wrapper (shell/hop.sh) knows to `cd` to it.

use clap::Parser;
use hop_core::paths;
use hop_core::prelude::*;
use std::process::ExitCode;

/// Exit status telling the shell wrapper to cd to the printed path.
/// Everything else, errors included, exits 0 so the wrapper never acts
/// on a path that was not meant as a target.
const EXIT_CODE_CD: u8 = 3;

const AFTER_HELP: &str = "\
Examples:
   hop -l                          # list all tracked paths and scores
   hop                             # cd to the home directory
   hop s                           # jump to the best match for 's'
   hop someDir                     # jump to the best match for 'someDir'
   hop some subDir                 # matched path must also contain 'some'
   hop /absolute/path/to/someDir   # absolute paths work too

When giving multiple patterns their order does not matter, except for the
last one: hop always picks a directory whose name matches the last pattern.";

#[derive(Parser)]
#[command(
    name = "hop",
    version,
    about = "Jump across the filesystem by frecency",
    after_help = AFTER_HELP
)]
struct Cli {
    /// List tracked paths along with their frecency scores
    #[arg(short, long)]
    list: bool,

    /// Add a directory to the tracked set (directories are also tracked
    /// automatically when jumped to)
    #[arg(short, long, value_name = "PATH", conflicts_with = "list")]
    add: Option<String>,

    /// Remove a directory from the tracked set
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["list", "add"])]
    remove: Option<String>,

    /// Pattern to match against tracked paths; a single `-` means the
    /// previous directory
    #[arg(value_name = "PATTERN")]
    pattern: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // Configuration/IO failure: the command did not complete and
            // the previously persisted state is untouched.
            eprintln!("hop: {err:#}");
            ExitCode::SUCCESS
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let data_file = DataFile::from_env()?;
    let mut store = data_file.load()?;
    let now = unix_now();
    store.normalize(now, paths::exists);

    // User-input failures abandon the command but the store is still
    // persisted below, pruning included.
    let code = match dispatch(&cli, &mut store, now) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("hop: {err:#}");
            ExitCode::SUCCESS
        }
    };

    data_file.save(&store)?;
    Ok(code)
}

fn dispatch(cli: &Cli, store: &mut Store, now: i64) -> Result<ExitCode> {
    if cli.list {
        print_listing(store, now);
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = &cli.add {
        let path = paths::absolutize(path)?;
        paths::ensure_directory(&path)?;
        store.record_visit(&path, now);
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = &cli.remove {
        store.remove(&paths::absolutize(path)?);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.pattern.is_empty() {
        // No target printed: the wrapper falls back to the home directory.
        return Ok(ExitCode::from(EXIT_CODE_CD));
    }

    if cli.pattern == ["-"] {
        // Never matched against the store; cd itself handles `-` as the
        // previous working directory.
        println!("-");
        return Ok(ExitCode::from(EXIT_CODE_CD));
    }

    let pattern = cli.pattern.join(" ");
    let target = best_match(&pattern, store, now)?;
    store.record_visit(&target, now);
    println!("{target}");
    Ok(ExitCode::from(EXIT_CODE_CD))
}

fn print_listing(store: &Store, now: i64) {
    println!("Score\t\tPath");
    for (score, path) in store.list(now) {
        if score < 10.0 {
            println!("{score:.1}\t\t{path}");
        } else {
            println!("{score:.0}\t\t{path}");
        }
    }
}
