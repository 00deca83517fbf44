//! lnf - Link Farm
//!
//! Mirror a source directory tree into a destination, replacing files
//! with links to the originals except for a configurable subset that is
//! physically copied.

use clap::Parser;
use linkfarm::{
    DryRunExecutor, Error as LinkfarmError, FsExecutor, MirrorConfig, MirrorStats, mirror_tree,
    prepare_destination, read_pattern_list,
};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// lnf - Mirror a directory tree with links
///
/// Recreates the structure of SOURCE under DESTINATION, turning every
/// regular file into a symbolic link (or hard link with -l) back to the
/// original. Files matching a copy pattern become independent copies;
/// entries matching an ignore pattern are left out entirely.
///
/// Patterns are regular expressions applied to the full source path,
/// anchored at the start of the path string.
#[derive(Parser, Debug)]
#[command(name = "lnf", version, about, long_about = None)]
struct Args {
    /// Source directory (must exist)
    source: PathBuf,

    /// Destination directory (created if absent)
    destination: PathBuf,

    /// Use hard links instead of symbolic links
    #[arg(short = 'l', long)]
    hard_links: bool,

    /// Copy files matching this pattern instead of linking them (repeatable)
    #[arg(short = 'c', long = "copy", value_name = "PATTERN")]
    copy: Vec<String>,

    /// File of copy patterns, one per line; '#' lines and blank lines are skipped
    #[arg(short = 'C', long = "copy-list-file", value_name = "PATH")]
    copy_list_file: Option<PathBuf>,

    /// Ignore files or directories matching this pattern (repeatable)
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// File of ignore patterns, same line format
    #[arg(short = 'I', long = "ignore-list-file", value_name = "PATH")]
    ignore_list_file: Option<PathBuf>,

    /// Print what would happen without changing the filesystem
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Suppress the summary line
    #[arg(short = 'q', long)]
    quiet: bool,
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0} is not a directory")]
    SourceNotDirectory(PathBuf),

    #[error(transparent)]
    Mirror(#[from] LinkfarmError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::SourceNotDirectory(_)
            | Self::Mirror(
                LinkfarmError::InvalidPattern { .. } | LinkfarmError::PatternList { .. },
            ) => 2,
            Self::Mirror(_) => 1,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("ERROR: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    if !args.source.is_dir() {
        return Err(CliError::SourceNotDirectory(args.source));
    }

    // Inline patterns first, list-file patterns after.
    let mut copy_patterns = args.copy;
    if let Some(path) = &args.copy_list_file {
        copy_patterns.extend(read_pattern_list(path)?);
    }
    let mut ignore_patterns = args.ignore;
    if let Some(path) = &args.ignore_list_file {
        ignore_patterns.extend(read_pattern_list(path)?);
    }

    // Both roots are canonicalized exactly once; the walker and the
    // pattern policy see stable absolute paths for the whole run.
    let source = fs::canonicalize(&args.source).map_err(LinkfarmError::from)?;
    prepare_destination(&args.destination)?;
    let destination = fs::canonicalize(&args.destination).map_err(LinkfarmError::from)?;

    let config = MirrorConfig {
        source,
        destination,
        hard_links: args.hard_links,
        dry_run: args.dry_run,
        copy_patterns,
        ignore_patterns,
    };
    let patterns = config.pattern_set()?;

    if config.dry_run {
        let mut executor =
            DryRunExecutor::new(config.hard_links).with_report(|line| println!("{line}"));
        mirror_tree(&config, &patterns, &mut executor)?;
    } else {
        let mut executor = FsExecutor::new(config.hard_links);
        let stats = mirror_tree(&config, &patterns, &mut executor)?;
        if !args.quiet {
            print_summary(&stats);
        }
    }

    Ok(())
}

fn print_summary(stats: &MirrorStats) {
    if stats.links_created == 0 && stats.files_copied == 0 && stats.dirs_created == 0 {
        println!("Nothing to mirror");
        return;
    }

    let mut parts = vec![];
    if stats.links_created > 0 {
        parts.push(format!("{} links", stats.links_created));
    }
    if stats.files_copied > 0 {
        parts.push(format!("{} copies", stats.files_copied));
    }
    if stats.dirs_created > 0 {
        parts.push(format!("{} dirs", stats.dirs_created));
    }

    let mut line = format!("Mirrored {}", parts.join(", "));
    if stats.entries_ignored > 0 {
        line.push_str(&format!(" ({} entries ignored)", stats.entries_ignored));
    }
    println!("{line}");
}
