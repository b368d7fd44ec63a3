//! cgvault CLI - Inspect and mutate the CG asset vault from a shell.

use cgvault::prelude::*;
use cgvault::store::VERSION_SUBDIRS;
use std::env;
use std::fs;
use std::path::PathBuf;

use std::sync::atomic::{AtomicU8, Ordering};

/// Verbosity level (thread-safe)
const LOG_QUIET: u8 = 0;
const LOG_INFO: u8 = 1;
const LOG_DEBUG: u8 = 2;

static LOG_LEVEL: AtomicU8 = AtomicU8::new(LOG_INFO);

#[inline]
fn log_level() -> u8 {
    LOG_LEVEL.load(Ordering::Relaxed)
}

#[inline]
fn set_log_level(level: u8) {
    LOG_LEVEL.store(level, Ordering::Relaxed);
}

macro_rules! info {
    ($($arg:tt)*) => {
        if log_level() >= LOG_INFO {
            println!("[INFO] {}", format!($($arg)*));
        }
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        if log_level() >= LOG_DEBUG {
            println!("[DEBUG] {}", format!($($arg)*));
        }
    };
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut settings = Settings::load();
    let mut root_override: Option<PathBuf> = None;

    // Parse global flags
    let mut filtered_args: Vec<&str> = Vec::new();
    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => set_log_level(LOG_DEBUG),
            "-q" | "--quiet" => set_log_level(LOG_QUIET),
            "--root" => match iter.next() {
                Some(path) => root_override = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --root requires a path");
                    std::process::exit(1);
                }
            },
            _ => filtered_args.push(arg),
        }
    }

    if log_level() >= LOG_DEBUG {
        init_tracing();
    }

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    let root = root_override.unwrap_or_else(|| settings.root.clone());
    debug!("vault root: {}", root.display());
    let vault = Vault::new(root)
        .with_scene_ext(settings.scene_ext.as_str())
        .with_notes_ext(settings.notes_ext.as_str());

    match filtered_args[0] {
        // Projects command - list show folders on the share
        "projects" | "p" => cmd_projects(&vault),

        // Assets command - list assets of one project
        "assets" | "a" => {
            if filtered_args.len() < 2 {
                eprintln!("Error: missing project argument");
                eprintln!("Usage: cgvault assets <project>");
                std::process::exit(1);
            }
            cmd_assets(&vault, filtered_args[1]);
        }

        // Jobs command - list jobs of one asset
        "jobs" | "j" => {
            if filtered_args.len() < 3 {
                eprintln!("Error: missing arguments");
                eprintln!("Usage: cgvault jobs <project> <asset>");
                std::process::exit(1);
            }
            cmd_jobs(&vault, filtered_args[1], filtered_args[2]);
        }

        // Versions command - list versions of one job
        "versions" | "V" => {
            if filtered_args.len() < 4 {
                eprintln!("Error: missing arguments");
                eprintln!("Usage: cgvault versions <project> <asset> <job>");
                std::process::exit(1);
            }
            cmd_versions(&vault, filtered_args[1], filtered_args[2], filtered_args[3]);
        }

        // New-job command - scaffold a job with its first version
        "new-job" | "nj" => {
            if filtered_args.len() < 4 {
                eprintln!("Error: missing arguments");
                eprintln!("Usage: cgvault new-job <project> <asset> <job>");
                std::process::exit(1);
            }
            cmd_new_job(&vault, filtered_args[1], filtered_args[2], filtered_args[3]);
        }

        // New-version command - scaffold the next sequential version
        "new-version" | "nv" => {
            if filtered_args.len() < 4 {
                eprintln!("Error: missing arguments");
                eprintln!("Usage: cgvault new-version <project> <asset> <job>");
                std::process::exit(1);
            }
            cmd_new_version(&vault, filtered_args[1], filtered_args[2], filtered_args[3]);
        }

        // Status command - per-folder file counts and built state
        "status" | "s" => {
            if filtered_args.len() < 4 {
                eprintln!("Error: missing arguments");
                eprintln!("Usage: cgvault status <project> <asset> <job> [version]");
                std::process::exit(1);
            }
            cmd_status(
                &vault,
                filtered_args[1],
                filtered_args[2],
                filtered_args[3],
                filtered_args.get(4).copied(),
            );
        }

        // Notes command - print a version's notes record
        "notes" | "n" => {
            if filtered_args.len() < 4 {
                eprintln!("Error: missing arguments");
                eprintln!("Usage: cgvault notes <project> <asset> <job> [version]");
                std::process::exit(1);
            }
            cmd_notes(
                &vault,
                filtered_args[1],
                filtered_args[2],
                filtered_args[3],
                filtered_args.get(4).copied(),
            );
        }

        // Artist command - show or persist the artist name
        "artist" => cmd_artist(&mut settings, filtered_args.get(1).copied()),

        // Help
        "help" | "h" | "-h" | "--help" => print_help(),

        _ => {
            eprintln!("Unknown command: {}", filtered_args[0]);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_env("CGVAULT_LOG").unwrap_or_else(|_| EnvFilter::new("cgvault=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn print_help() {
    println!(
        "cgvault {} - CG asset version vault (built {} {})",
        env!("CARGO_PKG_VERSION"),
        env!("CGVAULT_BUILD_DATE"),
        env!("CGVAULT_BUILD_TIME")
    );
    println!();
    println!("USAGE:");
    println!("    cgvault [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    p,  projects                              List projects on the share");
    println!("    a,  assets      <project>                 List a project's assets");
    println!("    j,  jobs        <project> <asset>         List an asset's jobs");
    println!("    V,  versions    <project> <asset> <job>   List versions, current marked");
    println!("    nj, new-job     <project> <asset> <job>   Create a job with its v001");
    println!("    nv, new-version <project> <asset> <job>   Create the next version");
    println!("    s,  status      <project> <asset> <job> [version]");
    println!("                                              Per-folder file counts");
    println!("    n,  notes       <project> <asset> <job> [version]");
    println!("                                              Print a version's notes record");
    println!("    artist [name]                             Show or persist the artist name");
    println!("    h,  help                                  Show this help");
    println!();
    println!("OPTIONS:");
    println!("    --root <path>    Override the configured share root");
    println!("    -v, --verbose    Show debug output");
    println!("    -q, --quiet      Suppress all output");
    println!();
    println!("EXAMPLES:");
    println!("    cgvault projects                          # What shows are on the share");
    println!("    cgvault jobs Gravity Station              # Jobs under one asset");
    println!("    cgvault new-job Gravity Station modeling  # Scaffold modeling/v001");
    println!("    cgvault status Gravity Station modeling   # Built state of the current version");
    println!("    cgvault --root /mnt/ripley projects       # Different mount point");
}

fn cmd_projects(vault: &Vault) {
    if !vault.root_reachable() {
        eprintln!(
            "Warning: vault root {} is unreachable",
            vault.layout().root().display()
        );
    }
    let projects = vault.projects();
    debug!("{} project(s)", projects.len());
    for project in &projects {
        println!("{project}");
    }
    if projects.is_empty() {
        info!("No projects found");
    }
}

fn cmd_assets(vault: &Vault, project: &str) {
    if !vault.has_asset_root(project) {
        eprintln!(
            "Warning: no asset root at {}",
            vault.layout().assets_dir(project).display()
        );
        return;
    }
    for asset in vault.assets(project) {
        println!("{asset}");
    }
}

fn cmd_jobs(vault: &Vault, project: &str, asset: &str) {
    for job in vault.jobs(project, asset) {
        println!("{job}");
    }
}

fn cmd_versions(vault: &Vault, project: &str, asset: &str, job: &str) {
    let versions = vault.versions(project, asset, job);
    if versions.is_empty() {
        info!("No versions under {project}/{asset}/{job}");
        return;
    }
    let current = vault.current_version(project, asset, job).map(|v| v.label());
    for label in &versions {
        let marker = if Some(label) == current.as_ref() { "*" } else { " " };
        let built = match Version::parse(label) {
            Ok(version) => {
                let target = VersionRef::new(project, asset, job, version);
                if vault.is_built(&target) {
                    "built"
                } else {
                    "not built"
                }
            }
            Err(_) => "not a version folder",
        };
        println!("{marker} {label}  {built}");
    }
}

fn cmd_new_job(vault: &Vault, project: &str, asset: &str, job: &str) {
    match vault.create_job(project, asset, job) {
        Ok(()) => println!("Created {project}/{asset}/{job}/v001"),
        Err(e) => {
            eprintln!("Failed to create job: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_new_version(vault: &Vault, project: &str, asset: &str, job: &str) {
    match vault.create_version(project, asset, job) {
        Ok(version) => println!("Created {project}/{asset}/{job}/{version}"),
        Err(e) => {
            eprintln!("Failed to create version: {e}");
            std::process::exit(1);
        }
    }
}

/// Resolve an optional version argument, defaulting to the current one.
fn resolve_version(vault: &Vault, project: &str, asset: &str, job: &str, arg: Option<&str>) -> Version {
    match arg {
        Some(label) => match Version::parse(label) {
            Ok(version) => version,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => match vault.current_version(project, asset, job) {
            Some(version) => version,
            None => {
                eprintln!("Error: no versions under {project}/{asset}/{job}");
                std::process::exit(1);
            }
        },
    }
}

fn cmd_status(vault: &Vault, project: &str, asset: &str, job: &str, version_arg: Option<&str>) {
    let version = resolve_version(vault, project, asset, job, version_arg);
    let target = VersionRef::new(project, asset, job, version);

    println!("{target}");
    for sub in VERSION_SUBDIRS {
        let dir = vault.version_subdir(&target, sub);
        let count = fs::read_dir(&dir).map(|entries| entries.count()).unwrap_or(0);
        println!("  {sub:<14} {count}");
    }
    println!(
        "Built: {}",
        if vault.is_built(&target) { "yes" } else { "no" }
    );
}

fn cmd_notes(vault: &Vault, project: &str, asset: &str, job: &str, version_arg: Option<&str>) {
    let version = resolve_version(vault, project, asset, job, version_arg);
    let target = VersionRef::new(project, asset, job, version);
    let notes_file = vault.notes_file(&target);

    match fs::read_to_string(&notes_file) {
        Ok(text) => print!("{text}"),
        Err(_) => {
            eprintln!("No notes record at {}", notes_file.display());
            std::process::exit(1);
        }
    }
}

fn cmd_artist(settings: &mut Settings, name: Option<&str>) {
    match name {
        Some(name) => {
            settings.artist = name.to_string();
            settings.save();
            println!("Artist set to '{name}'");
        }
        None => {
            if settings.artist.is_empty() {
                println!("(not set)");
            } else {
                println!("{}", settings.artist);
            }
        }
    }
}
