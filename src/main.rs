use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use refmark::urls::{normalize_base_url, project_url};
use refmark::{Annotator, Config, build_rules};

mod cli;
use cli::{Cli, Commands, TrackerArgs};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: Option<&PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, input_path: Option<&PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(input_path)?;
    let (cfg, cfg_path) = refmark::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

fn apply_overrides(mut cfg: Config, tracker: TrackerArgs) -> Config {
    if let Some(base_url) = tracker.base_url {
        cfg.base_url = base_url;
    }
    if let Some(version) = tracker.version_number {
        cfg.version_number = Some(version);
    }
    if let Some(keywords) = tracker.keywords {
        cfg.keywords = Some(keywords);
    }
    cfg
}

fn require_base_url(cfg: &Config) {
    if !cfg.has_base_url() {
        eprintln!("Error: no tracker base URL configured (use --base-url or base_url in refmark.toml)");
        std::process::exit(1);
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate {
            files,
            tracker,
            no_escape,
        } => {
            let cfg = load_config(cli.config.as_deref(), files.first())?;
            let mut cfg = apply_overrides(cfg, tracker);
            if no_escape {
                cfg.escape = false;
            }
            require_base_url(&cfg);

            let annotator = Annotator::new(&cfg)?;

            if files.is_empty() {
                let input = read_all(None)?;
                print!("{}", annotator.annotate(&input)?);
                return Ok(());
            }

            let inputs = files
                .iter()
                .map(|f| read_all(Some(f)))
                .collect::<io::Result<Vec<String>>>()?;
            let outputs = annotator.annotate_all(&inputs);

            let show_headers = files.len() > 1;
            for (file, output) in files.iter().zip(outputs) {
                let output = output?;
                if show_headers {
                    println!("==> {} <==", file.display());
                }
                print!("{output}");
                if show_headers && !output.ends_with('\n') {
                    println!();
                }
            }

            Ok(())
        }
        Commands::Rules {
            version_number,
            keywords,
        } => {
            let cfg = load_config(cli.config.as_deref(), None)?;
            let version_number = version_number.or(cfg.version_number);
            let keywords = keywords.or(cfg.keywords);

            let rules = build_rules(version_number.as_deref(), keywords.as_deref())?;
            for rule in &rules {
                println!("{}", rule.name());
                println!("  pattern: {}", rule.pattern());
                println!("  href:    {}", rule.href_template());
            }
            Ok(())
        }
        Commands::Scan { file, tracker } => {
            let cfg = load_config(cli.config.as_deref(), file.as_ref())?;
            let cfg = apply_overrides(cfg, tracker);
            require_base_url(&cfg);

            let input = read_all(file.as_ref())?;
            let annotator = Annotator::new(&cfg)?;
            let insertions = annotator.insertions(&input)?;
            println!("{:#?}", insertions);
            Ok(())
        }
        Commands::ProjectUrl { base_url, project } => {
            let cfg = load_config(cli.config.as_deref(), None)?;
            let base_url = base_url.unwrap_or(cfg.base_url);
            let Some(project) = project.or(cfg.project).filter(|p| !p.trim().is_empty()) else {
                eprintln!("Error: no tracker project configured (use --project or project in refmark.toml)");
                std::process::exit(1);
            };
            if base_url.trim().is_empty() {
                eprintln!("Error: no tracker base URL configured (use --base-url or base_url in refmark.toml)");
                std::process::exit(1);
            }

            println!("{}", project_url(&normalize_base_url(&base_url), &project));
            Ok(())
        }
    }
}
