use clap::{Parser, Subcommand};
use simple_blog::{config, nav, output, scaffold};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(about = "Sidebar and tag-index generator for a static blog")]
#[command(long_about = "\
Sidebar and tag-index generator for a static blog

Your filesystem is the data source. Top-level directories become sidebar
groups, markdown files become links, and frontmatter tags become a
\"Tags\" group that mirrors the folder layout of tagged posts.

Content structure:

  content/
  ├── config.toml                  # Optional settings (see gen-config)
  ├── index.md                     # Loose root files are not listed
  ├── guide/                       # Group \"Guide\"
  │   ├── index.md                 # → /guide/ (always listed first)
  │   ├── 01-install.md            # → /guide/01-install, label \"Install\"
  │   └── advanced/                # Nested group \"Advanced\"
  │       └── tuning.md
  ├── 2025/
  │   └── may/
  │       └── hello-world.md       # created by `new-post \"Hello World!\"`
  └── .drafts/                     # Hidden: skipped entirely

Frontmatter:

  ---
  title: Hello World!              # Overrides the filename label
  tags: rust, tooling              # Or a YAML list
  ---

Set RUST_LOG=debug to see every skipped entry.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Config file (defaults to <source>/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the sidebar model as JSON
    Sidebar {
        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the sidebar as a tree without writing anything
    Check,
    /// Create a new post dated today
    NewPost {
        /// Post title, used verbatim in frontmatter and slugified for the file name
        title: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Sidebar { output } => {
            let site_config = load_site_config(cli)?;
            let navigation = nav::build_navigation_at(&cli.source, &site_config);
            let json = serde_json::to_string_pretty(&navigation)?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, json + "\n")?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Check => {
            let site_config = load_site_config(cli)?;
            println!("==> Checking {}", cli.source.display());
            let navigation = nav::build_navigation_at(&cli.source, &site_config);
            output::print_navigation(&navigation);
        }
        Command::NewPost { title } => {
            let site_config = load_site_config(cli)?;
            let today = chrono::Local::now().date_naive();
            let path = scaffold::create_post(&cli.source, title, today, &site_config.scaffold)?;
            println!("Created {}", path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so `sidebar` output on stdout stays valid JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_site_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    match &cli.config {
        Some(path) if !path.exists() => Err(config::ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("config file not found: {}", path.display()),
        ))),
        Some(path) => config::load_config_file(path),
        None => config::load_config(Path::new(&cli.source)),
    }
}
