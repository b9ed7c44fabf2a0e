use clap::{Parser, Subcommand};
use lumen::{config, output, publish, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Static sites from markdown, rendered through typed HTML elements")]
#[command(long_about = "\
Static sites from markdown, rendered through typed HTML elements

Your filesystem is the data source. Markdown files become pages, directories
become URL segments, and numbered names are ordered into the navigation bar.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── index.md                     # Home page → /
  ├── 010-getting-started.md       # Page (numbered = shown in nav)
  ├── 020-Guides/
  │   ├── index.md                 # → /Guides/
  │   └── 010-layout.md            # → /Guides/layout/
  ├── 030-source.md                # Link page (URL-only .md → external nav link)
  └── notes.md                     # No number prefix = hidden from nav

Code blocks need at least one highlighter theme in [syntax_highlighting].

Run 'lumen gen-config' to generate a documented config.toml.

Set RUST_LOG (e.g. RUST_LOG=lumen=debug) for diagnostics.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and write the site
    Build,
    /// Validate config and content without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Scanning {}", cli.source.display());
            let site = config::load_config(&cli.source)?;
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Publishing → {}", cli.output.display());
            let published = publish::publish(&site, &manifest.pages, &cli.output)?;
            output::print_publish_output(&published);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
