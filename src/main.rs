use clap::{Parser, Subcommand};
use gridpress::{config, manifest, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridpress")]
#[command(about = "Grid-blog fragment renderer")]
#[command(long_about = "\
Grid-blog fragment renderer

A JSON manifest of posts is the data source. Each post carries its raw
content plus everything its page needs — terms, comment summary, resolved
image URLs per named size — and renders to one extra-fields record: body
fragment, sidebar fragment, tag list, relative date, and class list.

Manifest structure:

  {
    \"now\": \"2024-05-01T12:00:00Z\",       # optional; pin for reproducible output
    \"posts\": [{
      \"id\": 1,
      \"title\": \"Hello\",
      \"content\": \"The **first** post.\",  # markdown, or HTML with render.markdown = false
      \"published\": \"2024-04-30T09:00:00Z\",
      \"permalink\": \"https://example.com/hello\",
      \"tags\": [{ \"id\": 3, \"name\": \"meta\", \"link\": \"...\" }],
      \"comments\": { \"approved\": 2, \"open\": true },
      \"images\": { \"medium_thumbnail\": { \"src\": \"...\", \"width\": 350, \"height\": 350 } }
    }]
  }

Run 'gridpress gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site config file (a missing file means stock defaults)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a manifest into extra-fields records
    Render {
        /// Manifest JSON file
        input: PathBuf,
        /// Write records here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Validate the config and a manifest without rendering
    Check {
        /// Manifest JSON file
        input: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the grid stylesheet for the configured column count
    Css,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            input,
            output: out_path,
            pretty,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let m = manifest::RenderManifest::load(&input)?;
            let warnings = m.lint();
            if !warnings.is_empty() {
                for line in output::format_lint_output(&warnings) {
                    eprintln!("{line}");
                }
            }
            let records = manifest::render_all(&m, &site_config);
            let json = if pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            match out_path {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    output::print_render_output(&m, &records, &site_config);
                }
                None => println!("{json}"),
            }
        }
        Command::Check { input } => {
            config::load_config(&cli.config)?;
            let m = manifest::RenderManifest::load(&input)?;
            output::print_lint_output(&m.lint());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Css => {
            let site_config = config::load_config(&cli.config)?;
            print!("{}", config::grid_css(&site_config.grid));
        }
    }

    Ok(())
}
