mod app;
mod clipboard;
mod config;
mod input;
mod palette;
mod storage;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use palette::{Palette, Temperature};
use storage::Storage;

#[derive(Debug, Parser)]
#[command(name = "swatch", version, about = "Terminal color palette manager")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print stored palettes to stdout (headless).
    List,
    /// Add a palette and exit (headless).
    Add {
        title: String,
        /// Exactly three #rrggbb colors.
        #[arg(num_args = 3, value_names = ["COLOR1", "COLOR2", "COLOR3"])]
        colors: Vec<String>,
        #[arg(long, value_enum, default_value_t = Temperature::Neutral)]
        temperature: Temperature,
    },
    /// Remove a palette by id (headless).
    Remove {
        id: String,
    },
    /// Dump stored palettes as JSON to stdout (headless).
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::List => {
            let store = open_store(&cfg)?;
            print_palettes(&store.get_all());
        }
        Command::Add {
            title,
            colors,
            temperature,
        } => {
            let store = open_store(&cfg)?;
            let colors: [String; 3] = colors
                .try_into()
                .map_err(|_| anyhow::anyhow!("expected exactly 3 colors"))?;
            for color in &colors {
                if !palette::is_valid_hex(color) {
                    anyhow::bail!("invalid color {color:?}, expected #rrggbb");
                }
            }
            let new = Palette::new(title, colors, temperature);
            let id = new.id.clone();
            store.add(new);
            println!("Added palette {id}");
        }
        Command::Remove { id } => {
            let store = open_store(&cfg)?;
            store.remove(&id);
            println!("Removed {id}");
        }
        Command::Json => {
            let store = open_store(&cfg)?;
            println!("{}", serde_json::to_string_pretty(&store.get_all())?);
        }
    }

    Ok(())
}

/// Open the palette store, seeding the examples on first run.
fn open_store(cfg: &config::Config) -> anyhow::Result<Storage> {
    let store = Storage::open(&cfg.paths.data_dir.join("palettes.sqlite3"))?;
    store.seed_if_empty();
    Ok(store)
}

fn print_palettes(palettes: &[Palette]) {
    for (i, p) in palettes.iter().enumerate() {
        println!(
            "{:02}. {}  [{}]  {}  (id={})",
            i + 1,
            p.title,
            p.colors.join(" "),
            p.temperature.label(),
            p.id
        );
    }
}
