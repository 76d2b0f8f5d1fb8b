//! Sentiment Dashboard CLI
//!
//! Terminal front-end for the sentiment backend:
//! - Render the whole dashboard or a single table/chart
//! - Browse a ranking page by page
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use sentiment_dashboard::config::{generate_default_config, Config};
use sentiment_dashboard::view::{
    render_bar, render_dashboard, render_pie, render_table, TextRenderer,
};
use sentiment_dashboard::{
    logging, BarChart, Dashboard, HttpClient, PaginatedTable, PieChart, TableKind,
};

#[derive(Parser)]
#[command(name = "sentiment-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Attendant and client sentiment dashboard")]
#[command(long_about = "Fetches sentiment rankings and aggregates from the sentiment backend\nand renders them as paginated tables and charts in the terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./sentiment-dashboard.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides config and SENTIMENT_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Disable coloured scores
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render tables and charts
    Dashboard,

    /// Render the first page of the attendants ranking
    Attendants,

    /// Render the first page of the clients ranking
    Clients,

    /// Render the sentiment distribution chart
    Performance,

    /// Render the monthly evolution chart
    Evolution,

    /// Page through a ranking interactively (n, p, r, q)
    Browse {
        #[arg(value_enum)]
        table: TableArg,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableArg {
    Attendants,
    Clients,
}

impl From<TableArg> for TableKind {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Attendants => TableKind::Attendants,
            TableArg::Clients => TableKind::Clients,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_ref());
    }

    let (mut config, skipped) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Vec::new()),
        None => Config::discover(),
    };
    if let Some(url) = cli.api_url {
        config.backend.base_url = url;
    }

    logging::init(&config.logging);
    for error in &skipped {
        tracing::warn!("Skipping config file: {}", error);
    }
    tracing::debug!("Using backend at {}", config.backend.base_url);

    let client = HttpClient::new(&config.backend).context("Failed to build HTTP client")?;
    let renderer = TextRenderer::new(!cli.no_color && std::io::stdout().is_terminal());

    let output = match cli.command {
        Commands::Dashboard => {
            let mut dashboard = Dashboard::new(&config.tables);
            dashboard.mount(&client).await;
            if dashboard.loaded_count() == 0 {
                anyhow::bail!("No data received from {}", client.base_url());
            }
            render_dashboard(&dashboard, &renderer)
        }
        Commands::Attendants => {
            let mut table = table_for(TableKind::Attendants, &config);
            table.mount(&client).await;
            render_table(&table, &renderer)
        }
        Commands::Clients => {
            let mut table = table_for(TableKind::Clients, &config);
            table.mount(&client).await;
            render_table(&table, &renderer)
        }
        Commands::Performance => {
            let mut chart = PieChart::new();
            chart.mount(&client).await;
            render_pie(&chart, &renderer)
        }
        Commands::Evolution => {
            let mut chart = BarChart::new();
            chart.mount(&client).await;
            render_bar(&chart, &renderer)
        }
        Commands::Browse { table } => {
            let table = table_for(table.into(), &config);
            return browse(table, &client, &renderer).await;
        }
        Commands::Config { output } => return write_config(output.as_ref()),
    };

    if output.is_empty() {
        anyhow::bail!("No data received from {}", client.base_url());
    }
    print!("{}", output);
    Ok(())
}

fn table_for(kind: TableKind, config: &Config) -> PaginatedTable {
    let page_size = match kind {
        TableKind::Attendants => config.tables.attendants_page_size,
        TableKind::Clients => config.tables.clients_page_size,
    };
    PaginatedTable::new(kind, page_size)
}

async fn browse(
    mut table: PaginatedTable,
    client: &HttpClient,
    renderer: &TextRenderer,
) -> anyhow::Result<()> {
    table.mount(client).await;
    show(&table, renderer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "n" => {
                if !table.next_page(client).await {
                    eprintln!("Already on the last page");
                    continue;
                }
            }
            "p" => {
                if !table.prev_page(client).await {
                    eprintln!("Already on the first page");
                    continue;
                }
            }
            "r" => {
                let request = table.retry();
                table.run(request, client).await;
            }
            "q" => break,
            "" => continue,
            other => {
                eprintln!("Unknown command {:?}", other);
                continue;
            }
        }
        show(&table, renderer);
    }

    Ok(())
}

fn show(table: &PaginatedTable, renderer: &TextRenderer) {
    print!("{}", render_table(table, renderer));
    if table.last_fetch_failed() {
        eprintln!("Fetching page {} failed, press r to retry", table.current_page());
    }
    eprintln!("[n]ext [p]rev [r]etry [q]uit");
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}
