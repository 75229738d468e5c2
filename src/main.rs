use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkgnews::cli::{Cli, Commands, NewsCommands, Renderer};
use pkgnews::config::Config;
use pkgnews::domain::NewsItem;
use pkgnews::errors::NewsResult;
use pkgnews::repo::FsMetadataRepository;
use pkgnews::services::{NewsService, UpdateService};
use pkgnews::storage::{SqliteReadStatusRepository, SqliteStorage};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PKGNEWS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> NewsResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize collaborators
    let storage = SqliteStorage::new(&config.db_path)?;
    let read_status_repo = SqliteReadStatusRepository::new(storage);
    let metadata_repo =
        FsMetadataRepository::new(config.repo_dir.clone(), config.preferred_langs.clone());

    let renderer = Renderer::detect();

    match cli.command {
        Commands::Update => cmd_update(metadata_repo, read_status_repo, &renderer, cli.porcelain),
        Commands::News { command } => match command {
            NewsCommands::List { new } => {
                cmd_news_list(metadata_repo, read_status_repo, &renderer, new, cli.porcelain)
            }
            NewsCommands::Read { quiet, items } => cmd_news_read(
                metadata_repo,
                read_status_repo,
                &renderer,
                &items,
                quiet,
                cli.porcelain,
            ),
        },
    }
}

fn print_porcelain(items: &[NewsItem]) -> NewsResult<()> {
    for item in items {
        println!("{}", item.to_porcelain().to_json_line()?);
    }
    Ok(())
}

fn cmd_update(
    metadata_repo: FsMetadataRepository,
    read_status_repo: SqliteReadStatusRepository,
    renderer: &Renderer,
    porcelain: bool,
) -> NewsResult<()> {
    let service = UpdateService::new(metadata_repo, read_status_repo);
    let report = service.run()?;

    if porcelain {
        return print_porcelain(&report.unread);
    }

    if report.has_unread() {
        println!(
            "\nThere are {} new news item(s):\n",
            report.unread.len()
        );
        println!("{}", renderer.title_list(&report.unread));
        println!(
            "\n{}",
            renderer.markup("You can read them with [yellow]pkgnews news read[/yellow].")
        );
    }

    Ok(())
}

fn cmd_news_list(
    metadata_repo: FsMetadataRepository,
    read_status_repo: SqliteReadStatusRepository,
    renderer: &Renderer,
    only_unread: bool,
    porcelain: bool,
) -> NewsResult<()> {
    let service = NewsService::new(metadata_repo, read_status_repo);
    let items = service.list(only_unread)?;

    if porcelain {
        return print_porcelain(&items);
    }

    if items.is_empty() {
        if only_unread {
            println!("No unread news items.");
        } else {
            println!("No news items.");
        }
        return Ok(());
    }

    println!("News items:\n");
    println!("{}", renderer.title_list(&items));

    Ok(())
}

fn cmd_news_read(
    metadata_repo: FsMetadataRepository,
    read_status_repo: SqliteReadStatusRepository,
    renderer: &Renderer,
    selectors: &[String],
    quiet: bool,
    porcelain: bool,
) -> NewsResult<()> {
    let service = NewsService::new(metadata_repo, read_status_repo);
    let items = service.read(selectors, true)?;

    if porcelain {
        return print_porcelain(&items);
    }

    if quiet {
        return Ok(());
    }

    if items.is_empty() {
        println!("No unread news items.");
        return Ok(());
    }

    let articles: Vec<String> = items.iter().map(|item| renderer.article(item)).collect();
    println!("{}", articles.join("\n\n"));

    Ok(())
}
