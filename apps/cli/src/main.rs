use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, load_settings_from, HnSearchClient, MemoryTermStore, SearchSession, Settings,
    TermStore,
};
use shared::{domain::SortKey, protocol::SEARCH_TERM_KEY};
use storage::Storage;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod repl;
mod view;

use repl::{parse_line, ReplCommand, HELP};

#[derive(Parser, Debug)]
#[command(name = "hn-search", about = "Search Hacker News stories from the terminal")]
struct Cli {
    /// Settings file; defaults to ./hn_search.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    database_url: Option<String>,
    #[arg(long)]
    endpoint: Option<String>,
    /// Keep the search term in memory only.
    #[arg(long)]
    ephemeral: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one search and print the list.
    Search {
        /// Term to search for; the persisted term is used when omitted.
        term: Option<String>,
        #[arg(long, default_value = "none")]
        sort: SortKey,
        #[arg(long)]
        limit: Option<usize>,
        /// Print the visible stories as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Inspect or change the persisted search term.
    Term {
        #[command(subcommand)]
        action: TermCommand,
    },
    /// Edit, submit, sort and dismiss from a prompt.
    Interactive,
}

#[derive(Subcommand, Debug)]
enum TermCommand {
    Show,
    Set { value: String },
    Clear,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(),
    };
    if let Some(url) = &cli.database_url {
        settings.database_url = url.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.api_endpoint = endpoint.clone();
    }

    if cli.ephemeral {
        run(MemoryTermStore::new(), &settings, cli.command).await
    } else {
        let storage = Storage::new(&settings.database_url)
            .await
            .with_context(|| format!("failed to open term store '{}'", settings.database_url))?;
        run(storage, &settings, cli.command).await
    }
}

async fn run<T: TermStore>(store: T, settings: &Settings, command: Command) -> Result<ExitCode> {
    match command {
        Command::Term { action } => manage_term(&store, settings, action).await,
        Command::Search {
            term,
            sort,
            limit,
            json,
        } => {
            let mut session = open_session(store, settings).await?;
            match term {
                Some(term) => {
                    session.on_search_input(term).await;
                    session.submit().await?;
                }
                None => {
                    session.start().await;
                }
            }
            session.set_sort(sort);

            let mut visible = session.visible_stories();
            if let Some(limit) = limit {
                visible.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!(
                    "{}",
                    view::render_screen(session.search_term(), session.state(), &visible, sort)
                );
            }

            Ok(if session.state().is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Interactive => {
            let session = open_session(store, settings).await?;
            interactive(session).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn open_session<T: TermStore>(
    store: T,
    settings: &Settings,
) -> Result<SearchSession<T, HnSearchClient>> {
    let client = HnSearchClient::new(settings.request_timeout())
        .context("failed to build search http client")?;
    Ok(SearchSession::load(
        store,
        client,
        settings.api_endpoint.clone(),
        &settings.default_term,
    )
    .await)
}

async fn manage_term<T: TermStore>(
    store: &T,
    settings: &Settings,
    action: TermCommand,
) -> Result<ExitCode> {
    match action {
        TermCommand::Show => match store.get(SEARCH_TERM_KEY).await? {
            Some(term) => println!("{term}"),
            None => println!("{} (default)", settings.default_term),
        },
        TermCommand::Set { value } => {
            store.set(SEARCH_TERM_KEY, &value).await?;
            println!("search term set to '{value}'");
        }
        TermCommand::Clear => {
            if store.delete(SEARCH_TERM_KEY).await? {
                println!("search term cleared");
            } else {
                println!("no search term stored");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn interactive<T: TermStore>(mut session: SearchSession<T, HnSearchClient>) -> Result<()> {
    println!("{HELP}\n");
    session.start().await;
    redraw(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match command {
            ReplCommand::Input(text) => {
                session.on_search_input(text).await;
                println!("Search: {}", session.search_term());
            }
            ReplCommand::Submit => match session.submit().await {
                Ok(true) => redraw(&session),
                Ok(false) => println!("already showing results for '{}'", session.search_term()),
                Err(err) => eprintln!("{err}"),
            },
            ReplCommand::Sort(key) => {
                session.set_sort(key);
                redraw(&session);
            }
            ReplCommand::Dismiss(id) => {
                let found = session
                    .state()
                    .data()
                    .iter()
                    .find(|story| story.object_id == id)
                    .cloned();
                match found {
                    Some(story) => {
                        session.remove_story(&story);
                        redraw(&session);
                    }
                    None => eprintln!("no story with id {id}"),
                }
            }
            ReplCommand::List => redraw(&session),
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Quit => break,
        }
    }
    Ok(())
}

fn redraw<T: TermStore>(session: &SearchSession<T, HnSearchClient>) {
    print!(
        "{}",
        view::render_screen(
            session.search_term(),
            session.state(),
            &session.visible_stories(),
            session.sort_key(),
        )
    );
}
