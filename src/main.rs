use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use hacker_stories::config::{Config, SourceKind};
use hacker_stories::logging::{init_tracing, LogTargets};
use hacker_stories::storage::FileStore;
use hacker_stories::story::StoryId;
use hacker_stories::ui::app::App;

/// Load stories, apply removals and print the view filtered by the saved search.
#[derive(Debug, Parser)]
#[command(name = "hacker-stories", version)]
struct Cli {
    /// Config file (default: <config_dir>/hacker-stories/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Story source, overriding the config file.
    #[arg(long, value_enum)]
    source: Option<SourceKind>,

    /// Store file for the search query, overriding the config file.
    #[arg(long)]
    store: Option<PathBuf>,

    /// New search query. Saved for later runs.
    #[arg(long)]
    query: Option<String>,

    /// Remove the story with this id before printing. Repeatable.
    #[arg(long = "remove", value_name = "ID")]
    remove: Vec<String>,

    /// Skip the simulated delay of the static source.
    #[arg(long)]
    no_delay: bool,

    /// Log warnings to stderr (more with RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&LogTargets::from_env(cli.verbose));

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(source) = cli.source {
        config.provider.source = source;
    }
    if let Some(path) = &cli.store {
        config.storage.path = Some(path.clone());
    }
    if cli.no_delay {
        config.provider.simulated_delay_ms = 0;
    }

    let provider = config
        .provider
        .build()
        .context("Failed to set up story source")?;
    let store = Arc::new(FileStore::open(config.storage.resolved_path()));
    let mut app = App::new(provider, store, &config.search);

    if let Some(query) = cli.query {
        app.set_query(query);
    }

    app.start();
    while app.is_loading() {
        app.next_load_event().await;
    }

    for id in &cli.remove {
        app.remove_story(StoryId::parse(id));
    }

    print!("{}", render_view(&app));
    Ok(())
}

fn render_view(app: &App) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Search: \"{}\"", app.search_term());

    if app.is_error() {
        let _ = writeln!(out, "Something went wrong while loading stories.");
        return out;
    }

    let view = app.current_view();
    if view.is_empty() {
        let _ = writeln!(out, "No stories.");
    }
    for story in view {
        let _ = writeln!(
            out,
            "[{}] {} by {} ({} comments, {} points) {}",
            story.object_id, story.title, story.author, story.num_comments, story.points, story.url
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hacker_stories::config::SearchConfig;
    use hacker_stories::provider::StaticProvider;
    use hacker_stories::storage::MemoryStore;

    fn make_app(provider: StaticProvider, query: &str) -> App {
        let search = SearchConfig {
            key: "search".to_string(),
            default_query: query.to_string(),
        };
        App::new(Arc::new(provider), Arc::new(MemoryStore::new()), &search)
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_repeated_removals() {
        let cli = Cli::parse_from(["hacker-stories", "--remove", "0", "--remove", "abc"]);
        assert_eq!(cli.remove, vec!["0".to_string(), "abc".to_string()]);
        assert!(cli.source.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_verbose_short_flag() {
        let cli = Cli::parse_from(["hacker-stories", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_source_value() {
        let cli = Cli::parse_from(["hacker-stories", "--source", "hacker-news"]);
        assert_eq!(cli.source, Some(SourceKind::HackerNews));
    }

    #[tokio::test]
    async fn render_lists_filtered_stories() {
        let mut app = make_app(StaticProvider::fixtures(), "redux");
        app.load_and_wait().await;
        let out = render_view(&app);
        assert!(out.starts_with("Search: \"redux\"\n"));
        assert!(out.contains("[1] Redux by Dan Abramov"));
        assert!(!out.contains("React"));
    }

    #[tokio::test]
    async fn render_reports_error() {
        let mut app = make_app(StaticProvider::failing(), "");
        app.load_and_wait().await;
        assert!(render_view(&app).contains("Something went wrong"));
    }
}
