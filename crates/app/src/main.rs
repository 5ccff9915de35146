use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use drill_core::{Category, SessionId, TopicId};
use services::{AppServices, Clock, PracticeLoopService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod config;

use config::AppConfig;

const DEFAULT_LOG_FILTER: &str = "warn,app=info,ui=info,services=info,storage=info,drill_core=info";

#[derive(Parser)]
#[command(name = "math-drills", version, about = "Adaptive math practice drills")]
struct Cli {
    /// TOML settings file
    #[arg(long, env = "DRILL_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible problems
    #[arg(long, env = "DRILL_SEED", global = true)]
    seed: Option<u64>,

    /// Open directly on a topic, e.g. long_division
    #[arg(long)]
    topic: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the topic catalogue and exit
    List,
}

struct DesktopApp {
    services: AppServices,
    window_title: String,
}

impl UiApp for DesktopApp {
    fn session_id(&self) -> SessionId {
        self.services.session_id()
    }

    fn open_topic_on_launch(&self) -> Option<TopicId> {
        self.services.open_topic_on_launch()
    }

    fn window_title(&self) -> String {
        self.window_title.clone()
    }

    fn practice(&self) -> Arc<PracticeLoopService> {
        self.services.practice()
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_catalog() {
    for category in Category::ALL {
        println!("{}", category.label());
        for topic in TopicId::ALL.into_iter().filter(|t| t.category() == category) {
            let info = topic.info();
            println!(
                "  {:<26} {} (levels {}-{})",
                topic.slug(),
                info.title,
                info.min_level,
                info.max_level
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(Commands::List) = cli.command {
        print_catalog();
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    let settings = config.practice_settings(cli.seed)?;
    let open_topic = cli
        .topic
        .as_deref()
        .map(str::parse::<TopicId>)
        .transpose()
        .context("invalid --topic")?;

    // Services are built on a short-lived runtime; the desktop launcher runs its own.
    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
    let seed = settings.seed;
    let services = runtime
        .block_on(AppServices::in_memory(Clock::system(), settings))?
        .with_open_topic(open_topic);
    drop(runtime);

    info!(session = %services.session_id(), ?seed, topic = ?open_topic, "starting practice");

    let window_title = config.window_title.clone();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        window_title: config.window_title,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(window_title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}
