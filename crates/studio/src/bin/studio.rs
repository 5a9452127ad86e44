//! Studio CLI.
//!
//! Compose, preview, publish and e-mail posts from the terminal, or serve
//! the HTTP functions the web front end calls.

use std::io::Read as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use composer::{
    hashtags, Composer, RandomSource, SeededRandom, ThreadRandom, Topic, TopicStrategy,
};
use gateway::{
    Connection, GenerationService, LinkedInClient, NewsGenerationService,
    RemoteGenerationService, ResendNotifier,
};
use studio::{preview, AppState, Session, StudioConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compose LinkedIn posts from topics, your own notes or the news
#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "Compose LinkedIn posts from topics, your own notes or the news")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available topics and their hashtags
    Topics,

    /// Generate a post and show its preview
    Generate {
        /// Topic id; repeat to select several (order matters)
        #[arg(short, long = "topic", value_parser = parse_topic)]
        topics: Vec<Topic>,

        /// Detail that personalises a topic post
        #[arg(short, long)]
        detail: Option<String>,

        /// Your own text to rewrite into a post
        #[arg(short, long)]
        content: Option<String>,

        /// How the post is produced
        #[arg(long, value_enum, default_value_t = Mode::Fragments)]
        mode: Mode,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before a local post is shown
        #[arg(long, env = "STUDIO_GENERATION_DELAY_MS")]
        delay_ms: Option<u64>,

        /// Print only the post text
        #[arg(long)]
        raw: bool,
    },

    /// Print the LinkedIn authorization URL
    AuthUrl {
        /// Opaque state echoed back on redirect
        #[arg(long)]
        state: Option<String>,
    },

    /// Exchange an authorization code and show the connected profile
    Connect {
        /// Code from the authorization redirect
        #[arg(long)]
        code: String,
    },

    /// Publish text to LinkedIn
    Publish {
        /// Access token from `connect`
        #[arg(long, env = "LINKEDIN_ACCESS_TOKEN")]
        token: String,

        /// Author URN; looked up from the profile when omitted
        #[arg(long)]
        person_urn: Option<String>,

        #[command(flatten)]
        source: TextSource,
    },

    /// E-mail text to a recipient
    Email {
        /// Recipient address
        #[arg(long)]
        to: String,

        #[command(flatten)]
        source: TextSource,
    },

    /// Serve the HTTP functions
    Serve {
        /// Port to listen on
        #[arg(long, env = "STUDIO_PORT")]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum Mode {
    /// Random template fragments
    #[default]
    Fragments,
    /// Fixed sample posts
    Sample,
    /// Wrap a news headline
    News,
}

#[derive(clap::Args)]
struct TextSource {
    /// Post text
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the post text from a file ("-" for stdin)
    #[arg(long)]
    file: Option<PathBuf>,
}

impl TextSource {
    fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match &self.file {
            Some(path) if path.as_os_str() == "-" => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read post from stdin")?;
                Ok(text)
            }
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => bail!("Provide the post with --text or --file"),
        }
    }
}

fn parse_topic(value: &str) -> Result<Topic, String> {
    Topic::parse(value).ok_or_else(|| {
        let ids: Vec<_> = Topic::ALL.iter().map(Topic::id).collect();
        format!("unknown topic '{value}' (expected one of: {})", ids.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "studio=debug,composer=debug,gateway=debug"
    } else {
        "studio=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)))
        .init();

    let config = StudioConfig::from_env();

    match cli.command {
        Commands::Topics => list_topics(),
        Commands::Generate {
            topics,
            detail,
            content,
            mode,
            seed,
            delay_ms,
            raw,
        } => {
            let mut session = Session::new();
            for topic in topics {
                session.toggle_topic(topic);
            }
            session.set_custom_detail(detail.unwrap_or_default());
            session.set_user_content(content.unwrap_or_default());
            let delay = delay_ms.map_or(config.generation_delay, Duration::from_millis);

            generate(&mut session, &config, mode, seed, delay).await?;
            show(&session, raw);
        }
        Commands::AuthUrl { state } => {
            let client = LinkedInClient::new(config.gateway.linkedin);
            let url = client.authorize_url(state.as_deref())?;
            println!("{url}");
        }
        Commands::Connect { code } => {
            let client = LinkedInClient::new(config.gateway.linkedin);
            let mut session = Session::new();
            let connection = session.connect(&client, &code).await?;

            let name = connection.profile.as_ref().map_or("", |p| p.name.as_str());
            println!("{} {}", "Connected as".green(), name.bold());
            println!("{} {}", "Access token:".dimmed(), connection.access_token);
            if let Some(urn) = connection.person_urn() {
                println!("{} {}", "Person URN:".dimmed(), urn);
            }
        }
        Commands::Publish {
            token,
            person_urn,
            source,
        } => {
            let client = LinkedInClient::new(config.gateway.linkedin);
            let text = source.read()?;

            let receipt = if let Some(urn) = person_urn {
                client.publish_as(&text, &token, Some(&urn)).await?
            } else {
                let mut session = Session::new();
                session.edit(text);
                session.restore_connection(Connection::new(token));
                session.publish(&client).await?
            };
            println!("{} {}", "Published:".green().bold(), receipt.post_id);
        }
        Commands::Email { to, source } => {
            let notifier = ResendNotifier::new(config.gateway.resend);
            let mut session = Session::new();
            session.edit(source.read()?);

            let receipt = session.email(&notifier, &to).await?;
            println!("{} {}", "Sent:".green().bold(), receipt.message_id);
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.port);
            let state = Arc::new(AppState::from_config(&config.gateway));
            studio::run_server(state, port).await?;
        }
    }

    Ok(())
}

fn show(session: &Session, raw: bool) {
    if raw {
        println!("{}", session.post_text());
        return;
    }
    print!("{}", preview::render(session.draft(), session.profile()));
    if let Some(query) = session.search_query() {
        println!("{} {}", "News query:".dimmed(), query);
    }
}

fn list_topics() {
    for topic in Topic::ALL {
        println!(
            "{} {:<18} {:<24} {}",
            topic.icon(),
            topic.id().bold().cyan(),
            topic.label(),
            hashtags::candidates(topic).join(" ").dimmed()
        );
    }
}

async fn generate(
    session: &mut Session,
    config: &StudioConfig,
    mode: Mode,
    seed: Option<u64>,
    delay: Duration,
) -> Result<()> {
    let rng: Box<dyn RandomSource + Send> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    match mode {
        Mode::Fragments | Mode::Sample => {
            session.set_strategy(if matches!(mode, Mode::Sample) {
                TopicStrategy::Sample
            } else {
                TopicStrategy::Fragments
            });
            let mut composer = Composer::new(rng);
            info!("Generating your post...");
            session.generate(&mut composer, delay).await?;
        }
        Mode::News => {
            let service: Box<dyn GenerationService> = match &config.gateway.generation_url {
                Some(url) => Box::new(RemoteGenerationService::new(url.clone())),
                None => Box::new(NewsGenerationService::new(rng)),
            };
            session.generate_with(service.as_ref()).await?;
        }
    }
    Ok(())
}
