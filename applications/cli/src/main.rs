/// Roster - terminal client for the users API
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use roster_cli::{input::HELP, Command, Settings};
use roster_client::RosterClient;
use roster_core::{User, UserApi, UserId};
use roster_view::{CreationForm, ListView, Session};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Add and list users of a Roster backend", long_about = None)]
struct Cli {
    /// Backend URL (overrides configuration)
    #[arg(short, long)]
    url: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a user
    Add {
        /// Name
        #[arg(short, long)]
        name: String,
        /// Email
        #[arg(short, long)]
        email: String,
        /// Biography
        #[arg(short, long, default_value = "")]
        bio: String,
    },
    /// List all users
    List,
    /// Show one user
    Get {
        /// User ID
        id: i64,
    },
    /// Check that the backend is running
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        settings = settings.with_base_url(url);
    }

    // Initialize tracing (stderr, so rendered screens stay clean on stdout)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = RosterClient::new(settings.client_config())
        .with_context(|| format!("Cannot use backend URL {}", settings.api.base_url))?;

    tracing::debug!(url = %client.url(), "Client ready");

    match cli.command {
        None => interactive(&client).await,
        Some(Commands::Add { name, email, bio }) => add_user(&client, name, email, bio).await,
        Some(Commands::List) => list_users(&client).await,
        Some(Commands::Get { id }) => get_user(&client, UserId::new(id)).await,
        Some(Commands::Ping) => ping(&client).await,
    }
}

async fn interactive(client: &RosterClient) -> anyhow::Result<()> {
    let mut session = Session::new();
    session.mount(client).await;

    println!("{}", session.render());
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match &command {
            Command::SetName(name) => {
                session.form_mut().set_name(name.as_str());
            }
            Command::SetEmail(email) => {
                session.form_mut().set_email(email.as_str());
            }
            Command::SetBio(bio) => {
                session.form_mut().set_bio(bio.as_str());
            }
            Command::Submit => {
                session.submit(client).await;
            }
            Command::Refresh => session.refresh(client).await,
            Command::Show => {}
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }

        if command.redraws() {
            println!("{}", session.render());
        }
    }

    Ok(())
}

async fn add_user(
    client: &RosterClient,
    name: String,
    email: String,
    bio: String,
) -> anyhow::Result<()> {
    let mut form = CreationForm::new();
    form.set_name(name);
    form.set_email(email);
    form.set_bio(bio);

    let Some(outcome) = form.submit(client).await else {
        bail!("Submission did not start");
    };

    println!("{}", outcome.message());
    match outcome.created() {
        Some(user) => {
            print_user(user);
            Ok(())
        }
        None => bail!("User was not created"),
    }
}

async fn list_users(client: &RosterClient) -> anyhow::Result<()> {
    let mut list = ListView::new();
    list.load_all(client).await;

    print!("{}", list.render());

    if let Some(error) = list.error() {
        bail!("{}", error);
    }
    Ok(())
}

async fn get_user(api: &dyn UserApi, id: UserId) -> anyhow::Result<()> {
    let user = api.get_user(id).await?;
    print_user(&user);
    Ok(())
}

async fn ping(client: &RosterClient) -> anyhow::Result<()> {
    let health = client.ping().await?;
    println!("{} ({})", health.message, client.url());
    Ok(())
}

fn print_user(user: &User) {
    println!("#{} {}", user.id, user.name);
    println!("   {}", user.email);
    if let Some(bio) = user.display_bio() {
        println!("   {}", bio);
    }
}
