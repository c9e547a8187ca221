use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use member_portal::adapters::auth::{
    IdentityToolkitConfig, IdentityToolkitExchange, LineTokenProvider, StaticTokenProvider,
};
use member_portal::adapters::collection::{HttpCollectionConfig, HttpMemberCollection};
use member_portal::adapters::screen::{ChannelNavigator, ConsoleNotifier};
use member_portal::application::{
    DirectorySync, FederatedSignInHandler, PasswordLoginHandler, RegistrationHandler,
};
use member_portal::config::AppConfig;
use member_portal::domain::auth::CredentialForm;
use member_portal::domain::directory::DirectoryView;
use member_portal::domain::navigation::Route;
use member_portal::domain::registration::RegistrationForm;
use member_portal::ports::{IdentityProvider, MemberCollection, Notifier};
use member_portal::telemetry;

#[derive(Parser)]
#[command(name = "member-portal")]
#[command(about = "Sign up, sign in and browse the member directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account, then open the directory
    SignUp {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with phone and password
    Login {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in through the federated identity provider
    GoogleSignIn {
        /// Pre-issued identity token; read from stdin when omitted
        #[arg(long)]
        id_token: Option<String>,
    },
    /// List the member directory
    Members {
        /// Fetch a second time as a pull-to-refresh would
        #[arg(long)]
        refresh: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init(&config.client).context("Failed to initialise logging")?;

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    match cli.command {
        Commands::SignUp {
            name,
            phone,
            email,
            password,
        } => {
            let collection = collection(&config)?;
            let (navigator, mut events) = ChannelNavigator::new();
            let handler =
                RegistrationHandler::new(collection.clone(), Arc::new(navigator), notifier);

            let mut form = RegistrationForm::new();
            form.set_name(name);
            form.set_phone(phone);
            form.set_email(email);
            form.set_password(password);

            if handler.submit(&mut form).await.is_err() {
                std::process::exit(1);
            }
            drop(handler);

            while let Some(event) = events.recv().await {
                if event.target() == Route::Directory {
                    show_directory(collection.clone(), false).await;
                }
            }
        }
        Commands::Login { phone, password } => {
            let handler = PasswordLoginHandler::new(notifier, config.client.login_delay());
            let mut form = CredentialForm::new();
            form.set_phone(phone);
            form.set_password(password);

            if handler.submit(&mut form).await.is_err() {
                std::process::exit(1);
            }
        }
        Commands::GoogleSignIn { id_token } => {
            let toolkit = IdentityToolkitConfig::from_identity(&config.identity)
                .context("Federated sign-in needs MEMBER_PORTAL__IDENTITY__API_KEY")?;
            let exchange = IdentityToolkitExchange::new(toolkit)?;

            let provider: Arc<dyn IdentityProvider> = match id_token {
                Some(token) => Arc::new(StaticTokenProvider::new(Some(token))),
                None => Arc::new(LineTokenProvider::stdin()),
            };

            let handler = FederatedSignInHandler::new(provider, Arc::new(exchange), notifier)
                .with_provider_id(config.identity.provider_id.clone());

            match handler.sign_in().await {
                Ok(outcome) => {
                    if let Some(session) = outcome.session() {
                        println!("Signed in as {}", session.display_label());
                    }
                }
                Err(_) => std::process::exit(1),
            }
        }
        Commands::Members { refresh } => {
            show_directory(collection(&config)?, refresh).await;
        }
    }

    Ok(())
}

fn collection(config: &AppConfig) -> Result<Arc<dyn MemberCollection>> {
    let collection = HttpMemberCollection::new(HttpCollectionConfig::from(&config.endpoint))?;
    Ok(Arc::new(collection))
}

async fn show_directory(collection: Arc<dyn MemberCollection>, refresh: bool) {
    let directory = DirectorySync::new(collection);
    directory.load().await;
    if refresh {
        directory.refresh().await;
    }

    directory
        .view(|view| {
            println!("{}", view.title());
            match view {
                DirectoryView::Loading => println!("Loading..."),
                DirectoryView::Empty {
                    count_label,
                    message,
                    ..
                } => {
                    println!("{}", count_label);
                    println!("{}", message);
                }
                DirectoryView::List {
                    count_label, rows, ..
                } => {
                    println!("{}", count_label);
                    for row in rows {
                        println!(
                            "- {} <{}> {} ({}) [{}]",
                            row.view.name,
                            row.view.email,
                            row.view.phone_number,
                            row.view.gender,
                            row.view.photo_url
                        );
                    }
                }
            }
        })
        .await;
}
