//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use arena_core::config::{Config, paths};
use arena_core::session::SessionStore;

mod commands;

#[derive(Parser)]
#[command(name = "arena")]
#[command(version)]
#[command(about = "Terminal client for the arena e-sports tournament platform")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Username, email or phone
        #[arg(long)]
        identifier: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and store the session token
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Bangladeshi mobile number (e.g. 01712345678)
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        referral_code: Option<String>,
    },

    /// Log out and clear the stored session
    Logout,

    /// Browse and join tournaments
    Tournaments {
        #[command(subcommand)]
        command: TournamentCommands,
    },

    /// Wallet balance and transactions
    Wallet {
        #[command(subcommand)]
        command: WalletCommands,
    },

    /// Notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationCommands,
    },

    /// Show the leaderboard
    Leaderboard {
        /// Number of entries to fetch
        #[arg(long)]
        limit: Option<u32>,
    },

    /// View and edit the profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Upload images
    Upload {
        #[command(subcommand)]
        command: UploadCommands,
    },

    /// Platform content (banners, highlights, videos, settings)
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },

    /// Probe backend reachability
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum TournamentCommands {
    /// List open tournaments
    List {
        #[arg(long)]
        game_id: Option<u32>,
        #[arg(long)]
        mode_id: Option<u32>,
    },
    /// List supported games and their modes
    Games,
    /// List tournaments you have joined
    My,
    /// Join a tournament
    Join {
        /// Tournament ID
        #[arg(value_name = "TOURNAMENT_ID")]
        id: String,
        /// In-game name to register with
        #[arg(long)]
        ign: String,
    },
}

#[derive(clap::Subcommand)]
enum WalletCommands {
    /// Show the wallet balance
    Show,
    /// List wallet transactions
    Transactions {
        /// Filter by type (credit or debit)
        #[arg(long, value_name = "TYPE")]
        kind: Option<String>,
    },
    /// Initiate a deposit
    Deposit {
        #[arg(long)]
        amount: f64,
        /// Payment method (e.g. bkash, nagad)
        #[arg(long)]
        method: String,
    },
    /// Request a withdrawal
    Withdraw {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        method: String,
        /// Payout account number
        #[arg(long)]
        account: String,
    },
    /// List pending withdraw requests
    WithdrawRequests,
    /// Cancel a pending withdraw request
    CancelWithdraw {
        #[arg(value_name = "REQUEST_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum NotificationCommands {
    /// List notifications
    List,
    /// Show the unread notification count
    Unread,
    /// Mark a notification as read
    Read {
        #[arg(value_name = "NOTIFICATION_ID")]
        id: String,
    },
    /// Mark all notifications as read
    ReadAll,
}

#[derive(clap::Subcommand)]
enum ProfileCommands {
    /// Show the profile
    Show,
    /// Update profile fields (unset fields keep their current value)
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        ign: Option<String>,
        /// Path to a new avatar image (uploaded before the update)
        #[arg(long, value_name = "PATH")]
        avatar: Option<PathBuf>,
    },
    /// Change the account password
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
}

#[derive(clap::Subcommand)]
enum ContentCommands {
    /// List promotional banners
    Banners,
    /// List highlights
    Highlights,
    /// List videos
    Videos,
    /// Show a platform setting by key
    Setting {
        #[arg(value_name = "KEY")]
        key: String,
    },
}

#[derive(clap::Subcommand)]
enum UploadCommands {
    /// Upload a tournament proof image
    Proof {
        #[arg(value_name = "TOURNAMENT_ID")]
        tournament_id: String,
        #[arg(value_name = "PATH")]
        path: PathBuf,
        /// Proof kind: uid or screenshot
        #[arg(long, default_value = "uid")]
        kind: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = arena_core::logging::init(&paths::arena_home())
        .context("initialize logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;
    let store = SessionStore::new();

    // default to the full-screen TUI
    let Some(command) = cli.command else {
        return arena_tui::run(config, &store).await;
    };

    match command {
        Commands::Login {
            identifier,
            password,
        } => commands::auth::login(&config, &store, &identifier, &password).await,
        Commands::Register {
            username,
            email,
            phone,
            password,
            referral_code,
        } => {
            commands::auth::register(&config, &store, username, email, phone, password, referral_code)
                .await
        }
        Commands::Logout => commands::auth::logout(&config, &store).await,

        Commands::Tournaments { command } => match command {
            TournamentCommands::List { game_id, mode_id } => {
                commands::tournaments::list(&config, &store, mode_id, game_id).await
            }
            TournamentCommands::Games => commands::tournaments::games(&config, &store).await,
            TournamentCommands::My => commands::tournaments::my(&config, &store).await,
            TournamentCommands::Join { id, ign } => {
                commands::tournaments::join(&config, &store, &id, &ign).await
            }
        },

        Commands::Wallet { command } => match command {
            WalletCommands::Show => commands::wallet::show(&config, &store).await,
            WalletCommands::Transactions { kind } => {
                commands::wallet::transactions(&config, &store, kind.as_deref()).await
            }
            WalletCommands::Deposit { amount, method } => {
                commands::wallet::deposit(&config, &store, amount, &method).await
            }
            WalletCommands::Withdraw {
                amount,
                method,
                account,
            } => commands::wallet::withdraw(&config, &store, amount, &method, &account).await,
            WalletCommands::WithdrawRequests => {
                commands::wallet::withdraw_requests(&config, &store).await
            }
            WalletCommands::CancelWithdraw { id } => {
                commands::wallet::cancel_withdraw(&config, &store, &id).await
            }
        },

        Commands::Notifications { command } => match command {
            NotificationCommands::List => commands::notifications::list(&config, &store).await,
            NotificationCommands::Unread => {
                commands::notifications::unread(&config, &store).await
            }
            NotificationCommands::Read { id } => {
                commands::notifications::read(&config, &store, &id).await
            }
            NotificationCommands::ReadAll => {
                commands::notifications::read_all(&config, &store).await
            }
        },

        Commands::Leaderboard { limit } => {
            commands::leaderboard::show(&config, &store, limit).await
        }

        Commands::Profile { command } => match command {
            ProfileCommands::Show => commands::profile::show(&config, &store).await,
            ProfileCommands::Update {
                full_name,
                ign,
                avatar,
            } => commands::profile::update(&config, &store, full_name, ign, avatar).await,
            ProfileCommands::ChangePassword { current, new } => {
                commands::profile::change_password(&config, &store, &current, &new).await
            }
        },

        Commands::Upload { command } => match command {
            UploadCommands::Proof {
                tournament_id,
                path,
                kind,
            } => commands::upload::proof(&config, &store, &tournament_id, &path, &kind).await,
        },

        Commands::Content { command } => match command {
            ContentCommands::Banners => commands::content::banners(&config, &store).await,
            ContentCommands::Highlights => commands::content::highlights(&config, &store).await,
            ContentCommands::Videos => commands::content::videos(&config, &store).await,
            ContentCommands::Setting { key } => {
                commands::content::setting(&config, &store, &key).await
            }
        },

        Commands::Health => commands::health::probe(&config, &store).await,

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
