use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use eduportal_auth::{
    FileStorage, JwtSessionValidator, SessionState, SessionStore, create_access_token,
    session_user_from_token,
};
use eduportal_cli::report;
use eduportal_config::{AccessConfig, DefaultPolicy, JwtConfig, SessionConfig};
use eduportal_core::{Permission, Role};
use eduportal_models::{LoginResponse, SessionUser, UserPayload};
use eduportal_rbac::{AccessControl, GuardOutcome, RouteGuard, dashboard_navigation};

#[derive(Parser)]
#[command(name = "eduportal-cli")]
#[command(about = "EduPortal CLI - Inspect and test dashboard access control", long_about = None)]
struct Cli {
    /// Override ACCESS_DEFAULT_POLICY for unregistered paths
    #[arg(long, global = true)]
    policy: Option<DefaultPolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role with its permission count
    Roles,
    /// List permissions, for one role or the whole registry
    Permissions {
        /// Role name, e.g. HR
        #[arg(short = 'r', long)]
        role: Option<Role>,
    },
    /// List the registered access rules
    Routes,
    /// Check whether a role may open a path
    Check {
        /// Role name, e.g. FACULTY
        #[arg(short = 'r', long)]
        role: Role,

        /// Dashboard path, e.g. /dashboard/admin/users
        #[arg(short = 'p', long)]
        path: String,

        /// Extra user-specific permission (repeatable)
        #[arg(long = "permission")]
        permissions: Vec<Permission>,
    },
    /// Report guarded paths that have no access rule
    Audit {
        /// Paths to check in addition to the navigation catalog
        paths: Vec<String>,

        /// Exit with an error when any path is unregistered
        #[arg(long)]
        strict: bool,
    },
    /// Issue a signed session token for local development
    IssueToken {
        #[arg(short = 'r', long)]
        role: Role,

        #[arg(short = 'e', long, default_value = "dev@eduportal.local")]
        email: String,

        #[arg(short = 'n', long, default_value = "Developer")]
        name: String,

        /// User-specific permission (repeatable)
        #[arg(long = "permission")]
        permissions: Vec<Permission>,
    },
    /// Manage the locally persisted session (SESSION_STORAGE_PATH)
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Store a session from a signed token
    Login {
        #[arg(short = 't', long)]
        token: String,
    },
    /// Restore and validate the stored session
    Status,
    /// Run the route guard for the stored session against a path
    Open {
        #[arg(short = 'p', long)]
        path: String,
    },
    /// Clear the stored session
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    eduportal_observability::init_console_logging();

    let cli = Cli::parse();

    let mut access_config = AccessConfig::from_env();
    if let Some(policy) = cli.policy {
        access_config.default_policy = policy;
    }
    let access = AccessControl::from_config(&access_config);

    match cli.command {
        Commands::Roles => print!("{}", report::roles(&access)),
        Commands::Permissions { role } => print!("{}", report::permissions(&access, role)),
        Commands::Routes => print!("{}", report::routes(&access)),
        Commands::Check {
            role,
            path,
            permissions,
        } => handle_check(&access, role, &path, &permissions),
        Commands::Audit { paths, strict } => handle_audit(&access, &paths, strict),
        Commands::IssueToken {
            role,
            email,
            name,
            permissions,
        } => handle_issue_token(role, email, name, permissions),
        Commands::Session { command } => handle_session(&access, &access_config, command).await,
    }

    Ok(())
}

fn handle_check(access: &AccessControl, role: Role, path: &str, permissions: &[Permission]) {
    let (allowed, line) = report::check(access, role, permissions, path);
    if allowed {
        println!("✅ {}", line);
    } else {
        println!("❌ {}", line);
        std::process::exit(1);
    }
}

fn handle_audit(access: &AccessControl, extra: &[String], strict: bool) {
    let catalog = dashboard_navigation();
    let paths = catalog
        .iter()
        .map(|item| item.path.as_str())
        .chain(extra.iter().map(String::as_str));

    let missing = report::audit(access, paths);
    if missing.is_empty() {
        println!("✅ Every path has an access rule");
        return;
    }

    println!(
        "⚠️  {} path(s) without an access rule (resolved by default policy: {}):",
        missing.len(),
        access.policy()
    );
    for path in &missing {
        println!("   {}", path);
    }
    if strict {
        std::process::exit(1);
    }
}

fn handle_issue_token(role: Role, email: String, name: String, permissions: Vec<Permission>) {
    let user = SessionUser::new(role)
        .with_identity(name, email)
        .with_permissions(permissions);

    match create_access_token(&user, &JwtConfig::from_env()) {
        Ok(token) => println!("{}", token),
        Err(e) => {
            eprintln!("❌ Error issuing token: {}", e.error);
            std::process::exit(1);
        }
    }
}

async fn handle_session(
    access: &AccessControl,
    access_config: &AccessConfig,
    command: SessionCommands,
) {
    let jwt_config = JwtConfig::from_env();
    let session_config = SessionConfig::from_env();
    let store = SessionStore::new(
        Arc::new(FileStorage::new(&session_config.storage_path)),
        &session_config,
    );

    match command {
        SessionCommands::Login { token } => {
            let user = match session_user_from_token(&token, &jwt_config) {
                Ok(user) => user,
                Err(e) => {
                    eprintln!("❌ Token rejected: {}", e.error);
                    std::process::exit(1);
                }
            };
            let response = LoginResponse {
                token,
                user: UserPayload::from(&user),
            };
            match store.login(response) {
                Ok(user) => println!("✅ Signed in as {} ({})", user.email, user.role),
                Err(e) => {
                    eprintln!("❌ Login rejected: {}", e.error);
                    std::process::exit(1);
                }
            }
        }
        SessionCommands::Status => {
            match store.bootstrap(&JwtSessionValidator::new(jwt_config)).await {
                SessionState::Authenticated(session) => println!(
                    "✅ Signed in as {} ({}), {} direct permission(s)",
                    session.user.email,
                    session.user.role,
                    session.user.permissions.len()
                ),
                SessionState::Unauthenticated | SessionState::Loading => {
                    println!("Not signed in")
                }
            }
        }
        SessionCommands::Open { path } => {
            let state = store.bootstrap(&JwtSessionValidator::new(jwt_config)).await;
            match RouteGuard::for_path(&path).evaluate(state.status(), access) {
                GuardOutcome::Render => println!("✅ {} renders", path),
                GuardOutcome::RedirectToLogin => {
                    println!("↪ {} redirects to {}", path, access_config.login_path)
                }
                GuardOutcome::RedirectToUnauthorized => {
                    println!("↪ {} redirects to {}", path, access_config.unauthorized_path)
                }
                GuardOutcome::Loading => println!("… session still loading"),
            }
        }
        SessionCommands::Logout => {
            store.logout();
            println!("✅ Signed out");
        }
    }
}
