//! Login + profile flow against the dev user service.
//!
//! ```bash
//! TOV_API_URL=https://dev.tovtrip.com/usersvc/api/v1 \
//! TOV_API_KEY=... \
//! cargo run --example login_flow -- user@example.com secret1
//! ```

use tokio_util::sync::CancellationToken;
use tov_gateway::{ApiConfig, AuthClient, AuthStatus, LoginCredentials, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tov_gateway=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let email = args.next().unwrap_or_else(|| "user@example.com".into());
    let password = args.next().unwrap_or_else(|| "secret1".into());

    let client = AuthClient::builder().config(ApiConfig::from_env()?).build()?;

    let cancel = CancellationToken::new();
    match client.auth_status(&cancel).await {
        Some(AuthStatus::LoggedIn) => println!("already logged in"),
        _ => {
            let credentials = LoginCredentials::email(email, password);
            if let Err(msg) = credentials.validate() {
                eprintln!("invalid input: {msg}");
                std::process::exit(1);
            }
            client.login(&credentials).await?;
            println!("logged in");
        }
    }

    let profile = client.profile().await?;
    println!(
        "hello, {} {} <{}>",
        profile.first_name, profile.last_name, profile.email
    );

    client.logout().await?;
    println!("logged out");
    Ok(())
}
