use std::io;

use savannacom::{DuplicatePolicy, SendRequest, functional};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// `SAVANNACOM_PHONE` holds a comma-separated list of recipients.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let id = required_env("SAVANNACOM_ID")?;
    let username = required_env("SAVANNACOM_USERNAME")?;
    let phones = required_env("SAVANNACOM_PHONE")?;
    let message = std::env::var("SAVANNACOM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the savannacom demo.".to_owned());
    let policy = DuplicatePolicy::from_keep_duplicates(
        std::env::var("SAVANNACOM_KEEP_DUPLICATES").is_ok_and(|v| v == "1"),
    );

    let entries = phones
        .split(',')
        .map(|phone| SendRequest::new(phone.trim(), message.clone()))
        .collect::<Vec<_>>();

    let report = functional::send_bulk(&id, &username, entries, policy).await;
    for error in report.errors.iter().flatten() {
        println!("failed {}: {}", error.recipient, error.error);
    }
    for duplicate in report.duplicates.iter().flatten() {
        println!("duplicate {}", duplicate.recipient);
    }

    Ok(())
}
