use std::io;

use savannacom::SavannacomClient;
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let id = required_env("SAVANNACOM_ID")?;
    let username = required_env("SAVANNACOM_USERNAME")?;
    let phone = required_env("SAVANNACOM_PHONE")?;
    let message = std::env::var("SAVANNACOM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the savannacom demo.".to_owned());

    let client = SavannacomClient::new(id, username)?;
    let outcome = client.send_sms(&phone, &message).await;
    println!(
        "status: {}, message: {:?}, error: {:?}",
        outcome.status, outcome.message, outcome.error
    );

    Ok(())
}
