use clap::builder::NonEmptyStringValueParser;
use tracing::info;

use crate::client::PasteClient;

/// Delete a paste
///
/// The access key must match the one issued when the paste was created.
#[derive(Debug, clap::Args)]
pub struct Args {
    /// UUID of paste to delete
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    uuid: String,
    /// Access key needed to delete paste
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    access_key: String,
}

pub async fn run(client: &PasteClient, args: Args) -> anyhow::Result<()> {
    let body = client.delete(&args.uuid, &args.access_key).await?;
    info!("deleted paste {}", args.uuid);

    println!("{}", confirmation(&body));
    Ok(())
}

/// The server may answer a delete with an empty body.
fn confirmation(body: &str) -> &str {
    if body.is_empty() {
        "Paste deleted"
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_becomes_default_message() {
        assert_eq!(confirmation(""), "Paste deleted");
    }

    #[test]
    fn server_message_is_passed_through() {
        assert_eq!(confirmation("gone"), "gone");
    }
}
