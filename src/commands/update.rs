use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use tracing::info;

use crate::client::PasteClient;
use crate::input::{stdin_is_piped, InputSource};
use crate::types::{PasteUpdate, UpdatedPaste};

/// Update the paste with the given UUID
///
/// Content comes from --file or piped stdin. Fields left out are not
/// changed; the server extends the expiry unless --expires is given.
#[derive(Debug, clap::Args)]
pub struct Args {
    /// UUID of paste to edit
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    uuid: String,
    /// Access key needed to update paste
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    access_key: String,
    /// Path to file to update with
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Filetype of paste
    #[arg(short = 't', long)]
    filetype: Option<String>,
    /// Number of days before the paste expires (1-30)
    #[arg(short, long = "expires")]
    expires_in: Option<u32>,
}

pub async fn run(client: &PasteClient, args: Args) -> anyhow::Result<()> {
    let content = InputSource::for_update(args.file.as_deref(), stdin_is_piped())
        .read_lines()
        .await?;

    let update = PasteUpdate {
        content,
        filetype: args.filetype,
        expires_in: args.expires_in,
    };
    let updated = client.update(&args.uuid, &args.access_key, &update).await?;
    info!("updated paste {}", updated.uuid);

    print!("{}", render(&updated));
    Ok(())
}

fn render(updated: &UpdatedPaste) -> String {
    format!(
        "uuid:      \t{}\nexpiresAt: \t{}\nurl:       \t{}\n",
        updated.uuid,
        updated.expires_at.as_deref().unwrap_or_default(),
        updated.url,
    )
}
