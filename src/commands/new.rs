use std::path::PathBuf;

use tracing::info;

use crate::client::{PasteClient, DEFAULT_EXPIRES_IN, DEFAULT_FILETYPE};
use crate::input::InputSource;
use crate::types::CreatedPaste;

/// Create a new paste from stdin or a file.
///
/// Prints the UUID, access key, expiry and URL of the new paste. Keep the
/// access key: it is the only way to update or delete the paste later.
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to file for upload (reads stdin if omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Filetype of paste
    #[arg(short = 't', long, default_value = DEFAULT_FILETYPE)]
    filetype: String,
    /// Number of days before the paste expires (1-30)
    #[arg(short, long = "expires", default_value_t = DEFAULT_EXPIRES_IN)]
    expires_in: u32,
}

pub async fn run(client: &PasteClient, args: Args) -> anyhow::Result<()> {
    let content = InputSource::for_create(args.file.as_deref())
        .read_lines()
        .await?;

    let created = client
        .create(&content, Some(args.filetype.as_str()), Some(args.expires_in))
        .await?;
    info!("created paste {}", created.uuid);

    print!("{}", render(&created));
    Ok(())
}

fn render(created: &CreatedPaste) -> String {
    format!(
        "uuid:      \t{}\naccessKey: \t{}\nexpiresAt: \t{}\nurl:       \t{}\n",
        created.uuid,
        created.access_key.as_deref().unwrap_or_default(),
        created.expires_at.as_deref().unwrap_or_default(),
        created.url,
    )
}
