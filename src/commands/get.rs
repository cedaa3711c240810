use clap::builder::NonEmptyStringValueParser;

use crate::client::PasteClient;
use crate::types::Paste;

/// Retrieve a paste with the given UUID
#[derive(Debug, clap::Args)]
pub struct Args {
    /// UUID of paste to fetch
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    uuid: String,
    /// Print filetype and expiry before the content
    #[arg(short, long)]
    verbose: bool,
}

pub async fn run(client: &PasteClient, args: Args) -> anyhow::Result<()> {
    let paste = client.get(&args.uuid).await?;
    print!("{}", render(&args.uuid, &paste, args.verbose));
    Ok(())
}

fn render(uuid: &str, paste: &Paste, verbose: bool) -> String {
    let mut out = String::new();
    if verbose {
        out.push_str(&format!("uuid:      {uuid}\n"));
        out.push_str(&format!("filetype:  {}\n", paste.filetype));
        out.push_str(&format!("expiresAt: {}\n", paste.expires_at));
        out.push('\n');
    }
    for line in &paste.content {
        out.push_str(line);
        out.push('\n');
    }
    out
}
