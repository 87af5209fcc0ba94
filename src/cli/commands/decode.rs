//! Extract a hidden message from an image

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::StegoClient;
use crate::cli::output::{print_formatted, print_note, OutputFormat};
use crate::image_file::ImageFile;
use crate::method::StegoMethod;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded image
    #[arg(short, long)]
    pub image: PathBuf,

    /// Method the image was encoded with
    #[arg(long, value_enum, default_value_t = StegoMethod::Color)]
    pub method: StegoMethod,
}

#[derive(Serialize)]
struct DecodeResult {
    method: StegoMethod,
    image: String,
    message: String,
    characters: usize,
}

pub async fn run(
    args: &DecodeArgs,
    client: &StegoClient,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let file = ImageFile::from_path(&args.image)?;
    let message = client.decode(&file, args.method).await?;

    if message.is_empty() {
        print_note("No hidden message found", quiet);
    }

    let result = DecodeResult {
        method: args.method,
        image: args.image.display().to_string(),
        characters: message.chars().count(),
        message,
    };

    // The message itself is the output; quiet does not suppress it
    print_formatted(&result, format, |r| r.message.clone());

    Ok(())
}
