//! Hide a message inside an image

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::api::StegoClient;
use crate::cli::output::{print_formatted, OutputFormat};
use crate::image_file::ImageFile;
use crate::method::StegoMethod;
use crate::state::download_filename;
use crate::util::format_size;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Cover image (PNG, JPEG or BMP)
    #[arg(short, long)]
    pub image: PathBuf,

    /// Message to hide
    #[arg(short, long)]
    pub message: String,

    /// Steganography method
    #[arg(long, value_enum, default_value_t = StegoMethod::Color)]
    pub method: StegoMethod,

    /// Where to write the encoded image (default: encoded_<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct EncodeResult {
    method: StegoMethod,
    input: String,
    output: String,
    size: usize,
    content_type: Option<String>,
}

pub async fn run(
    args: &EncodeArgs,
    client: &StegoClient,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let file = ImageFile::from_path(&args.image)?;

    if args.message.trim().is_empty() {
        anyhow::bail!("Please enter a message to encode");
    }

    let encoded = client.encode(&file, &args.message, args.method).await?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(download_filename(file.name())));
    std::fs::write(&output, &encoded.bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!("Wrote encoded image to {:?}", output);

    let result = EncodeResult {
        method: args.method,
        input: args.image.display().to_string(),
        output: output.display().to_string(),
        size: encoded.len(),
        content_type: encoded.content_type.clone(),
    };

    if quiet && format == OutputFormat::Text {
        return Ok(());
    }

    print_formatted(&result, format, |r| {
        format!(
            "Encoded with {} -> {} ({})",
            r.method.label(),
            r.output,
            format_size(r.size as u64)
        )
    });

    Ok(())
}
