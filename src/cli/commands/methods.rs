//! List the available steganography methods

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{print_formatted, OutputFormat};
use crate::method::StegoMethod;

#[derive(Serialize)]
struct MethodInfo {
    token: &'static str,
    label: &'static str,
    description: &'static str,
}

pub fn run(format: OutputFormat) -> Result<()> {
    let methods: Vec<MethodInfo> = StegoMethod::all()
        .iter()
        .map(|m| MethodInfo {
            token: m.token(),
            label: m.label(),
            description: m.description(),
        })
        .collect();

    print_formatted(&methods, format, |list| {
        list.iter()
            .map(|m| format!("{:<8} {:<22} {}", m.token, m.label, m.description))
            .collect::<Vec<_>>()
            .join("\n")
    });

    Ok(())
}
