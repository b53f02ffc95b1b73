use crate::console;
use crate::prelude::*;
use std::path::Path;
use tfmigrate_core::batch::Decision;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Ask whether `sample` should be migrated.
///
/// Re-asks until a recognised answer is given. A closed stdin counts as
/// quitting.
pub async fn ask(sample: &Path) -> Result<Decision> {
    console::query("Are you sure you want to perform this action?");
    console::query(format!("Migrating sample directory: {}", sample.display()));

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();

    loop {
        console::query(
            "[Y] Yes, process this sample  [A] Yes to All  [N] Skip this sample  [Q] Quit",
        );

        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .context("Failed to read answer from stdin")?;

        if bytes_read == 0 {
            return Ok(Decision::Stop);
        }

        match Decision::from_line(&line) {
            Some(decision) => return Ok(decision),
            None => console::warning(format!("Unrecognised answer: {}", line.trim())),
        }
    }
}
