use crate::client::ClientOptions;
use crate::console;
use crate::prelude::{new_table, println};
use std::path::PathBuf;
use tfmigrate_core::manifest::ExampleSource;

/// Samples listed before the remainder is summarised.
const MAX_SAMPLES_SHOWN: usize = 5;

/// Show what a run is about to do and what it may cost.
pub fn present(samples: &[PathBuf], examples: &[ExampleSource], client: &ClientOptions) {
    println!();
    console::warning(
        "IMPORTANT: hosted models bill by the number of tokens in each request and response.",
    );
    console::warning(
        "Every sample sends all example pairs plus its own source. Review the plan below before continuing.",
    );
    println!();
    console::warning(format!(
        "Model: {} via {:?} ({})",
        client.model,
        client.provider,
        client.endpoint()
    ));
    println!();

    console::warning(format!(
        "Number of directories to process: {}",
        samples.len()
    ));
    for line in sample_lines(samples) {
        console::warning(line);
    }
    println!();

    console::warning("The following example pairs will be used:");
    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Before", "After"]);
    for (i, example) in examples.iter().enumerate() {
        table.add_row(prettytable::row![
            i + 1,
            example.before.display(),
            example.after.display()
        ]);
    }
    table.printstd();
    println!();
}

fn sample_lines(samples: &[PathBuf]) -> Vec<String> {
    let mut lines: Vec<String> = samples
        .iter()
        .take(MAX_SAMPLES_SHOWN)
        .enumerate()
        .map(|(i, sample)| format!("\t{}: {}", i + 1, sample.display()))
        .collect();

    if samples.len() > MAX_SAMPLES_SHOWN {
        lines.push(format!(
            "\t... and {} more",
            samples.len() - MAX_SAMPLES_SHOWN
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lines_are_capped() {
        let samples: Vec<PathBuf> = (0..8).map(|i| PathBuf::from(format!("/s/{i}"))).collect();

        let lines = sample_lines(&samples);

        assert_eq!(lines.len(), MAX_SAMPLES_SHOWN + 1);
        assert_eq!(lines[0], "\t1: /s/0");
        assert_eq!(lines.last().unwrap(), "\t... and 3 more");
    }

    #[test]
    fn test_sample_lines_without_overflow() {
        let samples = vec![PathBuf::from("/s/a"), PathBuf::from("/s/b")];

        assert_eq!(sample_lines(&samples), vec!["\t1: /s/a", "\t2: /s/b"]);
    }
}
