use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};

use rst2xyz::{Batch, ConvertConfig, PairingMode};

use crate::cli::Cli;
use crate::display::{Context, FileProgress};
use crate::io::{prompt_path, stdin_is_tty};

pub fn run(cli: Cli, ctx: Context) -> Result<()> {
    let manifest = resolve(cli.manifest, "List of AMBER restart files to convert")?;
    let structure = resolve(cli.structure, "PDB file")?;

    let config = ConvertConfig {
        pairing: if cli.strict {
            PairingMode::Strict
        } else {
            PairingMode::Truncate
        },
        output_dir: cli.output_dir,
        basename: cli.basename,
        title: cli.title,
    };

    let batch = Batch::load(&manifest, &structure, config).with_context(|| {
        format!(
            "loading manifest '{}' with structure '{}'",
            manifest.display(),
            structure.display()
        )
    })?;

    let progress = FileProgress::start(ctx, batch.entries().len());
    let mut written = 0usize;
    let mut failures = Vec::new();

    for entry in batch.entries() {
        progress.file(entry);
        match batch.process(entry) {
            Ok(_) => {
                written += 1;
                progress.advance();
            }
            Err(e) if cli.keep_going => {
                failures.push((entry.clone(), e));
                progress.advance();
            }
            Err(e) => {
                progress.abandon();
                return Err(anyhow::Error::new(e)
                    .context(format!("converting '{}'", entry.display())));
            }
        }
    }

    progress.finish(written);

    if !failures.is_empty() {
        let mut stderr = io::stderr().lock();
        for (entry, error) in &failures {
            let _ = writeln!(stderr, "  ✗ {}: {}", entry.display(), error);
        }
        bail!(
            "{} of {} restart files failed to convert",
            failures.len(),
            batch.entries().len()
        );
    }

    Ok(())
}

fn resolve(path: Option<PathBuf>, label: &str) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None if stdin_is_tty() => prompt_path(label),
        None => bail!("missing {label} (pass it as an argument or run interactively)"),
    }
}
