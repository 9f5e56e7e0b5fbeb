use base8x::{AlphabetRegistry, Codec};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Helper function to create a codec from config
pub fn create_codec(
    config: &AlphabetRegistry,
    name: Option<&str>,
) -> Result<Codec, Box<dyn std::error::Error>> {
    let name = config.resolve_name(name);
    log::debug!("using alphabet '{}'", name);
    config.codec(name)
}

/// Reads the whole input from `file` or stdin, honouring `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len();

            if file_size > global.max_size as u64 {
                if global.force {
                    log::warn!(
                        "processing large file ({} bytes, limit: {} bytes)",
                        file_size,
                        global.max_size
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size {
        if global.force {
            log::warn!(
                "processing large input ({} bytes, limit: {} bytes)",
                buffer.len(),
                global.max_size
            );
        } else {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                global.max_size
            )
            .into());
        }
    }

    Ok(buffer)
}

/// Writes `data` to `output` or stdout.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
