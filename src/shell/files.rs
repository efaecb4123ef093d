use super::ShellError;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// `None` or `-` reads stdin.
pub fn load_input(path: Option<&Path>) -> Result<String, ShellError> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|source| ShellError::Read {
                path: p.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| ShellError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

/// Write the trimmed result. Refuses whitespace-only output.
pub fn save_output(path: Option<&Path>, result: &str) -> Result<(), ShellError> {
    let result = result.trim();
    if result.is_empty() {
        return Err(ShellError::NothingToSave);
    }

    match path {
        Some(p) if p != Path::new("-") => {
            fs::write(p, result).map_err(|source| ShellError::Write {
                path: p.display().to_string(),
                source,
            })
        }
        _ => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", result)
                .and_then(|_| stdout.flush())
                .map_err(|source| ShellError::Write {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}
