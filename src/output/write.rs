// src/output/write.rs
// =============================================================================
// Where the rendered result goes: stdout, or a file that gets overwritten.
//
// Logs go to stderr, so `index-intruder -u ... > list.txt` captures only the
// result. --output is still useful when URLs contain characters a terminal
// or shell pipeline might mangle.
// =============================================================================

use crate::error::Error;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    // Checked up front: a blank file name is rejected before crawling
    pub fn from_arg(output: Option<&str>) -> Result<Self, Error> {
        match output {
            None => Ok(Destination::Stdout),
            Some(path) if path.trim().is_empty() => Err(Error::InvalidOutputPath(path.to_string())),
            Some(path) => Ok(Destination::File(PathBuf::from(path))),
        }
    }

    pub fn emit(&self, data: &str) -> Result<(), Error> {
        match self {
            Destination::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                let io_err = |source: std::io::Error| Error::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                };

                handle.write_all(data.as_bytes()).map_err(io_err)?;
                // text already ends with '\n'; json does not
                if !data.ends_with('\n') {
                    handle.write_all(b"\n").map_err(io_err)?;
                }
                handle.flush().map_err(io_err)
            }
            Destination::File(path) => {
                std::fs::write(path, data).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                println!("File written successfully: {}", path.display());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_output_means_stdout() {
        assert_eq!(Destination::from_arg(None).unwrap(), Destination::Stdout);
    }

    #[test]
    fn test_blank_output_is_rejected() {
        let err = Destination::from_arg(Some("   ")).unwrap_err();
        assert!(matches!(err, Error::InvalidOutputPath(_)));
    }

    #[test]
    fn test_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "old contents that are longer than the new ones").unwrap();

        let dest = Destination::from_arg(path.to_str()).unwrap();
        dest.emit("a\nb\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("list.txt");

        let err = Destination::File(path).emit("x").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
