use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// File to page through
    /// Required. The whole file is read into memory before the first page is shown.
    #[clap(value_name = "FILE", help = "file to display")]
    file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    file: PathBuf,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self { file: args.file }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self { file: args.file }
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::try_parse_from(itr)?;
        Ok(Self { file: args.file })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_file_only() {
        let args = CommandLineArgs::parse_from(["program", "notes.txt"]);
        assert_eq!(args.file(), Path::new("notes.txt"));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = CommandLineArgs::try_parse_from(["program"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        let result = CommandLineArgs::try_parse_from(["program", "a.txt", "b.txt"]);
        assert!(result.is_err());
    }
}
