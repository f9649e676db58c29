use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Endpoint URL
    /// Optional. Overrides the classification endpoint for this run.
    /// Takes precedence over the FORMLINE_ENDPOINT environment variable.
    #[clap(short = 'e', long, help = "classification endpoint URL")]
    endpoint: Option<String>,

    /// Verbose logging
    #[clap(short = 'v', long, help = "enable verbose logging")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    endpoint: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            endpoint: args.endpoint,
            verbose: args.verbose,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            endpoint: args.endpoint,
            verbose: args.verbose,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_endpoint_only() {
        let args = CommandLineArgs::parse_from(["program", "--endpoint", "http://localhost:9000"]);
        assert_eq!(args.endpoint(), Some("http://localhost:9000"));
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-e", "http://localhost:9000", "-v"]);
        assert_eq!(args.endpoint(), Some("http://localhost:9000"));
        assert!(args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.endpoint(), None);
        assert!(!args.verbose());
    }
}
