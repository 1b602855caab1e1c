use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "methodloc")]
#[command(about = "Lines of code per method and per class for C# projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project (.csproj) or solution (.sln) file to analyze
    pub path: PathBuf,

    /// Configuration file (defaults to the nearest .methodloc.toml)
    #[arg(long, env = "METHODLOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Parse documents on the main thread only
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Increase log verbosity on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn path_is_required() {
        let err = Cli::try_parse_from(["methodloc"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_explicit_config() {
        let cli = Cli::try_parse_from(["methodloc", "App.csproj", "--config", "ci.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn parses_path_and_flags() {
        let cli = Cli::try_parse_from(["methodloc", "App.sln", "-vv", "--no-parallel"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("App.sln"));
        assert_eq!(cli.verbosity, 2);
        assert!(cli.no_parallel);
    }
}
