//! Minimal CLI parsing for startup overrides.

use std::env;

#[derive(Debug, Default, PartialEq)]
pub struct CliOptions {
    /// Insert the demo books and quizzes before serving
    pub seed: bool,
    pub database_url: Option<String>,
    pub port: Option<u16>,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    /// Parse flags, ignoring anything unrecognized
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => options.seed = true,
                "--database-url" => options.database_url = args.next(),
                "--port" => options.port = args.next().and_then(|v| v.parse().ok()),
                _ if arg.starts_with("--database-url=") => {
                    options.database_url = arg.split_once('=').map(|(_, v)| v.to_string());
                }
                _ if arg.starts_with("--port=") => {
                    options.port = arg.split_once('=').and_then(|(_, v)| v.parse().ok());
                }
                _ => {}
            }
        }
        options
    }
}
