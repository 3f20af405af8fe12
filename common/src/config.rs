use anyhow::{Context, bail};

use crate::board::Neighborhood;

/// Grid edge used when none is given, matching the classic 6x6 text game.
pub const DEFAULT_SIZE: usize = 6;

/// Settings for a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub neighborhood: Neighborhood,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            neighborhood: Neighborhood::default(),
        }
    }
}

impl Config {
    /// Parses command line arguments (without the program name).
    ///
    /// Accepts an optional grid size and the `--ring` / `--half-window` flags.
    /// The size is not range-checked here; the board rejects sizes that are too small.
    pub fn from_args<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut size_seen = false;

        for arg in args {
            match arg.as_ref() {
                "--ring" => config.neighborhood = Neighborhood::Ring,
                "--half-window" => config.neighborhood = Neighborhood::HalfWindow,
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                value => {
                    if size_seen {
                        bail!("unexpected argument '{value}'");
                    }
                    config.size = value
                        .parse()
                        .with_context(|| format!("grid size '{value}' is not a number"))?;
                    size_seen = true;
                }
            }
        }

        Ok(config)
    }
}
