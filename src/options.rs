use {
    crate::replay::ReplayConfig,
    clap::{
        builder::{
            styling::{AnsiColor, Effects},
            Styles,
        },
        Parser,
    },
    runeset_client::RetryConfig,
    std::{path::PathBuf, time::Duration},
};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "runeset",
    about = "Rebuild the rune-bearing UTXO set from a transaction log",
    version,
    styles = Styles::styled()
      .error(AnsiColor::Red.on_default() | Effects::BOLD)
      .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
      .invalid(AnsiColor::Red.on_default())
      .literal(AnsiColor::Blue.on_default())
      .placeholder(AnsiColor::Cyan.on_default())
      .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
      .valid(AnsiColor::Green.on_default()),
  )]
pub struct Options {
    /// Newline-delimited transaction ids to replay, in file order.
    #[arg(value_name = "TX_FILE")]
    pub tx_file: PathBuf,

    #[arg(
        long,
        help = "Query the runes indexer at <INDEXER_URL>.",
        default_value = "https://mainnet-indexer-api.runealpha.xyz"
    )]
    pub indexer_url: String,

    #[arg(
        long,
        help = "HTTP timeout per request, in seconds. [default: 5]",
        default_value = "5"
    )]
    pub http_timeout: u64,

    #[arg(
        long,
        help = "Delay before the first retry, in seconds; doubles per attempt. [default: 5]",
        default_value = "5"
    )]
    pub retry_interval: u64,

    #[arg(
        long,
        help = "Cap for the retry delay, in seconds. [default: 60]",
        default_value = "60"
    )]
    pub retry_max_interval: u64,

    #[arg(
        long,
        help = "Attempts per transaction before giving up. [default: 10]",
        default_value = "10"
    )]
    pub max_retries: u32,

    /// Keep retrying a failing transaction forever.
    #[arg(long)]
    pub retry_forever: bool,

    /// Use fixed retry delays without jitter.
    #[arg(long)]
    pub no_jitter: bool,

    #[arg(
        long,
        help = "Fail on a non-success indexer status instead of skipping the transaction."
    )]
    pub strict: bool,
}

impl Options {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl From<&Options> for RetryConfig {
    fn from(options: &Options) -> Self {
        Self {
            base_interval: Duration::from_secs(options.retry_interval),
            max_interval: Duration::from_secs(options.retry_max_interval),
            max_attempts: if options.retry_forever {
                None
            } else {
                Some(options.max_retries)
            },
            use_jitter: !options.no_jitter,
        }
    }
}

impl From<&Options> for ReplayConfig {
    fn from(options: &Options) -> Self {
        Self {
            retry: RetryConfig::from(options),
            strict: options.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_indexer_cadence() {
        let options = Options::parse_from(["runeset", "840104.tx"]);
        let config = ReplayConfig::from(&options);

        assert_eq!(options.tx_file, PathBuf::from("840104.tx"));
        assert_eq!(config.retry.base_interval, Duration::from_secs(5));
        assert_eq!(config.retry.max_attempts, Some(10));
        assert!(config.retry.use_jitter);
        assert!(!config.strict);
    }

    #[test]
    fn retry_forever_clears_the_attempt_budget() {
        let options = Options::parse_from(["runeset", "840104.tx", "--retry-forever"]);
        let config = RetryConfig::from(&options);

        assert_eq!(config.max_attempts, None);
    }
}
