/// How much the binaries log, from errors only up to per-node traces.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
