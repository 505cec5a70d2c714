use tracing_subscriber::filter::LevelFilter;

/// Verbosity of the tracing output on stderr. Human-readable banners and
/// results always go to stdout, independently of this level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

pub fn init_logging(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(log_level.level_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
