use simplelog::{Color, ColorChoice, ConfigBuilder, Level, LevelFilter, TermLogger, TerminalMode};

/// Installs a terminal logger at level `l` that only passes records
/// emitted by the `trisynk` crates.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .add_filter_allow_str("trisynk")
        .set_location_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(l, config, TerminalMode::Mixed, ColorChoice::Auto)
}
