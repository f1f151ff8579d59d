use std::{backtrace::Backtrace, panic, path::PathBuf, process};

use clap::{Parser, command};
use digiclock_core::config::get_config;
use digiclock_gui::{App, get_log_spec};
use flexi_logger::{
    Age, Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, LogSpecification, Logger,
    LoggerHandle, Naming,
};
use iced::{Font, Size};
use log::{debug, error, info};
use tokio::runtime::Handle;

const LOG_DIRECTORY: &str = "/tmp/digiclock";
const KEPT_LOG_FILES: usize = 7;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Alternate configuration file, `~` and env vars are expanded
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,
}

/// Daily-rotated file log mirrored to stdout, at `info` until the config is read.
fn start_logger() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::with(LogSpecification::info())
        .log_to_file(FileSpec::default().directory(LOG_DIRECTORY))
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .start()
}

#[tokio::main]
async fn main() -> iced::Result {
    let args = Args::parse();

    let logger = start_logger().unwrap_or_else(|err| {
        eprintln!("failed to start logger: {err}");
        process::exit(1);
    });
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::capture();
        error!("Panic: {info} \n {backtrace}");
    }));
    debug!("args: {args:?}");

    let (config, config_path) = get_config(args.config_path).unwrap_or_else(|err| {
        error!("Failed to read config: {err}");
        process::exit(1);
    });
    info!("Using config {config_path:?}");
    logger.set_new_spec(get_log_spec(&config.log_level));

    let font = match config.appearance.font_name {
        Some(ref font_name) => Font::with_name(Box::leak(font_name.clone().into_boxed_str())),
        None => Font::DEFAULT,
    };
    let window_size = Size::new(config.window.width, config.window.height);

    let result = iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .scale_factor(App::scale_factor)
        .window_size(window_size)
        .exit_on_close_request(false)
        .default_font(font)
        .run_with(App::new((config, Handle::current())));

    // The handle flushes and stops the file writer when dropped.
    drop(logger);
    result
}
