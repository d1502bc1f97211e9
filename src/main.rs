use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::errors::ErrorWrapper;

mod app;
mod error;
mod form;
mod options;
mod settings;
mod storage;
mod terminal;
mod ui;
mod view;
mod widget;


fn initialise_logging() -> Result<(), ErrorWrapper> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}")))
        .build("asedit.log")?;

    let config = match Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info)) {
        Ok(config) => config,
        Err(e) => {
            return ErrorWrapper::internal_result(format!("Invalid logging configuration: {}", e));
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        return ErrorWrapper::internal_result(format!("Failed to initialise logging: {}", e));
    }
    Ok(())
}

fn main() -> Result<(), ErrorWrapper> {
    initialise_logging()?;

    let mut terminal_manager = terminal::terminal_manager::init()?;
    let result = app::run(&mut terminal_manager);
    terminal_manager.cleanup()?;

    if let Err(e) = &result {
        log::error!("Exited with an error: {}", e);
    }
    result
}
