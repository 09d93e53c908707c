use std::fs::{self, File};
use std::process::ExitCode;
use std::time::Duration;

use seekbox_demo::{ChangeLog, DemoApp, DemoError, Input, Terminal, paths, samples};
use simplelog::{Config, LevelFilter, WriteLogger};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn init_logging() -> Result<(), DemoError> {
    let path = paths::log_file();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), DemoError> {
    init_logging()?;

    let changes = ChangeLog::new();
    let mut app = DemoApp::new(samples::slots(&changes)?, changes);

    let mut terminal = Terminal::new()?;
    let mut layout = terminal.draw(&app)?;
    app.take_dirty();

    while !app.should_quit() {
        for event in terminal.poll(Some(POLL_INTERVAL))? {
            if let Some(input) = Input::from_crossterm(event) {
                app.handle(input, &layout);
            }
        }
        if app.take_dirty() {
            layout = terminal.draw(&app)?;
        }
    }

    for slot in app.slots() {
        if let Err(e) = slot.select.validate() {
            log::warn!("{}: {}", slot.name, e);
        }
    }
    log::info!("exiting");
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
