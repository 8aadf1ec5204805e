//! Event loops driving the engines from input lines and tickers.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::{parse, App, Flow, InputError};
use crate::cli::Display;
use crate::timer::{
    Clock, CountdownEngine, CountdownEvent, StopwatchEngine, Ticker, COUNTDOWN_PERIOD,
    STOPWATCH_PERIOD,
};
use crate::types::Mode;

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_prompt<C: Clock + Clone, W: Write>(out: &mut W, app: &App<C>) -> io::Result<()> {
    write!(out, "{}", app.prompt())?;
    out.flush()
}

/// Runs the interactive shell until `quit` or end of input.
///
/// Each ticker is re-synced with its engine before every wait, so a ticker
/// is armed exactly while its engine runs and dropped once the timer tab
/// unmounts.
pub async fn run_shell<C, R, W>(app: &mut App<C>, input: R, out: &mut W) -> io::Result<()>
where
    C: Clock + Clone,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut countdown = Ticker::new("countdown", COUNTDOWN_PERIOD);
    let mut stopwatch = Ticker::new("stopwatch", STOPWATCH_PERIOD);

    write_lines(out, &app.banner())?;
    write_prompt(out, app)?;

    loop {
        countdown.sync(app.countdown_running());
        stopwatch.sync(app.stopwatch_running());

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break;
                };
                match parse(&line) {
                    Ok(command) => match app.handle(command) {
                        Flow::Continue(output) => write_lines(out, &output)?,
                        Flow::Quit => break,
                    },
                    Err(InputError::Empty) => {}
                    Err(e) => writeln!(out, "{}", e)?,
                }
                write_prompt(out, app)?;
            }
            _ = countdown.tick() => {
                let output = app.on_countdown_tick();
                if !output.is_empty() {
                    writeln!(out)?;
                    write_lines(out, &output)?;
                    write_prompt(out, app)?;
                }
            }
            _ = stopwatch.tick() => app.on_stopwatch_sample(),
        }
    }

    countdown.disarm();
    stopwatch.disarm();
    writeln!(out)?;
    Ok(())
}

/// Runs one countdown session in the foreground until it expires.
pub async fn run_countdown<W: Write>(countdown: &mut CountdownEngine, out: &mut W) -> io::Result<Mode> {
    countdown.start();
    let mut ticker = Ticker::new("countdown", COUNTDOWN_PERIOD);

    write!(out, "{}", Display::countdown_line(countdown))?;
    out.flush()?;

    while countdown.is_running() {
        ticker.sync(true);
        ticker.tick().await;

        let event = countdown.tick();
        write!(out, "\r{}", Display::countdown_line(countdown))?;
        out.flush()?;

        if let Some(CountdownEvent::Expired { mode }) = event {
            writeln!(out)?;
            writeln!(out, "{} session complete", mode.label())?;
            return Ok(mode);
        }
    }

    ticker.disarm();
    writeln!(out)?;
    Ok(countdown.mode())
}

/// Runs the stopwatch until a line (or end of input) arrives on `input`.
/// Returns the frozen elapsed time in milliseconds.
pub async fn run_stopwatch<C, R, W>(
    stopwatch: &mut StopwatchEngine<C>,
    input: R,
    out: &mut W,
) -> io::Result<u64>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut sampler = Ticker::new("stopwatch", STOPWATCH_PERIOD);
    stopwatch.start();

    write!(out, "{}", Display::stopwatch_line(stopwatch))?;
    out.flush()?;

    loop {
        sampler.sync(stopwatch.is_running());

        tokio::select! {
            line = lines.next_line() => {
                line?;
                stopwatch.stop();
                break;
            }
            _ = sampler.tick() => {
                stopwatch.sample();
                write!(out, "\r{}", Display::stopwatch_line(stopwatch))?;
                out.flush()?;
            }
        }
    }

    sampler.disarm();
    writeln!(out, "\r{}", Display::stopwatch_line(stopwatch))?;
    Ok(stopwatch.elapsed_ms())
}
