//! Watch command: the live widget loop.
//!
//! Two independent periodic tasks share a current-thread runtime: one
//! refreshes the clock surface, one checks for the midnight rollover and
//! rebuilds the grid. Each pass runs to completion before the next tick can
//! fire, and Ctrl-C tears the terminal back down.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Timelike};
use crossterm::{cursor, execute, terminal};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use annum_progress::GridModel;

use crate::cli::WatchArgs;
use crate::clock::{self, Clock, SystemClock};
use crate::config;
use crate::render::{self, RenderOptions};

/// Run the widget until interrupted.
pub fn run(args: WatchArgs) -> Result<()> {
    let (path, explicit) = config::resolve_path(args.config.as_deref());
    let cfg = config::load(path, explicit)?;
    let opts = cfg.render_options(args.compact)?;
    let clock_period = Duration::from_secs(cfg.refresh.clock_secs);
    let rollover_period = Duration::from_secs(cfg.refresh.rollover_secs);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;

    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
        .context("failed to enter alternate screen")?;

    let result = runtime.block_on(watch_loop(
        &SystemClock,
        &opts,
        clock_period,
        rollover_period,
    ));

    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)
        .context("failed to restore terminal")?;
    result
}

async fn watch_loop(
    moment_source: &dyn Clock,
    opts: &RenderOptions,
    clock_period: Duration,
    rollover_period: Duration,
) -> Result<()> {
    let now = moment_source.now();
    let mut model = GridModel::compute(clock::day_of_year(&now)?);
    draw(&now, &model, opts)?;
    info!(year = model.year(), "widget started");

    let start = time::Instant::now();
    let mut clock_tick = time::interval_at(start + clock_period, clock_period);
    let mut rollover_tick = time::interval_at(start + rollover_period, rollover_period);
    // A delayed or suspended process skips missed checks, no catch-up.
    clock_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    rollover_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = clock_tick.tick() => {
                let now = moment_source.now();
                draw(&now, &model, opts)?;
            }
            _ = rollover_tick.tick() => {
                let now = moment_source.now();
                if rollover_due(&now) {
                    model = GridModel::compute(clock::day_of_year(&now)?);
                    draw(&now, &model, opts)?;
                    info!(
                        year = model.year(),
                        day = model.progress().day_of_year(),
                        "rolled over"
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                debug!("shutdown requested");
                return Ok(());
            }
        }
    }
}

/// True exactly at the top of the day on a minute-resolution clock.
fn rollover_due(now: &DateTime<Local>) -> bool {
    now.hour() == 0 && now.minute() == 0
}

/// Replaces the whole frame on the alternate screen.
fn draw(now: &DateTime<Local>, model: &GridModel, opts: &RenderOptions) -> Result<()> {
    let frame = render::frame(
        &clock::time_label(now),
        &clock::date_label(now),
        model,
        opts,
    );
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .context("failed to clear frame surface")?;
    write!(stdout, "{frame}").context("failed to write frame")?;
    stdout.flush().context("failed to flush frame")?;
    Ok(())
}
