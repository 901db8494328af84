//! Show command: render a single frame to stdout and exit.

use anyhow::Result;
use tracing::{debug, info_span};

use annum_progress::GridModel;

use crate::cli::ShowArgs;
use crate::clock::{self, Clock, FixedClock, SystemClock};
use crate::config;
use crate::render;

/// Render one frame for now (or for `--date`) and print it.
pub fn run(args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show").entered();

    let (path, explicit) = config::resolve_path(args.config.as_deref());
    let cfg = config::load(path, explicit)?;
    let mut opts = cfg.render_options(args.compact)?;
    if args.no_color {
        opts.color = false;
    }

    let moment_source: Box<dyn Clock> = match args.date {
        Some(date) => Box::new(FixedClock::at_noon(date)?),
        None => Box::new(SystemClock),
    };
    let now = moment_source.now();

    let today = clock::day_of_year(&now)?;
    debug!(
        year = today.year(),
        doy = today.get(),
        len = today.year_len(),
        "computed day of year"
    );

    let model = GridModel::compute(today);
    let frame = render::frame(
        &clock::time_label(&now),
        &clock::date_label(&now),
        &model,
        &opts,
    );
    print!("{frame}");
    Ok(())
}
