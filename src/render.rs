//! Text-frame rendering: the adapter between the pure grid model and the
//! terminal surface.

use crossterm::style::Stylize;

use annum_progress::{DayState, GridModel};

/// Frame layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Clock, date, grid, and stats.
    Full,
    /// Clock and date only.
    Compact,
}

/// Appearance of the rendered frame.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Markers per grid row.
    pub columns: usize,
    /// Glyph for days already passed.
    pub glyph_elapsed: char,
    /// Glyph for today.
    pub glyph_current: char,
    /// Glyph for days still to come.
    pub glyph_upcoming: char,
    /// ANSI colour on or off.
    pub color: bool,
    /// Frame layout.
    pub layout: Layout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: 32,
            glyph_elapsed: '●',
            glyph_current: '◉',
            glyph_upcoming: '○',
            color: true,
            layout: Layout::Full,
        }
    }
}

/// Builds the complete text frame for one render pass.
///
/// The frame fully replaces whatever was on the surface before, so the same
/// inputs always produce the same screen.
pub fn frame(time: &str, date: &str, model: &GridModel, opts: &RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    if opts.color {
        lines.push(time.bold().to_string());
        lines.push(date.dark_grey().to_string());
    } else {
        lines.push(time.to_string());
        lines.push(date.to_string());
    }

    if opts.layout == Layout::Full {
        lines.push(String::new());
        lines.extend(grid_lines(model, opts));
        lines.push(String::new());

        let progress = model.progress();
        lines.push(stat_line(
            "Days Left",
            &progress.days_left().to_string(),
            opts,
        ));
        lines.push(stat_line("Progress", &progress.percent_label(), opts));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Grid rows: one glyph per day, wrapped at the configured column count.
fn grid_lines(model: &GridModel, opts: &RenderOptions) -> Vec<String> {
    model
        .markers()
        .chunks(opts.columns)
        .map(|row| {
            row.iter()
                .map(|marker| glyph(marker.state(), opts))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn glyph(state: DayState, opts: &RenderOptions) -> String {
    let ch = match state {
        DayState::Elapsed => opts.glyph_elapsed,
        DayState::Current => opts.glyph_current,
        DayState::Upcoming => opts.glyph_upcoming,
    };
    if !opts.color {
        return ch.to_string();
    }
    match state {
        DayState::Elapsed => ch.white().to_string(),
        DayState::Current => ch.red().to_string(),
        DayState::Upcoming => ch.dark_grey().to_string(),
    }
}

fn stat_line(label: &str, value: &str, opts: &RenderOptions) -> String {
    let padded = format!("{label:<10}");
    if opts.color {
        format!("{} {}", padded.dark_grey(), value.red())
    } else {
        format!("{padded} {value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annum_calendar::DayOfYear;

    fn plain_opts() -> RenderOptions {
        RenderOptions {
            color: false,
            ..RenderOptions::default()
        }
    }

    fn model(year: i32, doy: u16) -> GridModel {
        GridModel::compute(DayOfYear::new(year, doy).unwrap())
    }

    #[test]
    fn full_frame_shape() {
        let out = frame("14:05", "Mon, Jan 1", &model(2024, 1), &plain_opts());
        let lines: Vec<&str> = out.lines().collect();
        // 2 header + blank + 12 grid rows (366 at 32/row) + blank + 2 stats.
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "14:05");
        assert_eq!(lines[1], "Mon, Jan 1");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn one_glyph_per_day() {
        let out = frame("00:00", "Mon, Jan 1", &model(2024, 1), &plain_opts());
        assert_eq!(out.matches('◉').count(), 1);
        assert_eq!(out.matches('○').count(), 365);
        assert_eq!(out.matches('●').count(), 0);
    }

    #[test]
    fn elapsed_days_fill_in() {
        let out = frame("12:00", "Tue, Apr 9", &model(2023, 99), &plain_opts());
        assert_eq!(out.matches('●').count(), 98);
        assert_eq!(out.matches('◉').count(), 1);
        assert_eq!(out.matches('○').count(), 266);
    }

    #[test]
    fn stats_footer() {
        let out = frame("00:00", "Mon, Jan 1", &model(2024, 1), &plain_opts());
        assert!(out.contains("Days Left  365"));
        assert!(out.contains("Progress   0.3%"));
    }

    #[test]
    fn compact_layout_skips_the_grid() {
        let opts = RenderOptions {
            layout: Layout::Compact,
            ..plain_opts()
        };
        let out = frame("23:59", "Sun, Dec 31", &model(2023, 365), &opts);
        assert_eq!(out, "23:59\nSun, Dec 31\n");
    }

    #[test]
    fn column_count_controls_wrapping() {
        let opts = RenderOptions {
            columns: 100,
            ..plain_opts()
        };
        let out = frame("12:00", "Mon, Jul 1", &model(2024, 183), &opts);
        let grid_rows = out
            .lines()
            .filter(|l| l.contains('●') || l.contains('◉') || l.contains('○'))
            .count();
        assert_eq!(grid_rows, 4); // 366 at 100 per row
    }

    #[test]
    fn colour_emits_ansi_sequences() {
        let opts = RenderOptions::default();
        let out = frame("12:00", "Mon, Jul 1", &model(2024, 183), &opts);
        assert!(out.contains("\x1b["));
    }

    #[test]
    fn custom_glyphs() {
        let opts = RenderOptions {
            glyph_elapsed: '#',
            glyph_current: '@',
            glyph_upcoming: '.',
            ..plain_opts()
        };
        let out = frame("12:00", "Sat, Feb 10", &model(2024, 41), &opts);
        assert_eq!(out.matches('#').count(), 40);
        assert_eq!(out.matches('@').count(), 1);
        assert_eq!(out.matches('.').count(), 325);
    }
}
