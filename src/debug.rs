use itertools::Itertools;
use procr_ansi_term::{Color, Style};
use std::fmt;

use crate::{
    line::{Line, LineKind},
    point::Point,
};

pub const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);
pub const STYLE_ITEM: Style = Style::new().fg(Color::Cyan);

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_BLUE: Color = Color::Fixed(27);
pub const COLOR_ORANGE: Color = Color::Fixed(208);

pub const HORIZONTAL_LINE: Style = Style::new().fg(COLOR_GREEN);
pub const VERTICAL_LINE: Style = Style::new().fg(COLOR_BLUE);
pub const SLANTED_LINE: Style = Style::new().fg(COLOR_ORANGE);

#[inline]
pub fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Horizontal => HORIZONTAL_LINE,
        LineKind::Vertical => VERTICAL_LINE,
        LineKind::Slanted => SLANTED_LINE,
    }
}

pub fn debug_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

#[macro_export]
macro_rules! info_label {
    ($label:expr) => {
        $crate::debug::STYLE_LABEL.paint(format!("{}:", $label))
    };
}

#[macro_export]
macro_rules! emit_info {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::info!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!("{}", $style.paint(format!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!($fmt, $($rest)*);
    };
}

#[macro_export]
macro_rules! dbg_line {
    ($line:expr) => {
        $crate::debug::debug_with($crate::debug::debug_line($line))
    };
}

pub fn debug_line<'a>(
    line: &'a Line,
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + 'a {
    move |f| {
        write!(f, "{}", line_style(line.kind()).paint(format!("{:?}", line)))
    }
}

#[macro_export]
macro_rules! dbg_lines {
    ($lines:expr) => {
        $crate::debug::debug_with($crate::debug::debug_lines($lines))
    };
}

pub fn debug_lines<'a>(
    lines: &'a [Line],
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + 'a {
    move |f| {
        writeln!(f)?;
        for (ix, line) in lines.iter().enumerate() {
            writeln!(
                f,
                "  {}{:?}",
                STYLE_LABEL.paint(format!("[{}] ", ix)),
                debug_with(debug_line(line))
            )?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! dbg_points {
    ($points:expr) => {
        $crate::debug::debug_with($crate::debug::debug_points($points))
    };
}

pub fn debug_points<'a>(
    points: &'a [Point],
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + 'a {
    move |f| {
        write!(
            f,
            "[{}]",
            STYLE_ITEM.paint(points.iter().map(|p| p.to_string()).join(", "))
        )
    }
}
