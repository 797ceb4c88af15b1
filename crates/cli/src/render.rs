//! Terminal rendering of the dashboard and the container detail view.

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Cell, Color, Table};
use container_portal_client::Locale;
use container_portal_core::{ContainerDetails, Dashboard, RowStatus, Theme};

use crate::messages::Message;

/// Rendering settings.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub locale: Locale,
    pub theme: Theme,
    /// Emit ANSI colors. Off when output is not a terminal.
    pub color: bool,
}

impl Style {
    fn text(self, message: Message) -> &'static str {
        message.text(self.locale)
    }

    const fn header_color(self) -> Color {
        match self.theme {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::DarkBlue,
        }
    }

    const fn badge_color(self, status: RowStatus) -> Color {
        match (self.theme, status) {
            (Theme::Dark, RowStatus::Overdue) => Color::Red,
            (Theme::Light, RowStatus::Overdue) => Color::DarkRed,
            (Theme::Dark, RowStatus::Active) => Color::Green,
            (Theme::Light, RowStatus::Active) => Color::DarkGreen,
        }
    }

    fn table(self) -> Table {
        let mut table = Table::new();
        match self.theme {
            Theme::Dark => table.load_preset(UTF8_FULL),
            Theme::Light => table.load_preset(UTF8_FULL_CONDENSED),
        };
        if !self.color {
            table.force_no_tty();
        }
        table
    }
}

/// Order date as `D.M.YYYY` in the local timezone.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%-d.%-m.%Y").to_string()
}

/// Render the summary and the table of active containers.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn dashboard(out: &mut impl Write, dashboard: &Dashboard<'_>, style: Style) -> io::Result<()> {
    writeln!(
        out,
        "{}, {}",
        style.text(Message::Greeting),
        dashboard.customer_name()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{}: {}",
        style.text(Message::ContainersInUse),
        dashboard.active_count()
    )?;
    writeln!(
        out,
        "{}: {}",
        style.text(Message::OverdueContainers),
        dashboard.overdue_count()
    )?;
    writeln!(
        out,
        "{}: {}",
        style.text(Message::Notifications),
        dashboard.notification_badge()
    )?;

    if dashboard.rows().is_empty() {
        return Ok(());
    }

    let mut table = style.table();
    table.set_header(
        [
            Message::ColumnContainer,
            Message::ColumnAddress,
            Message::ColumnDays,
            Message::ColumnStatus,
        ]
        .map(|m| Cell::new(style.text(m)).fg(style.header_color())),
    );

    for row in dashboard.rows() {
        let badge = match row.status {
            RowStatus::Overdue => Message::BadgeOverdue,
            RowStatus::Active => Message::BadgeActive,
        };
        let days = row
            .days_passed
            .map_or_else(|| "-".to_owned(), |d| d.to_string());

        table.add_row(vec![
            Cell::new(&row.record.container_id),
            Cell::new(&row.record.address),
            Cell::new(days),
            Cell::new(style.text(badge)).fg(style.badge_color(row.status)),
        ]);
    }

    writeln!(out)?;
    writeln!(out, "{table}")
}

/// Render the full field set of one container.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn details(out: &mut impl Write, details: &ContainerDetails<'_>, style: Style) -> io::Result<()> {
    let order_date = details
        .order_date
        .map_or_else(|| "-".to_owned(), format_date);
    let notes = details.notes.unwrap_or_else(|| style.text(Message::NoNotes));

    writeln!(
        out,
        "{} {}",
        style.text(Message::ContainerTitle),
        details.container_id
    )?;

    let mut table = style.table();
    for (label, value) in [
        (Message::LabelCustomer, details.customer_name),
        (Message::LabelAddress, details.address),
        (Message::LabelRentalDate, order_date.as_str()),
        (Message::LabelStatus, details.status.as_str()),
        (Message::LabelNotes, notes),
    ] {
        table.add_row(vec![
            Cell::new(style.text(label)).fg(style.header_color()),
            Cell::new(value),
        ]);
    }

    writeln!(out, "{table}")
}
