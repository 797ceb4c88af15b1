//! Theme and logout commands.

use std::io::{self, Write};

use container_portal_client::{Locale, PortalConfig};
use container_portal_core::Theme;

use super::{CliError, open_portal};
use crate::messages::Message;

/// Print the persisted theme.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn show_theme(config: &PortalConfig) -> Result<(), CliError> {
    let portal = open_portal(config)?;
    write_theme(&mut io::stdout().lock(), config.locale, portal.theme())?;
    Ok(())
}

/// Switch to the other theme and print it.
///
/// # Errors
///
/// Returns an error if the session file cannot be updated.
pub fn toggle_theme(config: &PortalConfig) -> Result<(), CliError> {
    let portal = open_portal(config)?;
    let theme = portal.toggle_theme()?;
    tracing::info!(%theme, "Theme changed");
    write_theme(&mut io::stdout().lock(), config.locale, theme)?;
    Ok(())
}

/// Forget the remembered phone number.
///
/// # Errors
///
/// Returns an error if the session file cannot be updated.
pub fn logout(config: &PortalConfig) -> Result<(), CliError> {
    let mut portal = open_portal(config)?;
    portal.logout()?;
    writeln!(io::stdout().lock(), "{}", Message::LoggedOut.text(config.locale))?;
    Ok(())
}

fn write_theme(out: &mut impl Write, locale: Locale, theme: Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}: {}",
        Message::ThemeLabel.text(locale),
        Message::theme(theme).text(locale)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_theme() {
        let mut out = Vec::new();
        write_theme(&mut out, Locale::English, Theme::Light).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Theme: light\n");

        let mut out = Vec::new();
        write_theme(&mut out, Locale::Hebrew, Theme::Dark).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ערכת נושא: כהה\n");
    }
}
