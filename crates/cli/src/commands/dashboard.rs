//! Login, dashboard and container detail commands.
//!
//! # Usage
//!
//! ```bash
//! # Log in and show the dashboard
//! portal login 0501234567
//!
//! # Show the dashboard again with the remembered phone number
//! portal dashboard
//!
//! # Show one container
//! portal show C-17
//! ```

use std::io::{self, Write};

use chrono::Utc;
use container_portal_client::{
    Locale, LoginError, Portal, PortalConfig, RecordSource, SessionStore,
};
use container_portal_core::{ContainerDetails, Dashboard, RecordSet};

use super::{CliError, open_portal, status, style};
use crate::messages::Message;
use crate::render;

/// Log in with `phone`, or with the remembered phone number when `None`,
/// and render the dashboard.
///
/// # Errors
///
/// Returns an error if the login fails or output cannot be written.
pub async fn login(config: &PortalConfig, phone: Option<&str>) -> Result<(), CliError> {
    let mut portal = open_portal(config)?;
    let theme = portal.theme();

    let records = enter(&mut portal, config.locale, phone).await?;
    let dashboard = Dashboard::build(records, Utc::now());

    render::dashboard(&mut io::stdout().lock(), &dashboard, style(config, theme))?;
    Ok(())
}

/// Show the full details of one container.
///
/// # Errors
///
/// Returns `CliError::ContainerNotFound` if the customer has no such
/// container, or an error if the login fails.
pub async fn show(config: &PortalConfig, container_id: &str) -> Result<(), CliError> {
    let mut portal = open_portal(config)?;
    let theme = portal.theme();

    let records = enter(&mut portal, config.locale, None).await?;
    let dashboard = Dashboard::build(records, Utc::now());
    let details = find_details(&dashboard, container_id)?;

    let mut out = io::stdout().lock();
    render::details(&mut out, &details, style(config, theme))?;
    out.flush()?;
    Ok(())
}

/// Run the login flow and return the customer's records.
///
/// Without `phone` the remembered number is used. If there is none, this
/// fails with [`LoginError::EmptyPhone`], the same as a blank submission.
async fn enter<'p, G, S>(
    portal: &'p mut Portal<G, S>,
    locale: Locale,
    phone: Option<&str>,
) -> Result<&'p RecordSet, CliError>
where
    G: RecordSource,
    S: SessionStore,
{
    let remembered = portal.session().ok().and_then(|s| s.phone).is_some();
    if phone.map_or(remembered, |p| !p.trim().is_empty()) {
        status(locale, Message::Submitting)?;
    }

    let result = match phone {
        Some(phone) => portal.login(phone).await,
        None => portal
            .resume()
            .await
            .unwrap_or(Err(LoginError::EmptyPhone)),
    };

    Ok(result?)
}

fn find_details<'a>(
    dashboard: &Dashboard<'a>,
    container_id: &str,
) -> Result<ContainerDetails<'a>, CliError> {
    dashboard
        .details(container_id)
        .ok_or_else(|| CliError::ContainerNotFound(container_id.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use container_portal_client::{Lookup, MemorySessionStore, Session};
    use container_portal_core::{ContainerRecord, ContainerStatus, Phone};

    use super::*;

    /// Answers every lookup with the same records.
    #[derive(Default)]
    struct StaticSource {
        records: RecordSet,
        calls: AtomicUsize,
    }

    impl RecordSource for StaticSource {
        async fn containers_by_phone(&self, _phone: &Phone) -> Lookup {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Lookup::Found(self.records.clone())
        }
    }

    fn portal(phone: Option<&str>) -> Portal<StaticSource, MemorySessionStore> {
        let records = RecordSet::new(vec![ContainerRecord {
            customer_name: "Dana".to_owned(),
            container_id: "C-1".to_owned(),
            address: "1 Herzl St".to_owned(),
            order_date: Some(Utc::now()),
            status: ContainerStatus::new("active"),
            notes: None,
        }]);
        let session = Session {
            phone: phone.map(|p| Phone::parse(p).unwrap()),
            ..Session::default()
        };
        Portal::new(
            StaticSource {
                records,
                ..StaticSource::default()
            },
            MemorySessionStore::new(session),
        )
    }

    #[tokio::test]
    async fn test_no_remembered_phone_asks_for_one() {
        let mut portal = portal(None);

        let err = enter(&mut portal, Locale::English, None).await.unwrap_err();
        assert!(matches!(err, CliError::Login(LoginError::EmptyPhone)));
        assert_eq!(err.message(), Message::EmptyPhone);
    }

    #[tokio::test]
    async fn test_blank_phone_asks_for_one() {
        let mut portal = portal(Some("0501234567"));

        let err = enter(&mut portal, Locale::English, Some("  ")).await.unwrap_err();
        assert_eq!(err.message(), Message::EmptyPhone);
    }

    #[tokio::test]
    async fn test_remembered_phone_is_used() {
        let mut portal = portal(Some("0501234567"));

        let records = enter(&mut portal, Locale::English, None).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_container() {
        let mut portal = portal(Some("0501234567"));
        let records = enter(&mut portal, Locale::English, None).await.unwrap();
        let dashboard = Dashboard::build(records, Utc::now());

        assert_eq!(find_details(&dashboard, "C-1").unwrap().container_id, "C-1");

        let err = find_details(&dashboard, "C-9").unwrap_err();
        assert!(matches!(err, CliError::ContainerNotFound(ref id) if id == "C-9"));
        assert_eq!(err.message(), Message::ContainerNotFound);
    }
}
