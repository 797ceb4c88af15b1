//! User-facing text in Hebrew and English.

use container_portal_client::Locale;
use container_portal_core::Theme;

/// Every fixed string the CLI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    EmptyPhone,
    NotFound,
    ConnectionError,
    Submitting,
    Greeting,
    ContainersInUse,
    OverdueContainers,
    Notifications,
    ColumnContainer,
    ColumnAddress,
    ColumnDays,
    ColumnStatus,
    BadgeActive,
    BadgeOverdue,
    ContainerTitle,
    LabelCustomer,
    LabelAddress,
    LabelRentalDate,
    LabelStatus,
    LabelNotes,
    NoNotes,
    ContainerNotFound,
    LoggedOut,
    ThemeLabel,
    ThemeLight,
    ThemeDark,
    SessionError,
    ConfigError,
    OutputError,
}

impl Message {
    /// Text of the message in `locale`.
    #[must_use]
    pub const fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Hebrew => self.hebrew(),
            Locale::English => self.english(),
        }
    }

    const fn hebrew(self) -> &'static str {
        match self {
            Self::EmptyPhone => "אנא הזן מספר טלפון.",
            Self::NotFound => "מספר טלפון לא נמצא או אין לו מכולות פעילות.",
            Self::ConnectionError => "שגיאה בחיבור לשרת.",
            Self::Submitting => "מתחבר...",
            Self::Greeting => "שלום",
            Self::ContainersInUse => "מכולות בשימוש",
            Self::OverdueContainers => "מכולות חורגות",
            Self::Notifications => "התראות",
            Self::ColumnContainer => "מספר מכולה",
            Self::ColumnAddress => "כתובת",
            Self::ColumnDays => "ימים",
            Self::ColumnStatus => "סטטוס",
            Self::BadgeActive => "פעיל",
            Self::BadgeOverdue => "חורג",
            Self::ContainerTitle => "מכולה",
            Self::LabelCustomer => "לקוח",
            Self::LabelAddress => "כתובת",
            Self::LabelRentalDate => "תאריך השכרה",
            Self::LabelStatus => "סטטוס",
            Self::LabelNotes => "הערות",
            Self::NoNotes => "אין הערות",
            Self::ContainerNotFound => "מכולה לא נמצאה.",
            Self::LoggedOut => "התנתקת.",
            Self::ThemeLabel => "ערכת נושא",
            Self::ThemeLight => "בהירה",
            Self::ThemeDark => "כהה",
            Self::SessionError => "שגיאה בשמירת ההגדרות.",
            Self::ConfigError => "שגיאה בהגדרות.",
            Self::OutputError => "שגיאה בהצגת הפלט.",
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::EmptyPhone => "Please enter a phone number.",
            Self::NotFound => "Phone number not found or it has no active containers.",
            Self::ConnectionError => "Error connecting to the server.",
            Self::Submitting => "Connecting...",
            Self::Greeting => "Hello",
            Self::ContainersInUse => "Containers in use",
            Self::OverdueContainers => "Overdue containers",
            Self::Notifications => "Notifications",
            Self::ColumnContainer => "Container",
            Self::ColumnAddress => "Address",
            Self::ColumnDays => "Days",
            Self::ColumnStatus => "Status",
            Self::BadgeActive => "Active",
            Self::BadgeOverdue => "Overdue",
            Self::ContainerTitle => "Container",
            Self::LabelCustomer => "Customer",
            Self::LabelAddress => "Address",
            Self::LabelRentalDate => "Rental date",
            Self::LabelStatus => "Status",
            Self::LabelNotes => "Notes",
            Self::NoNotes => "No notes",
            Self::ContainerNotFound => "Container not found.",
            Self::LoggedOut => "Logged out.",
            Self::ThemeLabel => "Theme",
            Self::ThemeLight => "light",
            Self::ThemeDark => "dark",
            Self::SessionError => "Could not save settings.",
            Self::ConfigError => "Invalid configuration.",
            Self::OutputError => "Could not write output.",
        }
    }

    /// Name of a theme.
    #[must_use]
    pub const fn theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::ThemeLight,
            Theme::Dark => Self::ThemeDark,
        }
    }
}
