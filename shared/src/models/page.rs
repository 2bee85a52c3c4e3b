//! Sidebar navigation and static page content

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dashboard pages, in sidebar order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Dashboard,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Dashboard, Page::About];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::About => "about",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Smart AQI Monitoring System",
            Page::Dashboard => "AQI Dashboard",
            Page::About => "About this Project",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Home => write!(f, "Home"),
            Page::Dashboard => write!(f, "Dashboard"),
            Page::About => write!(f, "About"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl std::str::FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Sidebar entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: String,
}

pub fn navigation() -> Vec<NavEntry> {
    Page::ALL
        .into_iter()
        .map(|page| NavEntry {
            page,
            label: page.to_string(),
        })
        .collect()
}

/// Title and markdown body of a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContent {
    pub page: Page,
    pub title: String,
    pub body: String,
}

const HOME_BODY: &str = "\
Air pollution is one of the biggest threats to human health today.
Our **Smart AQI Monitoring System** uses IoT devices and cloud integration to monitor real-time air quality data.

This prototype shows how AQI can be visualized on a dashboard.";

const DASHBOARD_BODY: &str = "Select a city to see AQI details.";

const ABOUT_BODY: &str = "\
This **prototype dashboard** demonstrates how Air Quality Index (AQI)
can be monitored and visualized in real-time.

### Workflow:
- **Sensor** → MQ135 + ESP32
- **Communication** → 4G SIM / LoRaWAN (MQTT protocol)
- **Cloud** → AWS IoT Core + Lambda + DynamoDB
- **Visualization** → Web Dashboard

*Note: This prototype uses random dummy data for demonstration purposes.*";

pub fn page_content(page: Page) -> PageContent {
    let body = match page {
        Page::Home => HOME_BODY,
        Page::Dashboard => DASHBOARD_BODY,
        Page::About => ABOUT_BODY,
    };
    PageContent {
        page,
        title: page.title().to_string(),
        body: body.to_string(),
    }
}
