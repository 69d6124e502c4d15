//! Canonical logical keys for the upstream endpoints.
//!
//! Defaults are applied before the key is built, so an omitted parameter and
//! its explicit default share one cache entry.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::Error;

pub const DEFAULT_TIME_ZONE: &str = "Europe/Paris";
pub const LEAGUE_TYPE: &str = "league";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeagueTab {
    #[default]
    Overview,
    Table,
    Matches,
    Stats,
}

impl LeagueTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueTab::Overview => "overview",
            LeagueTab::Table => "table",
            LeagueTab::Matches => "matches",
            LeagueTab::Stats => "stats",
        }
    }
}

impl fmt::Display for LeagueTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeagueTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(LeagueTab::Overview),
            "table" => Ok(LeagueTab::Table),
            "matches" => Ok(LeagueTab::Matches),
            "stats" => Ok(LeagueTab::Stats),
            _ => Err(Error::InvalidParameter {
                name: "tab",
                value: s.to_string(),
            }),
        }
    }
}

/// Parameters of the league endpoint, as received from a query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LeagueQuery {
    pub id: Option<String>,
    pub tab: Option<String>,
    #[serde(rename = "timeZone")]
    pub time_zone: Option<String>,
}

impl LeagueQuery {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_tab(mut self, tab: LeagueTab) -> Self {
        self.tab = Some(tab.to_string());
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// `leagues?id={id}&tab={tab}&type=league&timeZone={timeZone}`
    pub fn key(&self) -> Result<String, Error> {
        let id = required_id(self.id.as_deref(), "id")?;
        let tab = match self.tab.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => LeagueTab::default(),
        };
        let time_zone = time_zone_or_default(self.time_zone.as_deref())?;
        Ok(format!(
            "leagues?id={id}&tab={tab}&type={LEAGUE_TYPE}&timeZone={time_zone}"
        ))
    }
}

/// Parameters of the match details endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchDetailsQuery {
    #[serde(rename = "matchId", alias = "id")]
    pub id: Option<String>,
    #[serde(rename = "timeZone")]
    pub time_zone: Option<String>,
}

impl MatchDetailsQuery {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// `matchDetails?matchId={id}&timeZone={timeZone}`
    pub fn key(&self) -> Result<String, Error> {
        let id = required_id(self.id.as_deref(), "matchId")?;
        let time_zone = time_zone_or_default(self.time_zone.as_deref())?;
        Ok(format!("matchDetails?matchId={id}&timeZone={time_zone}"))
    }
}

fn required_id<'a>(id: Option<&'a str>, name: &'static str) -> Result<&'a str, Error> {
    let id = id.map(str::trim).unwrap_or_default();
    if id.is_empty() {
        return Err(Error::MissingParameter(name));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(Error::InvalidParameter {
            name,
            value: id.to_string(),
        });
    }
    Ok(id)
}

fn time_zone_or_default(time_zone: Option<&str>) -> Result<&str, Error> {
    match time_zone.map(str::trim) {
        None | Some("") => Ok(DEFAULT_TIME_ZONE),
        Some(tz) if tz.chars().any(|c| c.is_whitespace() || c == '&' || c == '?' || c == '#') => {
            Err(Error::InvalidParameter {
                name: "timeZone",
                value: tz.to_string(),
            })
        }
        Some(tz) => Ok(tz),
    }
}
