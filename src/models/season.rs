use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// UCI bike-sharing season code (1 = spring .. 4 = winter)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl FromStr for Season {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Season::from_code(code).ok_or_else(|| {
                DashboardError::InvalidFormat(format!("Invalid season code: '{}'", trimmed))
            });
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "spring" | "springer" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(DashboardError::InvalidFormat(format!(
                "Invalid season: '{}'",
                trimmed
            ))),
        }
    }
}

impl TryFrom<String> for Season {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Time-of-day bucket. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeOfDay {
    Morning,
    Day,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Day,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
    ];

    /// Bucket for an hour of day: Morning 05-10, Day 11-14, Afternoon 15-18,
    /// Evening 19-04.
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            5..=10 => TimeOfDay::Morning,
            11..=14 => TimeOfDay::Day,
            15..=18 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Day => "Day",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "day" => Ok(TimeOfDay::Day),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" | "night" => Ok(TimeOfDay::Evening),
            _ => Err(DashboardError::InvalidFormat(format!(
                "Invalid time of day: '{}'",
                s.trim()
            ))),
        }
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parsing() {
        assert_eq!("Spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!(" fall ".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("Springer".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("4".parse::<Season>().unwrap(), Season::Winter);
        assert!("5".parse::<Season>().is_err());
        assert!("Monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_time_of_day_from_hour() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }

    #[test]
    fn test_time_of_day_order_is_categorical() {
        let mut buckets = vec![
            TimeOfDay::Evening,
            TimeOfDay::Afternoon,
            TimeOfDay::Morning,
            TimeOfDay::Day,
        ];
        buckets.sort();
        assert_eq!(buckets, TimeOfDay::ALL.to_vec());
    }
}
