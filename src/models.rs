use crate::errors::MoodError;
use crate::recommendations::{Recommendation, RecommendationSet};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A mood rating on the 1 (very sad) to 5 (very happy) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, MoodError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(MoodError::Invalid(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very Sad",
            2 => "Sad",
            3 => "Neutral",
            4 => "Good",
            _ => "Very Happy",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self.0 {
            1 => "😢",
            2 => "😞",
            3 => "😐",
            4 => "🙂",
            _ => "😊",
        }
    }

    pub fn all() -> impl Iterator<Item = Mood> {
        (Self::MIN..=Self::MAX).map(Mood)
    }
}

impl TryFrom<i64> for Mood {
    type Error = MoodError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
}

impl MoodEntry {
    /// Stamps the entry with the current time, truncated to what the stored
    /// form can represent.
    pub fn new(mood: Mood, note: impl Into<String>) -> Self {
        Self::at(Utc::now(), mood, note)
    }

    pub fn at(date: DateTime<Utc>, mood: Mood, note: impl Into<String>) -> Self {
        Self {
            date: date.trunc_subsecs(3),
            mood,
            note: note.into(),
        }
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitMoodRequest {
    pub mood: Option<i64>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub label: String,
    pub mood: u8,
    pub mood_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub total_checkins: usize,
    pub average_mood: Option<f64>,
    pub days_tracking: i64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsView {
    pub set: RecommendationSet,
    pub average: f64,
    pub items: &'static [Recommendation],
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: SummaryStats,
    pub trend: Vec<TrendPoint>,
    pub recommendations: Option<RecommendationsView>,
}
