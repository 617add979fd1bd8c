use crate::models::{MoodEntry, RecommendationsView};
use crate::stats::{average, recent_window};
use serde::Serialize;

pub const RECOMMENDATION_WINDOW: usize = 7;

#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub action: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSet {
    LowMood,
    Neutral,
    Positive,
}

/// Upper bounds are inclusive and checked in order; anything above the last
/// bound falls through to `Positive`.
const THRESHOLDS: [(f64, RecommendationSet); 2] = [
    (2.0, RecommendationSet::LowMood),
    (3.5, RecommendationSet::Neutral),
];

impl RecommendationSet {
    pub fn for_average(average: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(upper, _)| average <= *upper)
            .map(|(_, set)| *set)
            .unwrap_or(RecommendationSet::Positive)
    }

    pub fn items(self) -> &'static [Recommendation] {
        match self {
            RecommendationSet::LowMood => &LOW_MOOD,
            RecommendationSet::Neutral => &NEUTRAL,
            RecommendationSet::Positive => &POSITIVE,
        }
    }
}

/// Suggestions for the most recent week of check-ins, or `None` before the
/// first one.
pub fn recommend(entries: &[MoodEntry]) -> Option<RecommendationsView> {
    let recent = recent_window(entries, RECOMMENDATION_WINDOW);
    let average = average(recent)?;
    let set = RecommendationSet::for_average(average);
    Some(RecommendationsView {
        set,
        average,
        items: set.items(),
    })
}

const LOW_MOOD: [Recommendation; 3] = [
    Recommendation {
        title: "Take a Gentle Walk",
        description: "Fresh air and light movement can help lift your spirits",
        icon: "🚶‍♀️",
        action: "Start a 10-minute walk",
        color: "hsl(var(--mood-sad))",
    },
    Recommendation {
        title: "Connect with Someone",
        description: "Reach out to a friend, family member, or counselor",
        icon: "💬",
        action: "Send a message",
        color: "hsl(var(--primary))",
    },
    Recommendation {
        title: "Practice Self-Compassion",
        description: "Be kind to yourself during difficult times",
        icon: "💝",
        action: "Try a meditation",
        color: "hsl(var(--accent))",
    },
];

const NEUTRAL: [Recommendation; 3] = [
    Recommendation {
        title: "Gratitude Practice",
        description: "Write down 3 things you're grateful for today",
        icon: "📝",
        action: "Start journaling",
        color: "hsl(var(--mood-neutral))",
    },
    Recommendation {
        title: "Listen to Music",
        description: "Put on your favorite songs to boost your mood",
        icon: "🎵",
        action: "Play music",
        color: "hsl(var(--secondary))",
    },
    Recommendation {
        title: "Breathing Exercise",
        description: "Try the 4-7-8 breathing technique for relaxation",
        icon: "🫁",
        action: "Start breathing",
        color: "hsl(var(--primary))",
    },
];

const POSITIVE: [Recommendation; 3] = [
    Recommendation {
        title: "Share Your Joy",
        description: "Your positive energy can brighten someone else's day",
        icon: "✨",
        action: "Spread positivity",
        color: "hsl(var(--mood-happy))",
    },
    Recommendation {
        title: "Try Something New",
        description: "Channel your good mood into a creative activity",
        icon: "🎨",
        action: "Get creative",
        color: "hsl(var(--accent))",
    },
    Recommendation {
        title: "Help Others",
        description: "Consider volunteering or helping a friend",
        icon: "🤝",
        action: "Find ways to help",
        color: "hsl(var(--secondary))",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;

    fn entries(moods: &[i64]) -> Vec<MoodEntry> {
        moods
            .iter()
            .map(|&m| MoodEntry::new(Mood::new(m).unwrap(), ""))
            .collect()
    }

    #[test]
    fn thresholds_are_inclusive_on_the_low_side() {
        assert_eq!(RecommendationSet::for_average(1.0), RecommendationSet::LowMood);
        assert_eq!(RecommendationSet::for_average(2.0), RecommendationSet::LowMood);
        assert_eq!(RecommendationSet::for_average(2.1), RecommendationSet::Neutral);
        assert_eq!(RecommendationSet::for_average(3.5), RecommendationSet::Neutral);
        assert_eq!(RecommendationSet::for_average(3.6), RecommendationSet::Positive);
        assert_eq!(RecommendationSet::for_average(5.0), RecommendationSet::Positive);
    }

    #[test]
    fn every_set_has_three_items() {
        for set in [
            RecommendationSet::LowMood,
            RecommendationSet::Neutral,
            RecommendationSet::Positive,
        ] {
            assert_eq!(set.items().len(), 3);
        }
        assert_eq!(RecommendationSet::LowMood.items()[0].title, "Take a Gentle Walk");
        assert_eq!(RecommendationSet::Positive.items()[2].action, "Find ways to help");
        assert_eq!(RecommendationSet::LowMood.items()[0].color, "hsl(var(--mood-sad))");
        assert_eq!(RecommendationSet::Neutral.items()[1].color, "hsl(var(--secondary))");
    }

    #[test]
    fn recommend_is_none_without_history() {
        assert!(recommend(&[]).is_none());
    }

    #[test]
    fn recommend_only_considers_last_week() {
        // eight lows followed by seven highs: the lows fall outside the window
        let mut moods = vec![1; 8];
        moods.extend([5; 7]);
        let view = recommend(&entries(&moods)).unwrap();
        assert_eq!(view.set, RecommendationSet::Positive);
        assert_eq!(view.average, 5.0);
    }

    #[test]
    fn recommend_picks_neutral_for_mixed_week() {
        let view = recommend(&entries(&[2, 3, 4])).unwrap();
        assert_eq!(view.set, RecommendationSet::Neutral);
        assert_eq!(view.items[0].title, "Gratitude Practice");
    }
}
