//! Wire types returned by the dashboard web API.
//!
//! Every field is defaulted so a partially populated payload still decodes;
//! the server builds these rows straight from SQL aggregates and omits columns
//! freely.

use crate::charts::timezone::local_date_label;
use crate::consts::cli_consts::charts::UNKNOWN_LABEL;
use serde::{Deserialize, Deserializer, Serialize};

/// Payload of `GET /api/dashboard-data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub top_chats_7_days: Vec<ChatCount>,
    pub total_messages_7_days: Vec<DailyCount>,
    pub top_users_7_days: Vec<SenderCount>,
    pub top_chats_today: Vec<ChatCount>,
    pub hourly_activity_30_days: Option<Vec<HourlyCount>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatCount {
    pub chat_title: Option<String>,
    pub message_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderCount {
    pub sender_name: Option<String>,
    pub message_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyCount {
    pub day: String,
    pub message_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyCount {
    pub day: String,
    /// Hour of day, sent either as `"07"` or `7`.
    #[serde(deserialize_with = "hour_from_text_or_number")]
    pub hour: Option<u8>,
    pub message_count: u64,
}

/// One hit of `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageRecord {
    pub text: Option<String>,
    pub chat_title: Option<String>,
    pub sender_name: Option<String>,
    pub date: Option<String>,
}

impl MessageRecord {
    /// `chat_title - sender_name at <local date>`
    pub fn heading(&self) -> String {
        let chat = self.chat_title.as_deref().unwrap_or(UNKNOWN_LABEL);
        let sender = self.sender_name.as_deref().unwrap_or(UNKNOWN_LABEL);
        match self.date.as_deref() {
            Some(date) => format!("{} - {} at {}", chat, sender, local_date_label(date)),
            None => format!("{} - {}", chat, sender),
        }
    }
}

/// Payload of `GET /api/stats`, used by the older single-page dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub today_message_count: u64,
    pub seven_day_top_talker: Option<TopTalker>,
    pub seven_day_group_stats: Vec<GroupCount>,
    pub seven_day_total_stats: Vec<DateCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopTalker {
    pub sender_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupCount {
    pub chat_title: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateCount {
    pub date: String,
    pub count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HourRepr {
    Number(i64),
    Text(String),
}

fn hour_from_text_or_number<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let hour = match Option::<HourRepr>::deserialize(deserializer)? {
        Some(HourRepr::Number(n)) => u8::try_from(n).ok(),
        Some(HourRepr::Text(s)) => s.trim().parse::<u8>().ok(),
        None => None,
    };
    Ok(hour.filter(|h| *h < 24))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dashboard_payload() {
        let payload = r#"{
            "top_chats_7_days": [{"chat_title": "Rust CN", "message_count": 42}],
            "total_messages_7_days": [{"day": "2024-01-01", "message_count": 120}],
            "top_users_7_days": [{"sender_name": "alice", "message_count": 17}],
            "top_chats_today": [],
            "hourly_activity_30_days": [{"day": "2024-01-01", "hour": "07", "message_count": 3}],
            "search_results": []
        }"#;

        let snapshot: DashboardSnapshot = serde_json::from_str(payload).unwrap();
        assert_eq!(snapshot.top_chats_7_days[0].chat_title.as_deref(), Some("Rust CN"));
        assert_eq!(snapshot.total_messages_7_days[0].message_count, 120);
        assert_eq!(snapshot.top_users_7_days[0].sender_name.as_deref(), Some("alice"));
        assert!(snapshot.top_chats_today.is_empty());
        let hourly = snapshot.hourly_activity_30_days.unwrap();
        assert_eq!(hourly[0].hour, Some(7));
    }

    #[test]
    fn test_hourly_activity_is_optional() {
        let snapshot: DashboardSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, DashboardSnapshot::default());
        assert!(snapshot.hourly_activity_30_days.is_none());
    }

    #[test]
    fn test_hour_accepts_numbers_and_rejects_out_of_range() {
        let numeric: HourlyCount =
            serde_json::from_str(r#"{"day": "2024-01-01", "hour": 23, "message_count": 1}"#)
                .unwrap();
        assert_eq!(numeric.hour, Some(23));

        let too_big: HourlyCount =
            serde_json::from_str(r#"{"day": "2024-01-01", "hour": "24"}"#).unwrap();
        assert_eq!(too_big.hour, None);

        let garbage: HourlyCount =
            serde_json::from_str(r#"{"day": "2024-01-01", "hour": "noon"}"#).unwrap();
        assert_eq!(garbage.hour, None);

        let null: HourlyCount = serde_json::from_str(r#"{"hour": null}"#).unwrap();
        assert_eq!(null.hour, None);
    }

    #[test]
    fn test_decode_stats_payload() {
        let payload = r#"{
            "today_message_count": 9,
            "seven_day_top_talker": {"sender_name": "bob"},
            "seven_day_group_stats": [{"chat_title": "ops", "count": 5}],
            "seven_day_total_stats": [{"date": "2024-03-02", "count": 11}]
        }"#;
        let stats: StatsSnapshot = serde_json::from_str(payload).unwrap();
        assert_eq!(stats.today_message_count, 9);
        assert_eq!(
            stats.seven_day_top_talker.and_then(|t| t.sender_name),
            Some("bob".to_string())
        );
        assert_eq!(stats.seven_day_group_stats[0].count, 5);
        assert_eq!(stats.seven_day_total_stats[0].date, "2024-03-02");
    }

    #[test]
    fn test_decode_search_hits() {
        let payload = r#"[{"text": "hello", "chat_title": "g", "sender_name": "s", "date": "2024-01-01T08:00:00"}]"#;
        let hits: Vec<MessageRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text.as_deref(), Some("hello"));
        assert_eq!(hits[0].heading(), "g - s at 2024-01-01");
    }

    #[test]
    fn test_heading_shifts_late_utc_date_and_fills_gaps() {
        let hit = MessageRecord {
            date: Some("2024-01-01T20:30:00Z".into()),
            ..Default::default()
        };
        assert_eq!(hit.heading(), "Unknown - Unknown at 2024-01-02");
        assert_eq!(MessageRecord::default().heading(), "Unknown - Unknown");
    }
}
