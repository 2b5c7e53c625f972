//! Sample payloads served when the agent backend or the memory directory
//! cannot be reached, so the dashboard stays populated.

use crate::memory::{MemoryFile, MemoryFileType};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronSchedule {
    pub expr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJobState {
    pub next_run_at_ms: i64,
}

/// A scheduled job as reported by the agent backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronJob {
    pub id: String,
    pub name: String,
    pub schedule: CronSchedule,
    pub enabled: bool,
    pub state: CronJobState,
}

/// An agent session as reported by the agent backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_key: String,
    pub agent_id: String,
    pub status: String,
    pub model: String,
    pub last_activity: i64,
    pub message_count: u32,
}

const SAMPLE_JOBS: [(&str, &str, &str, i64); 6] = [
    ("1", "Daily AM Plan", "30 7 * * *", 3_600_000),
    ("2", "Notion Sync", "0 */4 * * *", 7_200_000),
    ("3", "Pain Point Radar", "0 22 * * *", 28_800_000),
    ("4", "Newsletter Intelligence", "0 6 * * *", 43_200_000),
    ("5", "Nightly Blog Content", "30 23 * * *", 36_000_000),
    ("6", "PolicyBot Session Check", "0 9 * * *", 50_400_000),
];

pub fn cron_jobs(now: DateTime<Utc>) -> Vec<CronJob> {
    let now_ms = now.timestamp_millis();
    SAMPLE_JOBS
        .iter()
        .map(|(id, name, expr, offset_ms)| CronJob {
            id: id.to_string(),
            name: name.to_string(),
            schedule: CronSchedule {
                expr: expr.to_string(),
            },
            enabled: true,
            state: CronJobState {
                next_run_at_ms: now_ms + offset_ms,
            },
        })
        .collect()
}

pub fn sessions(now: DateTime<Utc>) -> Vec<Session> {
    vec![Session {
        session_key: "agent:main:main".to_string(),
        agent_id: "main".to_string(),
        status: "active".to_string(),
        model: "claude-opus-4-5".to_string(),
        last_activity: now.timestamp_millis() - 120_000,
        message_count: 45,
    }]
}

pub fn memory_files(now: DateTime<Utc>) -> Vec<MemoryFile> {
    let file = |name: &str, size, modified, file_type| MemoryFile {
        name: name.to_string(),
        path: name.to_string(),
        size,
        modified,
        file_type,
    };

    vec![
        file("2026-02-19.md", 3162, now, MemoryFileType::Daily),
        file("2026-02-18.md", 12100, now - Duration::days(1), MemoryFileType::Daily),
        file("MEMORY.md", 15200, now, MemoryFileType::Core),
    ]
}

/// `{"jobs": [...]}` as returned by `GET /api/cron`
pub fn cron_payload(now: DateTime<Utc>) -> Value {
    json!({ "jobs": cron_jobs(now) })
}

/// `{"sessions": [...]}` as returned by `GET /api/sessions`
pub fn sessions_payload(now: DateTime<Utc>) -> Value {
    json!({ "sessions": sessions(now) })
}

/// `{"files": [...]}` as returned by `GET /api/memory`
pub fn memory_payload(now: DateTime<Utc>) -> Value {
    json!({ "files": memory_files(now) })
}
