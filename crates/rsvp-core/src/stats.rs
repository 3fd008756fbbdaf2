//! Reading session log and per-document statistics.

use core::{cmp::Reverse, fmt::Write};
use std::collections::BTreeMap;

const MS_PER_MINUTE: f64 = 60_000.0;
const REPORT_RECENT_SESSIONS: usize = 5;

/// One continuous stretch of playback over a document.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingSession {
    pub file_id: String,
    pub file_name: String,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub duration_ms: u64,
    pub start_position: usize,
    pub end_position: usize,
    pub words_read: usize,
    pub average_wpm: f64,
}

/// Totals across every session recorded for one document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReadingStat {
    pub total_sessions: u32,
    pub total_time_ms: u64,
    pub total_words_read: usize,
    pub average_wpm: f64,
    pub last_read: u64,
}

pub fn words_per_minute(words: usize, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 0.0;
    }
    words as f64 / (duration_ms as f64 / MS_PER_MINUTE)
}

#[derive(Clone, Debug, Default)]
pub struct ReadingLog {
    sessions: Vec<ReadingSession>,
    stats: BTreeMap<String, ReadingStat>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_session(&mut self, session: ReadingSession) {
        let stat = self.stats.entry(session.file_id.clone()).or_default();
        stat.total_sessions += 1;
        stat.total_time_ms += session.duration_ms;
        stat.total_words_read += session.words_read;
        stat.average_wpm = words_per_minute(stat.total_words_read, stat.total_time_ms);
        stat.last_read = stat.last_read.max(session.end_timestamp);
        self.sessions.push(session);
    }

    pub fn file_stat(&self, file_id: &str) -> Option<&ReadingStat> {
        self.stats.get(file_id)
    }

    pub fn stats(&self) -> impl Iterator<Item = (&str, &ReadingStat)> {
        self.stats.iter().map(|(id, stat)| (id.as_str(), stat))
    }

    /// Up to `count` sessions, most recently finished first.
    pub fn recent_sessions(&self, count: usize) -> Vec<&ReadingSession> {
        let mut recent: Vec<&ReadingSession> = self.sessions.iter().collect();
        recent.sort_by_key(|session| Reverse(session.end_timestamp));
        recent.truncate(count);
        recent
    }

    /// Markdown summary of overall totals and the latest sessions.
    pub fn report(&self) -> String {
        let total_words: usize = self.stats.values().map(|s| s.total_words_read).sum();
        let total_ms: u64 = self.stats.values().map(|s| s.total_time_ms).sum();

        let mut out = String::from("# Reading report\n\n## Overall\n\n");
        let _ = writeln!(out, "- Words read: {total_words}");
        let _ = writeln!(
            out,
            "- Time spent: {:.1} min",
            total_ms as f64 / MS_PER_MINUTE
        );
        let _ = writeln!(
            out,
            "- Average speed: {} wpm",
            words_per_minute(total_words, total_ms).round()
        );

        out.push_str("\n## Recent sessions\n\n");
        for session in self.recent_sessions(REPORT_RECENT_SESSIONS) {
            let _ = writeln!(
                out,
                "- {}: {} words, {} wpm",
                session.file_name,
                session.words_read,
                session.average_wpm.round()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(file_id: &str, end: u64, duration_ms: u64, words: usize) -> ReadingSession {
        ReadingSession {
            file_id: file_id.to_owned(),
            file_name: format!("{file_id}.md"),
            start_timestamp: end - duration_ms,
            end_timestamp: end,
            duration_ms,
            start_position: 0,
            end_position: words,
            words_read: words,
            average_wpm: words_per_minute(words, duration_ms),
        }
    }

    #[test]
    fn stats_accumulate_per_file() {
        let mut log = ReadingLog::new();
        log.add_session(session("a", 120_000, 60_000, 300));
        log.add_session(session("a", 400_000, 60_000, 500));
        log.add_session(session("b", 200_000, 30_000, 100));

        let a = log.file_stat("a").unwrap();
        assert_eq!(a.total_sessions, 2);
        assert_eq!(a.total_time_ms, 120_000);
        assert_eq!(a.total_words_read, 800);
        assert_eq!(a.average_wpm, 400.0);
        assert_eq!(a.last_read, 400_000);
        assert!(log.file_stat("c").is_none());
        assert_eq!(log.stats().count(), 2);
    }

    #[test]
    fn recent_sessions_are_newest_first() {
        let mut log = ReadingLog::new();
        log.add_session(session("a", 100_000, 1_000, 1));
        log.add_session(session("b", 300_000, 1_000, 1));
        log.add_session(session("c", 200_000, 1_000, 1));

        let recent = log.recent_sessions(2);
        let ids: Vec<&str> = recent.iter().map(|s| s.file_id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn zero_duration_has_zero_speed() {
        assert_eq!(words_per_minute(10, 0), 0.0);
        let report = ReadingLog::new().report();
        assert!(report.contains("- Words read: 0"));
        assert!(report.contains("- Average speed: 0 wpm"));
    }

    #[test]
    fn report_lists_totals_and_sessions() {
        let mut log = ReadingLog::new();
        log.add_session(session("intro", 90_000, 90_000, 600));
        let report = log.report();
        assert!(report.contains("- Words read: 600"));
        assert!(report.contains("- Time spent: 1.5 min"));
        assert!(report.contains("- Average speed: 400 wpm"));
        assert!(report.contains("- intro.md: 600 words, 400 wpm"));
    }
}
