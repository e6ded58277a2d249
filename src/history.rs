use crate::playbooks::Playbooks;
use crate::ports::RunOutput;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// One recorded run: what was launched, the literal command tokens, and the
/// captured outcome. Stored as a JSON file per run under `.history/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: i64,
    pub script: String,
    pub command: Vec<String>,
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub error: Option<String>,
}

pub fn run_entry(script: &str, command: Vec<String>, output: RunOutput) -> HistoryEntry {
    HistoryEntry {
        timestamp: timestamp_ms(),
        script: script.to_string(),
        command,
        success: output.success,
        exit_code: output.exit_code,
        stdout: output.stdout,
        stderr: output.stderr,
        error: None,
    }
}

pub fn error_entry(script: &str, command: Vec<String>, message: String) -> HistoryEntry {
    HistoryEntry {
        timestamp: timestamp_ms(),
        script: script.to_string(),
        command,
        success: false,
        exit_code: None,
        stdout: String::new(),
        stderr: String::new(),
        error: Some(message),
    }
}

pub fn record_entry(playbooks: &Playbooks, entry: &HistoryEntry) -> io::Result<PathBuf> {
    let data = serde_json::to_vec_pretty(entry)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    fs::create_dir_all(playbooks.history_dir())?;
    let path = playbooks.history_dir().join(history_file_name(entry));
    fs::write(&path, data)?;
    Ok(path)
}

pub fn load_entries(playbooks: &Playbooks) -> io::Result<Vec<HistoryEntry>> {
    let mut entries = Vec::new();
    let dir_entries = match fs::read_dir(playbooks.history_dir()) {
        Ok(entries) => entries,
        Err(err) => {
            if err.kind() == io::ErrorKind::NotFound {
                return Ok(entries);
            }
            return Err(err);
        }
    };

    for entry in dir_entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(_) => continue,
        };
        let parsed: HistoryEntry = match serde_json::from_slice(&data) {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        entries.push(parsed);
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(entries)
}

/// Body text for the output pane: stdout on success, the stderr wrapped in
/// an error message on failure, or the spawn/flow error text.
pub fn format_output(entry: &HistoryEntry) -> String {
    if let Some(error) = &entry.error {
        return error.trim().to_string();
    }
    if entry.success {
        entry.stdout.trim_end().to_string()
    } else {
        format!("Error: {}", entry.stderr.trim_end())
    }
}

pub fn format_timestamp(timestamp_ms: i64) -> String {
    let mut ms = timestamp_ms;
    if ms < 0 {
        ms = 0;
    }
    let seconds = ms / 1000;
    let days = seconds.div_euclid(86_400);
    let seconds_of_day = seconds.rem_euclid(86_400);
    let hour = seconds_of_day / 3_600;
    let minute = (seconds_of_day % 3_600) / 60;

    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year, month, day, hour, minute
    )
}

fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

fn history_file_name(entry: &HistoryEntry) -> String {
    let slug = safe_slug(&entry.script);
    format!("{}-{}-{}.json", entry.timestamp, std::process::id(), slug)
}

fn safe_slug(input: &str) -> String {
    let mut out = String::new();
    let mut prev_underscore = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            prev_underscore = false;
        } else if !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }
    let trimmed = out.trim_matches('_');
    let mut slug = trimmed.to_string();
    if slug.is_empty() {
        slug = "run".to_string();
    }
    const LIMIT: usize = 64;
    if slug.len() > LIMIT {
        slug.truncate(LIMIT);
    }
    slug
}

fn timestamp_ms() -> i64 {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_dir;

    fn entry(success: bool) -> HistoryEntry {
        HistoryEntry {
            timestamp: 1_700_000_000_000,
            script: "probe.sh".to_string(),
            command: vec!["sudo".to_string(), "./probe.sh".to_string()],
            success,
            exit_code: Some(if success { 0 } else { 2 }),
            stdout: "link up\n".to_string(),
            stderr: "permission denied\n".to_string(),
            error: None,
        }
    }

    #[test]
    fn test_format_output_success_shows_stdout() {
        assert_eq!(format_output(&entry(true)), "link up");
    }

    #[test]
    fn test_format_output_failure_wraps_stderr() {
        assert_eq!(format_output(&entry(false)), "Error: permission denied");
    }

    #[test]
    fn test_format_output_prefers_flow_error() {
        let mut entry = entry(false);
        entry.error = Some("Failed to start sudo: not found".to_string());
        assert_eq!(format_output(&entry), "Failed to start sudo: not found");
    }

    #[test]
    fn test_safe_slug() {
        assert_eq!(safe_slug("probe.sh"), "probe_sh");
        assert_eq!(safe_slug("///"), "run");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00");
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13");
    }

    #[test]
    fn test_record_and_load_round_trip() {
        let (_guard, dir) = test_dir("history");
        let playbooks = Playbooks::new(dir);
        record_entry(&playbooks, &entry(true)).unwrap();
        let mut newer = entry(false);
        newer.timestamp += 1;
        newer.script = "scan.py".to_string();
        record_entry(&playbooks, &newer).unwrap();

        let loaded = load_entries(&playbooks).unwrap();
        assert_eq!(loaded.len(), 2);
        // Newest first.
        assert_eq!(loaded[0].script, "scan.py");
        assert_eq!(loaded[1].command, vec!["sudo", "./probe.sh"]);
    }
}
