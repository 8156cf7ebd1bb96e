// Text / JSON / YAML rendering of a snapshot

use crate::models::TaskStatus;
use crate::store::Snapshot;
use colored::Colorize;
use eyre::{Context, Result};

/// Output format for rendered snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Yaml,
}

pub fn render(snapshot: &Snapshot, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(snapshot)),
        Format::Json => serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot as JSON"),
        Format::Yaml => serde_yaml::to_string(snapshot).context("Failed to serialize snapshot as YAML"),
    }
}

/// One line per task plus a completion summary
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    if snapshot.is_empty() {
        out.push_str(&"(no tasks)".dimmed().to_string());
        out.push('\n');
    }

    for (pos, task) in snapshot.tasks.iter().enumerate() {
        let line = match task.status() {
            TaskStatus::Completed => format!(
                "{:>3}. {} {}",
                pos,
                "[x]".green(),
                task.description.as_str().dimmed().strikethrough()
            ),
            TaskStatus::Pending => format!("{:>3}. [ ] {}", pos, task.description),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!("{}/{} done", snapshot.completed_count(), snapshot.len()));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskList;

    fn sample() -> Snapshot {
        let mut list = TaskList::new();
        list.add_task("Buy milk");
        list.add_task("Walk dog");
        list.set_completed(0, true).unwrap();
        list.snapshot()
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);
        let text = render_text(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["  0. [x] Buy milk", "  1. [ ] Walk dog", "1/2 done"]);
    }

    #[test]
    fn test_render_text_aligns_positions() {
        colored::control::set_override(false);
        let mut list = TaskList::new();
        for i in 0..11 {
            list.add_task(&format!("task {}", i));
        }
        list.set_completed(10, true).unwrap();
        let text = render_text(&list.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  0. [ ] task 0");
        assert_eq!(lines[10], " 10. [x] task 10");
        assert_eq!(lines[11], "1/11 done");
    }

    #[test]
    fn test_render_text_empty() {
        colored::control::set_override(false);
        let text = render_text(&Snapshot::default());
        assert_eq!(text, "(no tasks)\n0/0 done\n");
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), Format::Json).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entries(), vec![("Buy milk", true), ("Walk dog", false)]);
        assert_eq!(parsed.revision, 3);
        assert!(json.contains("\"description\": \"Buy milk\""));
        assert!(json.contains("\"completed\": true"));
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&sample(), Format::Yaml).unwrap();
        assert!(yaml.contains("revision: 3"));
        assert!(yaml.contains("description: Walk dog"));
    }
}
