// Presentation-side owner of a task list and its add-prompt

use crate::command::Command;
use crate::store::{Snapshot, TaskList};
use eyre::{Result, eyre};
use tracing::debug;

/// Add-prompt state. Lives beside the list, never inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddPrompt {
    pub visible: bool,
    pub draft: String,
}

/// One screen's worth of state: the list plus the prompt used to grow it
#[derive(Debug, Default)]
pub struct Session {
    list: TaskList,
    prompt: AddPrompt,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn prompt(&self) -> &AddPrompt {
        &self.prompt
    }

    pub fn snapshot(&self) -> Snapshot {
        self.list.snapshot()
    }

    /// Show the prompt (the "+" button)
    pub fn open_prompt(&mut self) {
        self.prompt.visible = true;
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) -> Result<()> {
        if !self.prompt.visible {
            return Err(eyre!("Add prompt is not open"));
        }
        self.prompt.draft = text.into();
        Ok(())
    }

    /// Submit the draft
    ///
    /// An accepted draft clears and closes the prompt. A blank one leaves the
    /// prompt open with the draft untouched.
    pub fn submit(&mut self) -> Result<Snapshot> {
        if !self.prompt.visible {
            return Err(eyre!("Add prompt is not open"));
        }

        let before = self.list.revision();
        let snapshot = self.list.add_task(&self.prompt.draft);
        if snapshot.revision != before {
            self.prompt = AddPrompt::default();
        } else {
            debug!("submit: draft rejected, prompt stays open");
        }
        Ok(snapshot)
    }

    pub fn toggle(&mut self, position: usize, completed: bool) -> Result<Snapshot> {
        self.list.set_completed(position, completed)
    }

    pub fn delete(&mut self, position: usize) -> Result<Snapshot> {
        self.list.remove_task(position)
    }

    /// Dispatch one UI event and return the list as it now stands
    pub fn apply(&mut self, command: &Command) -> Result<Snapshot> {
        debug!(%command, "apply");
        match command {
            Command::Open => {
                self.open_prompt();
                Ok(self.snapshot())
            }
            Command::Type(text) => {
                self.edit_draft(text.as_str())?;
                Ok(self.snapshot())
            }
            Command::Submit => self.submit(),
            Command::Add(text) => {
                self.open_prompt();
                self.edit_draft(text.as_str())?;
                self.submit()
            }
            Command::Done(pos) => self.toggle(*pos, true),
            Command::Undo(pos) => self.toggle(*pos, false),
            Command::Toggle(pos) => self.list.toggle(*pos),
            Command::Delete(pos) => self.delete(*pos),
            Command::List => Ok(self.snapshot()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_starts_hidden() {
        let session = Session::new();
        assert!(!session.prompt().visible);
        assert!(session.prompt().draft.is_empty());
        assert!(session.list().is_empty());
    }

    #[test]
    fn test_submit_accepted_clears_prompt() {
        let mut session = Session::new();
        session.open_prompt();
        session.edit_draft("Buy milk").unwrap();

        let snap = session.submit().unwrap();
        assert_eq!(snap.entries(), vec![("Buy milk", false)]);
        assert_eq!(session.prompt(), &AddPrompt::default());
    }

    #[test]
    fn test_submit_blank_keeps_prompt_open() {
        let mut session = Session::new();
        session.open_prompt();
        session.edit_draft("   ").unwrap();

        let snap = session.submit().unwrap();
        assert!(snap.is_empty());
        assert!(session.prompt().visible);
        assert_eq!(session.prompt().draft, "   ");
    }

    #[test]
    fn test_hidden_prompt_rejects_input() {
        let mut session = Session::new();
        assert!(session.edit_draft("x").is_err());
        assert!(session.submit().is_err());
        assert!(session.list().is_empty());
    }

    #[test]
    fn test_apply_scenario() {
        let mut session = Session::new();
        let script = [
            Command::Add("Buy milk".to_string()),
            Command::Done(0),
            Command::Add("Walk dog".to_string()),
        ];
        for command in &script {
            session.apply(command).unwrap();
        }
        assert_eq!(
            session.snapshot().entries(),
            vec![("Buy milk", true), ("Walk dog", false)]
        );

        let snap = session.apply(&Command::Delete(0)).unwrap();
        assert_eq!(snap.entries(), vec![("Walk dog", false)]);
    }

    #[test]
    fn test_apply_prompt_flow() {
        let mut session = Session::new();
        session.apply(&Command::Open).unwrap();
        session.apply(&Command::Type("Walk dog".to_string())).unwrap();
        assert!(session.snapshot().is_empty());

        let snap = session.apply(&Command::Submit).unwrap();
        assert_eq!(snap.len(), 1);
        assert!(!session.prompt().visible);
    }

    #[test]
    fn test_apply_toggle_and_undo() {
        let mut session = Session::new();
        session.apply(&Command::Add("a".to_string())).unwrap();
        assert!(session.apply(&Command::Toggle(0)).unwrap().tasks[0].completed);
        assert!(!session.apply(&Command::Undo(0)).unwrap().tasks[0].completed);
    }

    #[test]
    fn test_apply_bad_position_errors() {
        let mut session = Session::new();
        assert!(session.apply(&Command::Done(0)).is_err());
        assert!(session.apply(&Command::Delete(3)).is_err());
        assert!(session.apply(&Command::List).unwrap().is_empty());
    }
}
