// Memento: snapshots of a text editor kept by an append-only history.

use std::io::{self, Write};

use crate::error::Result;

/// Immutable point-in-time snapshot of the editor's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditorMemento {
    text: String,
}

impl TextEditorMemento {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Originator.
#[derive(Debug)]
pub struct TextEditor {
    pub text: String,
}

impl TextEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn create_memento(&self) -> TextEditorMemento {
        TextEditorMemento {
            text: self.text.clone(),
        }
    }

    pub fn restore_memento(&mut self, memento: &TextEditorMemento) {
        self.text.clone_from(&memento.text);
    }

    pub fn display_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Current Text: {}", self.text)
    }
}

/// Caretaker. Snapshots are only ever appended.
#[derive(Debug, Default)]
pub struct History {
    mementos: Vec<TextEditorMemento>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_memento(&mut self, memento: TextEditorMemento) {
        self.mementos.push(memento);
        tracing::trace!(saved = self.mementos.len(), "memento saved");
    }

    /// `None` when `index` is out of range.
    pub fn get_memento(&self, index: usize) -> Option<&TextEditorMemento> {
        self.mementos.get(index)
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut text_editor = TextEditor::new("Hello, World!");
    let mut history = History::new();

    // Save the initial state
    history.save_memento(text_editor.create_memento());

    text_editor.text = "New Text".to_string();
    text_editor.display_text(out)?;

    history.save_memento(text_editor.create_memento());

    // Restore the initial state
    if let Some(restored_state) = history.get_memento(0) {
        text_editor.restore_memento(restored_state);
        text_editor.display_text(out)?;
    }
    Ok(())
}
