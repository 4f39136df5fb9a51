// Composite: files and directories behind one component interface.

use std::io::Write;

use crate::error::Result;

pub trait FileComponent {
    fn display(&self) -> String;

    /// Number of leaf files at or below this node.
    fn file_count(&self) -> usize;
}

/// Leaf.
pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileComponent for File {
    fn display(&self) -> String {
        format!("File: {}", self.name)
    }

    fn file_count(&self) -> usize {
        1
    }
}

/// Composite. Children keep the order they were added in.
pub struct Directory {
    name: String,
    files: Vec<Box<dyn FileComponent>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file: Box<dyn FileComponent>) {
        self.files.push(file);
    }

    pub fn children(&self) -> usize {
        self.files.len()
    }
}

impl FileComponent for Directory {
    /// Each child's display is indented by two spaces; only its first line
    /// receives the indent.
    fn display(&self) -> String {
        let mut result = format!("Directory: {}\n", self.name);
        for file in &self.files {
            result.push_str(&format!("  {}\n", file.display()));
        }
        result
    }

    fn file_count(&self) -> usize {
        self.files.iter().map(|file| file.file_count()).sum()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut root_directory = Directory::new("Root");

    let mut sub_directory1 = Directory::new("SubDirectory1");
    sub_directory1.add_file(Box::new(File::new("File1")));
    sub_directory1.add_file(Box::new(File::new("File2")));

    let mut sub_directory2 = Directory::new("SubDirectory2");
    sub_directory2.add_file(Box::new(File::new("File3")));
    sub_directory2.add_file(Box::new(File::new("File4")));

    root_directory.add_file(Box::new(sub_directory1));
    root_directory.add_file(Box::new(sub_directory2));

    writeln!(out, "{}", root_directory.display())?;
    Ok(())
}
