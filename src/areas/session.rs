use crate::areas::directory::Directory;
use crate::artifacts::core::options::DiffOptions;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Session {
    baseline: Directory,
    candidate: Directory,
    options: DiffOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
    color: bool,
}

impl Session {
    pub fn new(
        baseline: &Path,
        candidate: &Path,
        options: DiffOptions,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Session {
            baseline: Directory::new(baseline.into()),
            candidate: Directory::new(candidate.into()),
            options,
            writer: RefCell::new(writer),
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn baseline(&self) -> &Directory {
        &self.baseline
    }

    pub fn candidate(&self) -> &Directory {
        &self.candidate
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
