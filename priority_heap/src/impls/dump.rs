// text dumps used when debugging heap layouts by eye

use super::{Priority, PriorityHeap};
use std::fmt::Display;
use std::io::{self, Write};

const EMPTY_MARKER: &str = "(EMPTY)";
const INDENT_PER_LEVEL: usize = 3;

impl<T: Display, P: Priority + Display> PriorityHeap<T, P> {
    /// Writes the values in buffer order on one line.
    pub fn write_array<W: Write>(&self, mut writer: W) -> io::Result<()> {
        if self.empty() {
            return writeln!(writer, "{EMPTY_MARKER}");
        }
        let mut values = self.entries.iter().map(|entry| &entry.value);
        if let Some(first) = values.next() {
            write!(writer, "{first}")?;
        }
        for value in values {
            write!(writer, " {value}")?;
        }
        writeln!(writer)
    }

    /// Writes the heap as a tree lying on its side: the right subtree above
    /// its parent, the left subtree below, each level indented further.
    pub fn write_tree<W: Write>(&self, mut writer: W) -> io::Result<()> {
        if self.empty() {
            return writeln!(writer, "{EMPTY_MARKER}");
        }
        self.write_subtree(&mut writer, self.root())
    }

    fn write_subtree<W: Write>(&self, writer: &mut W, node: usize) -> io::Result<()> {
        let (left, right) = self.children(node);
        if let Some(right) = right {
            self.write_subtree(writer, right)?;
        }
        let entry = &self.entries[node];
        writeln!(
            writer,
            "{:indent$}{}({})",
            "",
            entry.value,
            entry.priority,
            indent = Self::depth(node) * INDENT_PER_LEVEL
        )?;
        if let Some(left) = left {
            self.write_subtree(writer, left)?;
        }
        Ok(())
    }
}
