use std::io;
use std::path::Path;

/// Destructive filesystem operations the sweep performs.
///
/// Enumeration stays on the real filesystem; only the writes go through this
/// port so a run can be observed or made to fail per file.
pub trait DocStore {
    fn remove_file(&self, path: &Path) -> io::Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

impl<T: DocStore + ?Sized> DocStore for &T {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }
}
