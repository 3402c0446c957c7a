//! In-memory File System
//!
//! A `FileSystem` double holding a tree of files and directories in a map.
//! Paths are resolved lexically (no symlinks). Cloning shares the same tree.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::lexical_normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(String),
}

#[derive(Debug, Default)]
struct Tree {
    nodes: BTreeMap<PathBuf, Node>,
    /// Paths whose mutation fails with permission denied
    denied: BTreeSet<PathBuf>,
}

/// In-memory file system
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    tree: Arc<Mutex<Tree>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.lock().nodes.insert(PathBuf::from("/"), Node::Dir);
        fs
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn normalize(path: &Path) -> PathBuf {
        if path.is_absolute() {
            lexical_normalize(path)
        } else {
            lexical_normalize(&Path::new("/").join(path))
        }
    }

    /// Add a file with content, creating missing parent directories
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = Self::normalize(path.as_ref());
        let mut tree = self.lock();
        if let Some(parent) = path.parent() {
            insert_dirs(&mut tree.nodes, parent);
        }
        tree.nodes.insert(path, Node::File(content.to_string()));
    }

    /// Add a directory and its missing parents
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = Self::normalize(path.as_ref());
        insert_dirs(&mut self.lock().nodes, &path);
    }

    /// Make every mutation touching `path` fail with permission denied
    pub fn deny(&self, path: impl AsRef<Path>) {
        let path = Self::normalize(path.as_ref());
        self.lock().denied.insert(path);
    }

    /// Content of a file, if `path` is a file
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = Self::normalize(path.as_ref());
        match self.lock().nodes.get(&path) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Every path in the tree, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().nodes.keys().cloned().collect()
    }

    fn check_allowed(tree: &Tree, path: &Path) -> FsResult<()> {
        if tree.denied.contains(path) {
            Err(FsError::PermissionDenied(path.to_path_buf()))
        } else {
            Ok(())
        }
    }
}

fn insert_dirs(nodes: &mut BTreeMap<PathBuf, Node>, dir: &Path) {
    for ancestor in dir.ancestors() {
        nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
    }
}

fn parent_is_dir(nodes: &BTreeMap<PathBuf, Node>, path: &Path) -> bool {
    match path.parent() {
        Some(parent) => matches!(nodes.get(parent), Some(Node::Dir)),
        None => true,
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.lock().nodes.contains_key(&Self::normalize(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lock().nodes.get(&Self::normalize(path)), Some(Node::Dir))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        Self::normalize(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let path = Self::normalize(path);
        let mut tree = self.lock();
        Self::check_allowed(&tree, &path)?;
        if let Some(file) = path
            .ancestors()
            .find(|a| matches!(tree.nodes.get(*a), Some(Node::File(_))))
        {
            return Err(FsError::AlreadyExists(file.to_path_buf()));
        }
        insert_dirs(&mut tree.nodes, &path);
        Ok(())
    }

    fn create_file(&self, path: &Path) -> FsResult<()> {
        let path = Self::normalize(path);
        let mut tree = self.lock();
        Self::check_allowed(&tree, &path)?;
        if tree.nodes.contains_key(&path) {
            return Err(FsError::AlreadyExists(path));
        }
        if !parent_is_dir(&tree.nodes, &path) {
            return Err(FsError::NotFound(path));
        }
        tree.nodes.insert(path, Node::File(String::new()));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        let from = Self::normalize(from);
        let to = Self::normalize(to);
        let mut tree = self.lock();
        Self::check_allowed(&tree, &from)?;
        Self::check_allowed(&tree, &to)?;

        let Some(node) = tree.nodes.get(&from).cloned() else {
            return Err(FsError::NotFound(from));
        };
        if !parent_is_dir(&tree.nodes, &to) {
            return Err(FsError::NotFound(to));
        }
        match (&node, tree.nodes.get(&to)) {
            (_, None) => {}
            (Node::File(_), Some(Node::File(_))) => {}
            (_, Some(Node::Dir)) => return Err(FsError::Other("Is a directory".to_string())),
            (Node::Dir, Some(Node::File(_))) => {
                return Err(FsError::Other("Not a directory".to_string()))
            }
        }
        if node == Node::Dir && to.starts_with(&from) {
            return Err(FsError::Other("Invalid argument".to_string()));
        }

        let moved: Vec<(PathBuf, Node)> = tree
            .nodes
            .iter()
            .filter(|(path, _)| path.starts_with(&from))
            .map(|(path, node)| (path.clone(), node.clone()))
            .collect();
        for (path, _) in &moved {
            tree.nodes.remove(path);
        }
        for (path, node) in moved {
            let rel = path.strip_prefix(&from).unwrap_or(Path::new(""));
            let dest = if rel.as_os_str().is_empty() {
                to.clone()
            } else {
                to.join(rel)
            };
            tree.nodes.insert(dest, node);
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        let path = Self::normalize(path);
        let mut tree = self.lock();
        Self::check_allowed(&tree, &path)?;
        match tree.nodes.get(&path) {
            Some(Node::File(_)) => {
                tree.nodes.remove(&path);
                Ok(())
            }
            Some(Node::Dir) => Err(FsError::Other("Is a directory".to_string())),
            None => Err(FsError::NotFound(path)),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        let path = Self::normalize(path);
        let mut tree = self.lock();
        Self::check_allowed(&tree, &path)?;
        match tree.nodes.get(&path) {
            Some(Node::Dir) => {
                tree.nodes.retain(|p, _| !p.starts_with(&path));
                Ok(())
            }
            Some(Node::File(_)) => Err(FsError::Other("Not a directory".to_string())),
            None => Err(FsError::NotFound(path)),
        }
    }
}

/// Case-insensitive view of a `MemoryFs`, like a default macOS or Windows
/// volume: every path is lowercased before it reaches the tree
#[cfg(test)]
pub(crate) struct CaseFoldingFs(pub MemoryFs);

#[cfg(test)]
fn fold(path: &Path) -> PathBuf {
    PathBuf::from(path.to_string_lossy().to_lowercase())
}

#[cfg(test)]
impl FileSystem for CaseFoldingFs {
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(&fold(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.0.is_dir(&fold(path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.0.resolve(&fold(path))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.0.create_dir_all(&fold(path))
    }

    fn create_file(&self, path: &Path) -> FsResult<()> {
        self.0.create_file(&fold(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        self.0.rename(&fold(from), &fold(to))
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        self.0.remove_file(&fold(path))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.0.remove_dir_all(&fold(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_creates_parents() {
        let fs = MemoryFs::new();
        fs.add_file("/clips/raw/a.mp4", "data");
        assert!(fs.is_dir(Path::new("/clips/raw")));
        assert_eq!(fs.read("/clips/raw/a.mp4").as_deref(), Some("data"));
    }

    #[test]
    fn rename_moves_subtree() {
        let fs = MemoryFs::new();
        fs.add_file("/clips/raw/a.mp4", "a");
        fs.rename(Path::new("/clips/raw"), Path::new("/clips/cut")).unwrap();
        assert!(!fs.exists(Path::new("/clips/raw")));
        assert_eq!(fs.read("/clips/cut/a.mp4").as_deref(), Some("a"));
    }

    #[test]
    fn rename_replaces_file() {
        let fs = MemoryFs::new();
        fs.add_file("/r/a", "A");
        fs.add_file("/r/b", "B");
        fs.rename(Path::new("/r/a"), Path::new("/r/b")).unwrap();
        assert_eq!(fs.read("/r/b").as_deref(), Some("A"));
        assert!(!fs.exists(Path::new("/r/a")));
    }

    #[test]
    fn rename_into_missing_parent_fails() {
        let fs = MemoryFs::new();
        fs.add_file("/r/a", "A");
        let err = fs.rename(Path::new("/r/a"), Path::new("/r/missing/a")).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn create_file_requires_parent() {
        let fs = MemoryFs::new();
        assert!(fs.create_file(Path::new("/nope/a.txt")).is_err());
        fs.add_dir("/r");
        fs.create_file(Path::new("/r/a.txt")).unwrap();
        assert_eq!(fs.read("/r/a.txt").as_deref(), Some(""));
    }

    #[test]
    fn denied_paths_fail_mutation() {
        let fs = MemoryFs::new();
        fs.add_file("/r/a", "A");
        fs.deny("/r/a");
        assert!(matches!(
            fs.remove_file(Path::new("/r/a")),
            Err(FsError::PermissionDenied(_))
        ));
        assert!(fs.exists(Path::new("/r/a")));
    }

    #[test]
    fn remove_dir_all_removes_descendants_only() {
        let fs = MemoryFs::new();
        fs.add_file("/r/dir/a", "");
        fs.add_file("/r/dir2/b", "");
        fs.remove_dir_all(Path::new("/r/dir")).unwrap();
        assert!(!fs.exists(Path::new("/r/dir/a")));
        assert!(fs.exists(Path::new("/r/dir2/b")));
    }
}
