//! Git tree snapshots
//!
//! Implements `TreeSnapshot` over the tree of a single git commit, either
//! from a fresh shallow clone or from a repository already on disk.

use std::fmt;
use std::io;
use std::path::Path;

use anyhow::Context;
use git2::build::RepoBuilder;
use git2::{BranchType, FetchOptions, ObjectType, Oid, Repository, TreeWalkMode, TreeWalkResult};
use tempfile::TempDir;

use crate::core::ports::TreeSnapshot;

/// The files of one git commit
pub struct GitSnapshot {
    repo: Repository,
    commit_id: Oid,
    tree_id: Oid,
    /// Holds a cloned repository on disk until the snapshot is dropped
    _clone_dir: Option<TempDir>,
}

impl fmt::Debug for GitSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitSnapshot")
            .field("path", &self.repo.path())
            .field("commit_id", &self.commit_id)
            .field("tree_id", &self.tree_id)
            .finish()
    }
}

impl GitSnapshot {
    /// Shallow-clone `url` into a temporary directory and snapshot `branch`
    ///
    /// With no branch, the remote's default branch is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone fails or the branch has no commit.
    pub fn clone(url: &str, branch: Option<&str>) -> anyhow::Result<Self> {
        let dir = TempDir::new().context("creating clone directory")?;

        let mut fetch = FetchOptions::new();
        // libgit2's local transport cannot serve shallow fetches
        if !url.starts_with("file://") {
            fetch.depth(1);
        }

        let mut builder = RepoBuilder::new();
        builder.bare(true).fetch_options(fetch);
        if let Some(branch) = branch {
            builder.branch(branch);
        }

        log::info!("cloning {url}");
        let repo = builder
            .clone(url, dir.path())
            .with_context(|| format!("making repository from {url}"))?;

        let commit_id = repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map(|commit| commit.id())
            .context("getting HEAD commit")?;

        Self::at_commit(repo, commit_id, Some(dir))
    }

    /// Snapshot `branch` (or HEAD) of a repository already on disk
    ///
    /// Local branches are tried first, then `origin/<branch>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the branch
    /// does not exist.
    pub fn open(path: &Path, branch: Option<&str>) -> anyhow::Result<Self> {
        log::info!("opening {}", path.display());
        let repo = Repository::open(path)
            .with_context(|| format!("opening repository at {}", path.display()))?;

        let commit_id = match branch {
            Some(name) => repo
                .find_branch(name, BranchType::Local)
                .or_else(|_| repo.find_branch(&format!("origin/{name}"), BranchType::Remote))
                .and_then(|b| b.get().peel_to_commit())
                .map(|commit| commit.id())
                .with_context(|| format!("resolving branch {name}"))?,
            None => repo
                .head()
                .and_then(|head| head.peel_to_commit())
                .map(|commit| commit.id())
                .context("getting HEAD commit")?,
        };

        Self::at_commit(repo, commit_id, None)
    }

    fn at_commit(repo: Repository, commit_id: Oid, clone_dir: Option<TempDir>) -> anyhow::Result<Self> {
        let tree_id = repo
            .find_commit(commit_id)
            .map(|commit| commit.tree_id())
            .context("getting HEAD commit tree")?;

        Ok(Self {
            repo,
            commit_id,
            tree_id,
            _clone_dir: clone_dir,
        })
    }

    /// The commit this snapshot was taken from
    #[must_use]
    pub const fn commit_id(&self) -> Oid {
        self.commit_id
    }
}

impl TreeSnapshot for GitSnapshot {
    fn files(&self) -> io::Result<Vec<String>> {
        let tree = self.repo.find_tree(self.tree_id).map_err(io::Error::other)?;

        let mut files = Vec::new();
        tree.walk(TreeWalkMode::PreOrder, |root, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                let name = String::from_utf8_lossy(entry.name_bytes());
                files.push(format!("{root}{name}"));
            }
            TreeWalkResult::Ok
        })
        .map_err(io::Error::other)?;

        Ok(files)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let tree = self.repo.find_tree(self.tree_id).map_err(io::Error::other)?;
        let entry = tree.get_path(Path::new(path)).map_err(io::Error::other)?;
        let blob = entry
            .to_object(&self.repo)
            .and_then(|object| object.peel_to_blob())
            .map_err(io::Error::other)?;
        Ok(blob.content().to_vec())
    }
}
