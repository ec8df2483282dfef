use crate::error::{BranchVersionError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// git2-backed repository handle
///
/// Stores the resolved git directory and opens a fresh git2 handle per
/// operation: `git2::Repository` is not `Sync`, and the history walker reads
/// two branches from worker threads sharing this value.
pub struct Git2Repository {
    git_dir: PathBuf,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            git_dir: repo.path().to_path_buf(),
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            git_dir: repo.path().to_path_buf(),
        }
    }

    fn handle(&self) -> Result<Git2Repo> {
        Ok(Git2Repo::open(&self.git_dir)?)
    }
}

impl super::Repository for Git2Repository {
    fn branch_head_oid(&self, branch_name: &str) -> Result<Oid> {
        let repo = self.handle()?;
        let branch = repo
            .find_branch(branch_name, git2::BranchType::Local)
            .map_err(|e| {
                BranchVersionError::branch(format!("Cannot find branch '{}': {}", branch_name, e))
            })?;

        let reference = branch.get();
        let oid = reference.target().ok_or_else(|| {
            BranchVersionError::branch(format!("Branch '{}' has no target", branch_name))
        })?;

        Ok(oid)
    }

    fn current_branch(&self) -> Result<String> {
        let repo = self.handle()?;
        let head = repo.head()?;

        head.shorthand()
            .map(|s| s.to_string())
            .ok_or_else(|| BranchVersionError::branch("HEAD is not on a named branch"))
    }

    fn walk_history(&self, head: Oid) -> Result<Vec<Oid>> {
        let repo = self
            .handle()
            .map_err(|e| BranchVersionError::history(e.to_string()))?;

        let mut revwalk = repo
            .revwalk()
            .map_err(|e| BranchVersionError::history(e.to_string()))?;

        revwalk
            .push(head)
            .map_err(|e| BranchVersionError::history(e.to_string()))?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| BranchVersionError::history(e.to_string()))?;
            commits.push(oid);
        }

        Ok(commits)
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let repo = self.handle()?;
        let tags = repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn tag_target_oid(&self, tag_name: &str) -> Result<Oid> {
        let repo = self.handle()?;
        let reference_name = format!("refs/tags/{}", tag_name);

        let reference = repo.find_reference(&reference_name).map_err(|e| {
            BranchVersionError::tag(format!("Cannot find tag '{}': {}", tag_name, e))
        })?;

        // Annotated tags point at a tag object; peel through to the commit
        let oid = reference
            .peel(git2::ObjectType::Commit)
            .map_err(|e| BranchVersionError::tag(format!("Cannot peel tag '{}': {}", tag_name, e)))?
            .id();

        Ok(oid)
    }

    fn count_commits_since(&self, origin: Oid, head: Oid) -> Result<u64> {
        let repo = self.handle()?;
        let mut revwalk = repo.revwalk()?;

        revwalk.push(head)?;
        revwalk.hide(origin)?;

        let mut count = 0u64;
        for oid_result in revwalk {
            oid_result?;
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git2_repository_open_discovers() {
        // Succeeds when run inside any git checkout, fails gracefully otherwise
        let result = Git2Repository::open(".");
        let _ = result;
    }
}
