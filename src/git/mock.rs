use crate::error::{BranchVersionError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
///
/// Histories are registered per head commit; tags keep their insertion
/// order, which stands in for the real listing order.
pub struct MockRepository {
    branch_heads: HashMap<String, Oid>,
    histories: HashMap<Oid, Vec<Oid>>,
    tags: Vec<(String, Oid)>,
    failing_histories: HashSet<Oid>,
    current_branch: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            branch_heads: HashMap::new(),
            histories: HashMap::new(),
            tags: Vec::new(),
            failing_histories: HashSet::new(),
            current_branch: None,
        }
    }

    /// Set a branch head
    pub fn set_branch_head(&mut self, branch: impl Into<String>, oid: Oid) {
        self.branch_heads.insert(branch.into(), oid);
    }

    /// Register the ordered history for a head commit (head itself first)
    pub fn set_history(&mut self, head: Oid, history: Vec<Oid>) {
        self.histories.insert(head, history);
    }

    /// Add a tag pointing to an OID; listing order follows insertion order
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push((name.into(), oid));
    }

    /// Force history walks starting at `head` to fail
    pub fn fail_history_for(&mut self, head: Oid) {
        self.failing_histories.insert(head);
    }

    /// Set the branch HEAD currently points at
    pub fn set_current_branch(&mut self, branch: impl Into<String>) {
        self.current_branch = Some(branch.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn branch_head_oid(&self, branch_name: &str) -> Result<Oid> {
        self.branch_heads.get(branch_name).copied().ok_or_else(|| {
            BranchVersionError::branch(format!("Branch not found: {}", branch_name))
        })
    }

    fn current_branch(&self) -> Result<String> {
        self.current_branch
            .clone()
            .ok_or_else(|| BranchVersionError::branch("HEAD is not on a named branch"))
    }

    fn walk_history(&self, head: Oid) -> Result<Vec<Oid>> {
        if self.failing_histories.contains(&head) {
            return Err(BranchVersionError::history(format!(
                "simulated read failure at {}",
                head
            )));
        }

        self.histories
            .get(&head)
            .cloned()
            .ok_or_else(|| BranchVersionError::history(format!("No history for {}", head)))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.iter().map(|(name, _)| name.clone()).collect())
    }

    fn tag_target_oid(&self, tag_name: &str) -> Result<Oid> {
        self.tags
            .iter()
            .find(|(name, _)| name == tag_name)
            .map(|(_, oid)| *oid)
            .ok_or_else(|| BranchVersionError::tag(format!("Cannot find tag '{}'", tag_name)))
    }

    fn count_commits_since(&self, origin: Oid, head: Oid) -> Result<u64> {
        let history = self.walk_history(head)?;

        Ok(history.iter().take_while(|oid| **oid != origin).count() as u64)
    }
}

/// Deterministic OID for tests: byte `n` repeated
pub fn test_oid(n: u8) -> Oid {
    Oid::from_bytes(&[n; 20]).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_branch_heads() {
        let mut repo = MockRepository::new();
        let oid = test_oid(1);

        repo.set_branch_head("develop", oid);

        assert_eq!(repo.branch_head_oid("develop").unwrap(), oid);
        assert!(repo.branch_head_oid("missing").is_err());
    }

    #[test]
    fn test_mock_repository_history() {
        let mut repo = MockRepository::new();
        let head = test_oid(3);
        let history = vec![test_oid(3), test_oid(2), test_oid(1)];

        repo.set_history(head, history.clone());

        assert_eq!(repo.walk_history(head).unwrap(), history);
    }

    #[test]
    fn test_mock_repository_history_failure() {
        let mut repo = MockRepository::new();
        let head = test_oid(3);

        repo.set_history(head, vec![head]);
        repo.fail_history_for(head);

        let err = repo.walk_history(head).unwrap_err();
        assert!(matches!(err, BranchVersionError::History(_)));
    }

    #[test]
    fn test_mock_repository_tags_keep_order() {
        let mut repo = MockRepository::new();

        repo.add_tag("feature/b", test_oid(2));
        repo.add_tag("feature/a", test_oid(1));

        assert_eq!(
            repo.list_tags().unwrap(),
            vec!["feature/b".to_string(), "feature/a".to_string()]
        );
        assert_eq!(repo.tag_target_oid("feature/a").unwrap(), test_oid(1));
        assert!(repo.tag_target_oid("feature/c").is_err());
    }

    #[test]
    fn test_mock_repository_count_commits_since() {
        let mut repo = MockRepository::new();
        let head = test_oid(4);

        repo.set_history(head, vec![test_oid(4), test_oid(3), test_oid(2), test_oid(1)]);

        assert_eq!(repo.count_commits_since(test_oid(2), head).unwrap(), 2);
        assert_eq!(repo.count_commits_since(test_oid(4), head).unwrap(), 0);
    }
}
