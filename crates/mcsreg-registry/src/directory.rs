//! Identity lookups (uid to user name, groups, accounts) used by backends.

use std::collections::HashMap;

use crate::config::{DirectorySection, UserEntry};

pub trait IdentityDirectory: Send + Sync {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn groups_of(&self, uid: u32) -> Vec<String>;
    fn accounts_of(&self, uid: u32) -> Vec<String>;
}

/// Fixed directory built from the `directory` config section.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    users: HashMap<u32, UserEntry>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(section: &DirectorySection) -> Self {
        let mut dir = Self::new();
        for u in &section.users {
            dir.insert(u.clone());
        }
        dir
    }

    pub fn insert(&mut self, entry: UserEntry) {
        self.users.insert(entry.uid, entry);
    }

    pub fn with_user(mut self, uid: u32, name: &str, groups: &[&str], accounts: &[&str]) -> Self {
        self.insert(UserEntry {
            uid,
            name: name.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            accounts: accounts.iter().map(|a| a.to_string()).collect(),
        });
        self
    }
}

impl IdentityDirectory for StaticDirectory {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.users.get(&uid).map(|u| u.name.clone())
    }

    fn groups_of(&self, uid: u32) -> Vec<String> {
        self.users.get(&uid).map(|u| u.groups.clone()).unwrap_or_default()
    }

    fn accounts_of(&self, uid: u32) -> Vec<String> {
        self.users
            .get(&uid)
            .map(|u| u.accounts.clone())
            .unwrap_or_default()
    }
}
