use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Member identifier, assigned sequentially at signup (max existing + 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following the highest one in use (1 for an empty roster)
    pub fn next_after(accounts: &[Account]) -> Self {
        let max = accounts.iter().map(|a| a.id.0).max().unwrap_or(0);
        Self(max + 1)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered member.
///
/// The password is kept only as a SHA-256 hex digest; login compares
/// digests. Genre preferences hold TMDB genre ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub password_digest: String,
    pub name: String,
    pub phone: String,
    /// Display string, not parsed (e.g. "1999-04-17")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    /// Favorite TMDB genre ids (at most 3)
    #[serde(default)]
    pub favorite_genres: Vec<u32>,
    /// Disliked TMDB genre ids (at most 3)
    #[serde(default)]
    pub unfavorite_genres: Vec<u32>,
    /// Signup date (YYYY-MM-DD)
    pub joined: String,
    /// Administrator flag; gates nothing beyond display today
    #[serde(default)]
    pub admin: bool,
}

impl Account {
    /// SHA-256 hex digest used for stored passwords
    pub fn digest_password(raw: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn password_matches(&self, raw: &str) -> bool {
        self.password_digest == Self::digest_password(raw)
    }
}

/// The stored login session: which account is signed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub account_id: AccountId,
    pub email: String,
    pub name: String,
}

impl Session {
    pub fn for_account(account: &Account) -> Self {
        Self {
            account_id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: u64) -> Account {
        Account {
            id: AccountId::new(id),
            email: format!("user{}@example.com", id),
            password_digest: Account::digest_password("pass1234"),
            name: format!("User {}", id),
            phone: "010-1234-5678".to_string(),
            birth: None,
            favorite_genres: vec![],
            unfavorite_genres: vec![],
            joined: "2026-01-01".to_string(),
            admin: false,
        }
    }

    #[test]
    fn test_next_id_empty_roster() {
        assert_eq!(AccountId::next_after(&[]), AccountId::new(1));
    }

    #[test]
    fn test_next_id_skips_gaps() {
        // ids need not be contiguous after withdrawals
        let accounts = vec![account(1), account(7), account(3)];
        assert_eq!(AccountId::next_after(&accounts), AccountId::new(8));
    }

    #[test]
    fn test_password_digest_roundtrip() {
        let acc = account(1);
        assert!(acc.password_matches("pass1234"));
        assert!(!acc.password_matches("pass12345"));
    }

    #[test]
    fn test_session_snapshot() {
        let acc = account(2);
        let session = Session::for_account(&acc);
        assert_eq!(session.account_id, acc.id);
        assert_eq!(session.email, acc.email);
    }
}
