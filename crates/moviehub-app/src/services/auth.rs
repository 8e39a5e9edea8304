use moviehub_store::{load_collection, load_value, save_collection, save_value};
use moviehub_types::{
    Account, AccountId, Session, validate_email, validate_login_password, validate_name,
    validate_phone,
};

use super::today;
use crate::workspace::Workspace;
use crate::{Error, Result, keys};

pub struct SignupInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub birth: Option<String>,
}

/// Signup, login and session handling against the local member roster.
pub struct AuthService<'a> {
    ws: &'a Workspace,
}

impl<'a> AuthService<'a> {
    pub fn new(ws: &'a Workspace) -> Self {
        Self { ws }
    }

    /// Register a new member and sign them in.
    pub fn sign_up(&self, input: SignupInput) -> Result<Account> {
        validate_email(&input.email)?;
        validate_login_password(&input.password)?;
        validate_name(&input.name)?;
        validate_phone(&input.phone)?;

        let mut members: Vec<Account> = load_collection(self.ws.storage(), keys::MEMBERS)?;
        if members
            .iter()
            .any(|member| member.email.eq_ignore_ascii_case(&input.email))
        {
            return Err(Error::EmailTaken(input.email));
        }

        let account = Account {
            id: AccountId::next_after(&members),
            email: input.email,
            password_digest: Account::digest_password(&input.password),
            name: input.name,
            phone: input.phone,
            birth: input.birth,
            favorite_genres: Vec::new(),
            unfavorite_genres: Vec::new(),
            joined: today(),
            admin: false,
        };

        members.push(account.clone());
        save_collection(self.ws.storage(), keys::MEMBERS, &members)?;
        save_value(self.ws.storage(), keys::SESSION, &Session::for_account(&account))?;

        Ok(account)
    }

    /// Email + password check; a match writes the session.
    pub fn log_in(&self, email: &str, password: &str) -> Result<Account> {
        let members: Vec<Account> = load_collection(self.ws.storage(), keys::MEMBERS)?;
        let account = members
            .into_iter()
            .find(|member| member.email.eq_ignore_ascii_case(email))
            .filter(|member| member.password_matches(password))
            .ok_or(Error::InvalidCredentials)?;

        save_value(self.ws.storage(), keys::SESSION, &Session::for_account(&account))?;
        Ok(account)
    }

    /// Drop the session. Returns whether anyone was signed in.
    pub fn log_out(&self) -> Result<bool> {
        let had_session =
            load_value::<Session>(self.ws.storage(), keys::SESSION)?.is_some();
        self.ws.storage().remove_item(keys::SESSION)?;
        Ok(had_session)
    }

    /// The signed-in member, resolved against the roster. A session whose
    /// account has been withdrawn is cleared and reads as logged out.
    pub fn current_user(&self) -> Result<Option<Account>> {
        let Some(session) = load_value::<Session>(self.ws.storage(), keys::SESSION)? else {
            return Ok(None);
        };

        let members: Vec<Account> = load_collection(self.ws.storage(), keys::MEMBERS)?;
        match members
            .into_iter()
            .find(|member| member.id == session.account_id)
        {
            Some(account) => Ok(Some(account)),
            None => {
                self.ws.storage().remove_item(keys::SESSION)?;
                Ok(None)
            }
        }
    }

    pub fn require_user(&self) -> Result<Account> {
        self.current_user()?.ok_or(Error::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(dir: &TempDir) -> Workspace {
        Workspace::open(dir.path()).unwrap()
    }

    fn signup_input(email: &str) -> SignupInput {
        SignupInput {
            email: email.to_string(),
            password: "pass1234".to_string(),
            name: "Tester".to_string(),
            phone: "010-1234-5678".to_string(),
            birth: None,
        }
    }

    #[test]
    fn test_signup_assigns_id_and_logs_in() {
        let dir = TempDir::new().unwrap();
        let ws = workspace(&dir);
        let auth = AuthService::new(&ws);

        let account = auth.sign_up(signup_input("a@example.com")).unwrap();
        assert_eq!(account.id, AccountId::new(1));

        let current = auth.current_user().unwrap().unwrap();
        assert_eq!(current.email, "a@example.com");
    }

    #[test]
    fn test_signup_rejects_duplicate_email() {
        let dir = TempDir::new().unwrap();
        let ws = workspace(&dir);
        let auth = AuthService::new(&ws);

        auth.sign_up(signup_input("a@example.com")).unwrap();
        let err = auth.sign_up(signup_input("A@EXAMPLE.COM")).unwrap_err();
        assert!(matches!(err, Error::EmailTaken(_)));
    }

    #[test]
    fn test_signup_validates_fields() {
        let dir = TempDir::new().unwrap();
        let ws = workspace(&dir);
        let auth = AuthService::new(&ws);

        let mut input = signup_input("bad-email");
        assert!(matches!(
            auth.sign_up(input).unwrap_err(),
            Error::Validation(_)
        ));

        input = signup_input("ok@example.com");
        input.phone = "02-123-4567".to_string();
        assert!(matches!(
            auth.sign_up(input).unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_login_and_logout() {
        let dir = TempDir::new().unwrap();
        let ws = workspace(&dir);
        let auth = AuthService::new(&ws);

        auth.sign_up(signup_input("a@example.com")).unwrap();
        assert!(auth.log_out().unwrap());
        assert!(auth.current_user().unwrap().is_none());

        auth.log_in("a@example.com", "pass1234").unwrap();
        assert!(auth.current_user().unwrap().is_some());

        // wrong password
        assert!(matches!(
            auth.log_in("a@example.com", "wrong").unwrap_err(),
            Error::InvalidCredentials
        ));

        // logging out twice reports no session the second time
        assert!(auth.log_out().unwrap());
        assert!(!auth.log_out().unwrap());
    }

    #[test]
    fn test_dangling_session_reads_as_logged_out() {
        let dir = TempDir::new().unwrap();
        let ws = workspace(&dir);
        let auth = AuthService::new(&ws);

        let account = auth.sign_up(signup_input("a@example.com")).unwrap();

        // wipe the roster while the session still points at the account
        save_collection::<Account>(ws.storage(), keys::MEMBERS, &[]).unwrap();
        assert!(auth.current_user().unwrap().is_none());

        // the stale session was cleared, not just ignored
        assert!(
            load_value::<Session>(ws.storage(), keys::SESSION)
                .unwrap()
                .is_none()
        );
        let _ = account;
    }
}
