//! Local user accounts for the record store.
//!
//! Credentials are a per-user random salt plus a single SHA-256 of
//! `password || salt` (see [`crate::infrastructure::crypto`]). This is a weak
//! scheme kept for compatibility with existing databases.

use diesel::prelude::*;
use tracing::{debug, info, warn};

use crate::adapter::outbound::sqlite::database::model::{NewUserRow, UserRow};
use crate::adapter::outbound::sqlite::database::schema::users;
use crate::adapter::outbound::sqlite::store::{require_row, RecordStore};
use crate::error::StoreResult;
use crate::infrastructure::crypto::{generate_salt, hash_password, verify_password};

/// Username of the bootstrap account.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the bootstrap account.
///
/// A placeholder credential: any real deployment must rotate it with
/// [`RecordStore::change_password`] after first start.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

impl RecordStore {
    /// Create a user with a freshly salted password hash.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`](crate::error::StoreError) if the
    /// username is taken or the insert is rejected.
    pub fn create_user(&mut self, username: &str, password: &str) -> StoreResult<()> {
        let salt = generate_salt();
        let password_hash = hash_password(password, &salt);
        self.run("create_user", |conn| {
            diesel::insert_into(users::table)
                .values(NewUserRow {
                    username,
                    password_hash: &password_hash,
                    salt: &salt,
                })
                .execute(conn)?;
            Ok(())
        })?;
        debug!(username, "Created user");
        Ok(())
    }

    /// Check a username/password pair.
    ///
    /// Unknown users, wrong passwords and query failures all yield `false`;
    /// a query failure is still available from [`RecordStore::last_error`].
    pub fn verify_login(&mut self, username: &str, password: &str) -> bool {
        let found = self.run("verify_login", |conn| {
            let row: Option<UserRow> = users::table
                .filter(users::username.eq(username))
                .select(UserRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row)
        });

        match found {
            Ok(Some(user)) => {
                let accepted = verify_password(password, &user.salt, &user.password_hash);
                if !accepted {
                    debug!(username, "Password mismatch");
                }
                accepted
            }
            Ok(None) => {
                debug!(username, "Unknown user");
                false
            }
            Err(_) => false,
        }
    }

    /// Make sure the bootstrap `admin` account exists.
    ///
    /// Leaves an existing `admin` untouched, whatever its password.
    ///
    /// # Errors
    /// Returns an error if the lookup or the insert fails.
    pub fn ensure_default_admin(&mut self) -> StoreResult<()> {
        let exists = self.run("ensure_default_admin", |conn| {
            let count: i64 = users::table
                .filter(users::username.eq(DEFAULT_ADMIN_USERNAME))
                .count()
                .get_result(conn)?;
            Ok(count > 0)
        })?;
        if exists {
            return Ok(());
        }

        self.create_user(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)?;
        warn!(
            username = DEFAULT_ADMIN_USERNAME,
            "Created default admin account with the placeholder password; change it"
        );
        Ok(())
    }

    /// Replace a user's salt and hash.
    ///
    /// # Errors
    /// Returns [`StoreError::StatementFailed`](crate::error::StoreError) if the
    /// user does not exist.
    pub fn change_password(&mut self, username: &str, new_password: &str) -> StoreResult<()> {
        let salt = generate_salt();
        let password_hash = hash_password(new_password, &salt);
        self.run("change_password", |conn| {
            let updated = diesel::update(users::table.filter(users::username.eq(username)))
                .set((
                    users::password_hash.eq(password_hash.as_str()),
                    users::salt.eq(salt.as_str()),
                ))
                .execute(conn)?;
            require_row(updated, format!("user named {username}"))
        })?;
        info!(username, "Password changed");
        Ok(())
    }

    /// Number of stored accounts.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_users(&mut self) -> StoreResult<i64> {
        self.run("count_users", |conn| {
            Ok(users::table.count().get_result::<i64>(conn)?)
        })
    }
}
