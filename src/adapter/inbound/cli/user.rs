//! Handlers for user accounts and `login`.

use dialoguer::Password;
use serde_json::json;

use crate::adapter::inbound::cli::command::{CredentialArgs, LoginArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::session::Session;
use crate::adapter::outbound::sqlite::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use crate::error::{Error, Result};

/// Take the password from the flag, or prompt for it without echo.
fn password(supplied: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = supplied {
        return Ok(password);
    }

    let prompt = Password::new().with_prompt("Password");
    let prompt = if confirm {
        prompt.with_confirmation("Repeat password", "Passwords do not match")
    } else {
        prompt
    };
    Ok(prompt.interact()?)
}

/// Execute `user add`.
pub fn execute_add(session: &Session, args: CredentialArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let password = password(args.password, true)?;
    store.create_user(&args.username, &password)?;

    if output::is_json() {
        output::json_output(json!({ "command": "user.add", "username": args.username }));
        return Ok(());
    }

    output::success(&format!("Created user {}", output::highlight(&args.username)));
    Ok(())
}

/// Execute `user passwd`.
pub fn execute_passwd(session: &Session, args: CredentialArgs) -> Result<()> {
    let mut store = session.open_store()?;
    let password = password(args.password, true)?;
    store.change_password(&args.username, &password)?;

    if output::is_json() {
        output::json_output(json!({ "command": "user.passwd", "username": args.username }));
        return Ok(());
    }

    output::success(&format!("Changed password for {}", output::highlight(&args.username)));
    Ok(())
}

/// Execute `login`.
///
/// A rejected login is an error so the process exits non-zero.
pub fn execute_login(session: &Session, args: LoginArgs) -> Result<()> {
    let CredentialArgs { username, password: supplied } = args.credentials;
    let mut store = session.open_store()?;
    let password = password(supplied, false)?;

    if !store.verify_login(&username, &password) {
        if let Some(err) = store.last_error() {
            return Err(err.clone().into());
        }
        return Err(Error::LoginRejected(username));
    }

    let default_credentials =
        username == DEFAULT_ADMIN_USERNAME && password == DEFAULT_ADMIN_PASSWORD;
    if default_credentials {
        output::warning("The admin account still uses the default password");
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "login",
            "username": username,
            "accepted": true,
            "default_credentials": default_credentials,
        }));
        return Ok(());
    }

    output::success(&format!("Logged in as {}", output::highlight(&username)));
    if default_credentials {
        output::hint("run `servicebay user passwd admin` to change it");
    }
    Ok(())
}
