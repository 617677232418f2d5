//! Sign-in, sign-up and sign-out.
//!
//! Forms are validated before anything is written: a rejected form leaves the
//! current session untouched. Credentials are not checked against anything.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MarketError, Result};
use crate::model::Role;
use crate::session::{RoleProfile, Session};
use crate::store::StateStore;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SignInForm {
    pub role: Role,
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// The form as filled by the demo-account shortcut.
    pub fn demo(role: Role) -> Self {
        let creds = role.demo_credentials();
        Self {
            role,
            email: creds.email.to_string(),
            password: creds.password.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
    pub profile: RoleProfile,
}

impl SignUpForm {
    pub fn role(&self) -> Role {
        self.profile.role()
    }
}

fn require_field(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MarketError::Validation(format!("{} is required", name)));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    require_field(email, "Email")?;
    if !email.contains('@') {
        return Err(MarketError::Validation(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(())
}

fn validate_sign_in(form: &SignInForm) -> Result<()> {
    validate_email(&form.email)?;
    require_field(&form.password, "Password")
}

fn validate_sign_up(form: &SignUpForm) -> Result<()> {
    require_field(&form.full_name, "Full name")?;
    validate_email(&form.email)?;
    require_field(&form.password, "Password")?;
    if form.password != form.confirm_password {
        return Err(MarketError::Validation("Passwords don't match".to_string()));
    }
    if !form.agreed_to_terms {
        return Err(MarketError::Validation(
            "Please agree to the terms and conditions".to_string(),
        ));
    }
    Ok(())
}

pub fn sign_in<S: StateStore>(store: &mut S, form: SignInForm) -> Result<CmdResult> {
    validate_sign_in(&form)?;

    let session = Session::new(form.role, form.email.trim());
    store.save_session(&session)?;
    info!(role = %session.role, email = %session.email, "signed in");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Signed in as {} ({})",
        session.email,
        session.role.label()
    )));
    Ok(result.with_session(session))
}

pub fn sign_up<S: StateStore>(store: &mut S, form: SignUpForm) -> Result<CmdResult> {
    validate_sign_up(&form)?;

    let session = Session::new(form.role(), form.email.trim())
        .with_name(form.full_name.trim())
        .with_profile(form.profile);
    store.save_session(&session)?;
    info!(role = %session.role, email = %session.email, "account created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Welcome to AutomateX, {}! Your {} account is ready.",
        session.display_name(),
        session.role.label()
    )));
    Ok(result.with_session(session))
}

pub fn sign_out<S: StateStore>(store: &mut S) -> Result<CmdResult> {
    let previous = store.load_session()?;
    let removed = store.clear_session()?;

    let mut result = CmdResult::default();
    match previous.filter(|_| removed) {
        Some(session) => {
            info!(email = %session.email, "signed out");
            result.add_message(CmdMessage::success(format!(
                "Signed out {}",
                session.email
            )));
        }
        None => result.add_message(CmdMessage::warning("Nobody is signed in")),
    }
    Ok(result)
}

pub fn whoami<S: StateStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.load_session()? {
        Some(session) => Ok(result.with_session(session)),
        None => {
            result.add_message(CmdMessage::info("Not signed in"));
            Ok(result)
        }
    }
}
