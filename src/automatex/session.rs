//! # Session Context
//!
//! Who is signed in, and as what. A [`Session`] is created by sign-in or sign-up
//! and removed by sign-out; there is no ambient "current user" anywhere else.
//! Commands that care receive the session from the store through the API.
//!
//! There is no authentication backend. A session records the role the user
//! picked, nothing is verified, and the admin gate ([`require_role`]) trusts
//! that record.

use crate::error::{MarketError, Result};
use crate::model::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ADMIN_DENIED: &str = "You don't have permission to access the admin panel";

/// Sign-in details prefilled by the "use demo account" shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCredentials {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

impl Role {
    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Manage platform & users",
            Role::Creator => "Sell your projects",
            Role::Customer => "Buy & explore projects",
            Role::Educator => "Teach & guide learners",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Admin => "♛",
            Role::Creator => "⚡",
            Role::Customer => "🛒",
            Role::Educator => "📖",
        }
    }

    pub fn demo_credentials(&self) -> DemoCredentials {
        match self {
            Role::Admin => DemoCredentials {
                email: "admin@automatex.com",
                password: "Admin@123",
                name: "Admin Demo",
            },
            Role::Creator => DemoCredentials {
                email: "creator@automatex.com",
                password: "Creator@123",
                name: "Creator Demo",
            },
            Role::Customer => DemoCredentials {
                email: "customer@automatex.com",
                password: "Customer@123",
                name: "Customer Demo",
            },
            Role::Educator => DemoCredentials {
                email: "educator@automatex.com",
                password: "Educator@123",
                name: "Educator Demo",
            },
        }
    }
}

/// Extra sign-up fields, which depend on the chosen role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Admin,
    Creator {
        company_name: Option<String>,
        portfolio_url: Option<String>,
    },
    Customer {
        phone_number: Option<String>,
    },
    Educator {
        institution: Option<String>,
        subject: Option<String>,
    },
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Admin => Role::Admin,
            RoleProfile::Creator { .. } => Role::Creator,
            RoleProfile::Customer { .. } => Role::Customer,
            RoleProfile::Educator { .. } => Role::Educator,
        }
    }

    /// A profile for `role` with every optional field left blank.
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Admin => RoleProfile::Admin,
            Role::Creator => RoleProfile::Creator {
                company_name: None,
                portfolio_url: None,
            },
            Role::Customer => RoleProfile::Customer { phone_number: None },
            Role::Educator => RoleProfile::Educator {
                institution: None,
                subject: None,
            },
        }
    }

    /// Filled-in fields as `(label, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let pairs: Vec<(&'static str, &Option<String>)> = match self {
            RoleProfile::Admin => vec![],
            RoleProfile::Creator {
                company_name,
                portfolio_url,
            } => vec![("Company", company_name), ("Portfolio", portfolio_url)],
            RoleProfile::Customer { phone_number } => vec![("Phone", phone_number)],
            RoleProfile::Educator {
                institution,
                subject,
            } => vec![("Institution", institution), ("Subject", subject)],
        };
        pairs
            .into_iter()
            .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub role: Role,
    pub email: String,
    pub name: Option<String>,
    #[serde(default)]
    pub profile: Option<RoleProfile>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            email: email.into(),
            name: None,
            profile: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_profile(mut self, profile: RoleProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Name when known, email otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Passes the session through if it belongs to `role`.
pub fn require_role(session: Option<Session>, role: Role) -> Result<Session> {
    match session {
        Some(s) if s.role == role => Ok(s),
        _ => match role {
            Role::Admin => Err(MarketError::AccessDenied(ADMIN_DENIED.to_string())),
            other => Err(MarketError::AccessDenied(format!(
                "This page is only available to {} accounts",
                other.label()
            ))),
        },
    }
}

/// Passes the session through if anybody is signed in.
pub fn require_session(session: Option<Session>) -> Result<Session> {
    session.ok_or_else(|| MarketError::AccessDenied("Please sign in first".to_string()))
}
