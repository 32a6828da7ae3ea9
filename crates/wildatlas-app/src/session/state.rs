//! Session state and commands
//!
//! `SessionCommand` is the unified command type sent by any frontend.
//! `SessionSnapshot` is the shared state frontends read back.

/// Which top-level screen the frontend should present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in / sign-up flow
    CreateProfile,
    /// First-run intro, shown until completed once
    Onboarding,
    /// The main tabbed catalog
    Main,
}

/// Route from the two persistent facts that decide the entry screen
pub fn resolve_screen(is_logged_in: bool, has_completed_onboarding: bool) -> Screen {
    if !is_logged_in {
        Screen::CreateProfile
    } else if !has_completed_onboarding {
        Screen::Onboarding
    } else {
        Screen::Main
    }
}

/// Which gateway operation a worker ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOp {
    SignUp,
    SignIn,
    SignInAnonymously,
    SignOut,
    DeleteAccount,
}

/// Commands sent by any frontend
pub enum SessionCommand {
    SignUp { email: String, password: String },
    SignIn { email: String, password: String },
    SignInAnonymously,
    SignOut,
    DeleteAccount,
    CompleteOnboarding,

    // Shut down the session loop
    Shutdown,

    // Internal: a gateway call finished on a worker thread (not sent by
    // frontends)
    AuthCompleted {
        generation: u64,
        op: AuthOp,
        result: Result<(), String>,
    },
}

/// Snapshot of session state — shared between controller and frontends
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub is_logged_in: bool,
    /// True while a gateway call is in flight
    pub is_authenticating: bool,
    /// Last gateway or validation error, cleared on the next attempt
    pub last_error: Option<String>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            screen: Screen::CreateProfile,
            is_logged_in: false,
            is_authenticating: false,
            last_error: None,
        }
    }
}
