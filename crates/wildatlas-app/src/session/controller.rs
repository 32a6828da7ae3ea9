//! Session controller
//!
//! Owns the preference store handle and the auth gateway, and processes
//! commands from all frontends through a single crossbeam channel. Gateway
//! calls run on worker threads; the preference store is only touched after
//! a confirmed outcome, so a failed or abandoned auth attempt never leaves
//! a partial write behind.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::auth::{normalize_email, validate_credentials, validate_new_password, AuthGateway};
use crate::data::Preferences;
use crate::error::Result;

use super::state::{resolve_screen, AuthOp, SessionCommand, SessionSnapshot};

pub struct SessionController {
    cmd_rx: Receiver<SessionCommand>,
    cmd_tx: Sender<SessionCommand>,
    shared_state: Arc<Mutex<SessionSnapshot>>,
    prefs: Arc<Preferences>,
    gateway: Arc<dyn AuthGateway>,
    /// Monotonically increasing counter to discard stale worker results
    auth_generation: u64,
    login_rx: Receiver<bool>,
}

impl SessionController {
    pub fn new(
        cmd_rx: Receiver<SessionCommand>,
        cmd_tx: Sender<SessionCommand>,
        shared_state: Arc<Mutex<SessionSnapshot>>,
        prefs: Arc<Preferences>,
        gateway: Arc<dyn AuthGateway>,
    ) -> Self {
        let login_rx = gateway.state().subscribe();
        Self {
            cmd_rx,
            cmd_tx,
            shared_state,
            prefs,
            gateway,
            auth_generation: 0,
            login_rx,
        }
    }

    /// Run the controller event loop (blocking, call from a dedicated thread)
    pub fn run(&mut self) {
        self.refresh_screen();

        loop {
            // Process commands (blocking with timeout so we can poll the
            // gateway's login listener)
            match self.cmd_rx.recv_timeout(Duration::from_millis(50)) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.poll_login_changes();
        }
    }

    /// Handle a single command. Returns true if the loop should exit.
    fn handle_command(&mut self, cmd: SessionCommand) -> bool {
        match cmd {
            SessionCommand::Shutdown => return true,

            SessionCommand::SignUp { email, password } => {
                let check = validate_credentials(&email, &password)
                    .and_then(|_| validate_new_password(&password));
                match check {
                    Err(e) => self.fail(e.to_string()),
                    Ok(()) => self.spawn_auth(AuthOp::SignUp, move |gw| {
                        gw.sign_up(normalize_email(&email), &password)
                    }),
                }
            }
            SessionCommand::SignIn { email, password } => {
                match validate_credentials(&email, &password) {
                    Err(e) => self.fail(e.to_string()),
                    Ok(()) => self.spawn_auth(AuthOp::SignIn, move |gw| {
                        gw.sign_in(normalize_email(&email), &password)
                    }),
                }
            }
            SessionCommand::SignInAnonymously => {
                self.spawn_auth(AuthOp::SignInAnonymously, |gw| gw.sign_in_anonymously());
            }
            SessionCommand::SignOut => {
                self.spawn_auth(AuthOp::SignOut, |gw| gw.sign_out());
            }
            SessionCommand::DeleteAccount => {
                self.spawn_auth(AuthOp::DeleteAccount, |gw| gw.delete_account());
            }

            SessionCommand::CompleteOnboarding => {
                if let Err(e) = self.prefs.onboarding.set_completed(true) {
                    self.fail(e.to_string());
                }
                self.refresh_screen();
            }

            SessionCommand::AuthCompleted {
                generation,
                op,
                result,
            } => {
                self.finish_auth(generation, op, result);
            }
        }
        false
    }

    /// Run a blocking gateway call on a worker thread
    fn spawn_auth<F>(&mut self, op: AuthOp, call: F)
    where
        F: FnOnce(&dyn AuthGateway) -> Result<()> + Send + 'static,
    {
        self.auth_generation += 1;
        let generation = self.auth_generation;
        {
            let mut state = self.lock_state();
            state.is_authenticating = true;
            state.last_error = None;
        }

        let gateway = self.gateway.clone();
        let tx = self.cmd_tx.clone();
        std::thread::spawn(move || {
            let result = call(gateway.as_ref()).map_err(|e| e.to_string());
            let _ = tx.send(SessionCommand::AuthCompleted {
                generation,
                op,
                result,
            });
        });
    }

    fn finish_auth(
        &mut self,
        generation: u64,
        op: AuthOp,
        result: std::result::Result<(), String>,
    ) {
        if generation != self.auth_generation {
            tracing::debug!(generation, ?op, "discarding stale auth result");
            return;
        }

        {
            let mut state = self.lock_state();
            state.is_authenticating = false;
        }

        match result {
            Ok(()) => {
                tracing::info!(?op, "auth operation succeeded");
                if matches!(op, AuthOp::SignOut | AuthOp::DeleteAccount) {
                    self.clear_user_data();
                }
            }
            Err(message) => {
                tracing::warn!(?op, %message, "auth operation failed");
                self.fail(message);
            }
        }

        self.refresh_screen();
    }

    // The gateway never touches the preference store; clearing after a
    // confirmed logout or deletion is this controller's job.
    fn clear_user_data(&self) {
        if let Err(e) = self.prefs.favorites.clear() {
            tracing::warn!(error = %e, "failed to clear favorites");
        }
        if let Err(e) = self.prefs.profile.clear() {
            tracing::warn!(error = %e, "failed to clear profile");
        }
        if let Err(e) = self.prefs.onboarding.set_completed(false) {
            tracing::warn!(error = %e, "failed to reset onboarding flag");
        }
    }

    fn poll_login_changes(&mut self) {
        let mut changed = false;
        while self.login_rx.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.refresh_screen();
        }
    }

    fn refresh_screen(&self) {
        let logged_in = self.gateway.state().is_logged_in();
        let onboarded = self.prefs.onboarding.has_completed().unwrap_or(false);
        let mut state = self.lock_state();
        state.is_logged_in = logged_in;
        state.screen = resolve_screen(logged_in, onboarded);
    }

    fn fail(&self, message: String) {
        let mut state = self.lock_state();
        state.is_authenticating = false;
        state.last_error = Some(message);
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionSnapshot> {
        self.shared_state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::session::state::Screen;
    use crate::auth::AuthState;
    use crossbeam_channel::bounded;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread::JoinHandle;
    use std::time::Instant;

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("wildatlas_session_test_{}.json", id))
    }

    /// Test double standing in for the external identity provider
    struct FakeGateway {
        state: AuthState,
        fail_message: Mutex<Option<String>>,
        calls: AtomicU32,
    }

    impl FakeGateway {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                state: AuthState::new(),
                fail_message: Mutex::new(None),
                calls: AtomicU32::new(0),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            let gw = Self::new();
            *gw.fail_message.lock().unwrap() = Some(message.to_string());
            gw
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }

        fn complete(&self, logged_in: bool) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = self.fail_message.lock().unwrap().clone() {
                return Err(AppError::Auth(message));
            }
            self.state.set_logged_in(logged_in);
            Ok(())
        }
    }

    impl AuthGateway for FakeGateway {
        fn name(&self) -> &'static str {
            "Fake"
        }

        fn state(&self) -> AuthState {
            self.state.clone()
        }

        fn sign_up(&self, _email: &str, _password: &str) -> Result<()> {
            self.complete(true)
        }

        fn sign_in(&self, _email: &str, _password: &str) -> Result<()> {
            self.complete(true)
        }

        fn sign_in_anonymously(&self) -> Result<()> {
            self.complete(true)
        }

        fn sign_out(&self) -> Result<()> {
            self.complete(false)
        }

        fn delete_account(&self) -> Result<()> {
            self.complete(false)
        }
    }

    struct Harness {
        tx: Sender<SessionCommand>,
        state: Arc<Mutex<SessionSnapshot>>,
        prefs: Arc<Preferences>,
        path: PathBuf,
        handle: Option<JoinHandle<()>>,
    }

    impl Harness {
        fn start(gateway: Arc<FakeGateway>) -> Self {
            let path = temp_path();
            let prefs = Arc::new(Preferences::open_at(&path).unwrap());
            let (tx, rx) = bounded(16);
            let state = Arc::new(Mutex::new(SessionSnapshot::default()));

            let mut controller = SessionController::new(
                rx,
                tx.clone(),
                state.clone(),
                prefs.clone(),
                gateway,
            );
            let handle = std::thread::spawn(move || controller.run());

            Self {
                tx,
                state,
                prefs,
                path,
                handle: Some(handle),
            }
        }

        fn snapshot(&self) -> SessionSnapshot {
            self.state.lock().unwrap().clone()
        }

        fn wait_until(&self, check: impl Fn(&SessionSnapshot) -> bool) -> bool {
            let deadline = Instant::now() + Duration::from_secs(5);
            while Instant::now() < deadline {
                if check(&self.snapshot()) {
                    return true;
                }
                std::thread::sleep(Duration::from_millis(10));
            }
            false
        }
    }

    impl Drop for Harness {
        fn drop(&mut self) {
            let _ = self.tx.send(SessionCommand::Shutdown);
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
            let _ = fs::remove_file(&self.path);
        }
    }

    fn sign_in(harness: &Harness) {
        harness
            .tx
            .send(SessionCommand::SignIn {
                email: "ada@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap();
        assert!(harness.wait_until(|s| s.is_logged_in));
    }

    #[test]
    fn test_sign_in_routes_to_onboarding_first() {
        let harness = Harness::start(FakeGateway::new());

        assert_eq!(harness.snapshot().screen, Screen::CreateProfile);
        sign_in(&harness);

        assert!(harness.wait_until(|s| s.screen == Screen::Onboarding));
    }

    #[test]
    fn test_complete_onboarding_routes_to_main() {
        let harness = Harness::start(FakeGateway::new());

        sign_in(&harness);
        harness.tx.send(SessionCommand::CompleteOnboarding).unwrap();

        assert!(harness.wait_until(|s| s.screen == Screen::Main));
        assert!(harness.prefs.onboarding.has_completed().unwrap());
    }

    #[test]
    fn test_sign_out_clears_user_data() {
        let harness = Harness::start(FakeGateway::new());

        sign_in(&harness);
        harness.prefs.favorites.add("banff_canada").unwrap();
        harness.prefs.profile.save(Some("Ada"), Some(3)).unwrap();
        harness.tx.send(SessionCommand::CompleteOnboarding).unwrap();
        assert!(harness.wait_until(|s| s.screen == Screen::Main));

        harness.tx.send(SessionCommand::SignOut).unwrap();
        assert!(harness.wait_until(|s| !s.is_logged_in));
        assert!(harness.wait_until(|s| s.screen == Screen::CreateProfile));

        assert_eq!(harness.prefs.favorites.count().unwrap(), 0);
        assert_eq!(harness.prefs.profile.get().unwrap().display_name, "Username");
        assert!(!harness.prefs.onboarding.has_completed().unwrap());
    }

    #[test]
    fn test_anonymous_delete_clears_user_data() {
        let harness = Harness::start(FakeGateway::new());

        harness.tx.send(SessionCommand::SignInAnonymously).unwrap();
        assert!(harness.wait_until(|s| s.is_logged_in));

        harness.prefs.favorites.add("kruger_southafrica").unwrap();
        harness.tx.send(SessionCommand::DeleteAccount).unwrap();
        assert!(harness.wait_until(|s| !s.is_logged_in));

        assert_eq!(harness.prefs.favorites.count().unwrap(), 0);
    }

    #[test]
    fn test_failed_sign_in_preserves_preferences() {
        let harness = Harness::start(FakeGateway::failing("The password is invalid"));

        harness.prefs.favorites.add("banff_canada").unwrap();
        harness
            .tx
            .send(SessionCommand::SignIn {
                email: "ada@example.com".to_string(),
                password: "wrongpw".to_string(),
            })
            .unwrap();

        assert!(harness.wait_until(|s| s.last_error.is_some()));
        let snapshot = harness.snapshot();
        assert_eq!(snapshot.last_error.as_deref(), Some("The password is invalid"));
        assert!(!snapshot.is_logged_in);
        assert_eq!(harness.prefs.favorites.count().unwrap(), 1);
    }

    #[test]
    fn test_validation_failure_never_reaches_gateway() {
        let gateway = FakeGateway::new();
        let harness = Harness::start(gateway.clone());

        harness
            .tx
            .send(SessionCommand::SignUp {
                email: "ada@example.com".to_string(),
                password: "short".to_string(),
            })
            .unwrap();
        assert!(harness.wait_until(|s| s.last_error.is_some()));
        assert_eq!(
            harness.snapshot().last_error.as_deref(),
            Some("Password must be at least 6 characters")
        );

        harness
            .tx
            .send(SessionCommand::SignIn {
                email: "   ".to_string(),
                password: "".to_string(),
            })
            .unwrap();
        assert!(harness.wait_until(|s| {
            s.last_error.as_deref() == Some("Enter email and password")
        }));

        assert_eq!(gateway.call_count(), 0);
    }

    #[test]
    fn test_stale_auth_result_is_discarded() {
        let harness = Harness::start(FakeGateway::new());

        harness.prefs.favorites.add("banff_canada").unwrap();

        // A result from a generation that was never issued must not be
        // treated as a confirmed sign-out.
        harness
            .tx
            .send(SessionCommand::AuthCompleted {
                generation: 99,
                op: AuthOp::SignOut,
                result: Ok(()),
            })
            .unwrap();

        std::thread::sleep(Duration::from_millis(200));
        assert_eq!(harness.prefs.favorites.count().unwrap(), 1);
    }
}
