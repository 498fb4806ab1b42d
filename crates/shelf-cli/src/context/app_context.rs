use std::path::PathBuf;

use anyhow::Context;
use shelf_auth::{AuthError, DemoVerifier, FileStorage, RestoreOutcome, SessionStore};
use shelf_config::ShelfConfig;
use shelf_core::route::{Route, RouteDecision, guard};
use shelf_store::CategoryStore;

use crate::cli::GlobalFlags;

pub type CliSessionStore = SessionStore<DemoVerifier, FileStorage>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ShelfConfig,
    pub session: CliSessionStore,
    pub categories: CategoryStore,
    pub restore: RestoreOutcome,
}

impl AppContext {
    /// Restore the persisted session and seed the category store.
    pub fn init(config: ShelfConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let session_dir = resolve_session_dir(flags, &config)?;
        tracing::debug!(dir = %session_dir.display(), "using session directory");

        let mut session = SessionStore::new(
            DemoVerifier::from_config(&config.auth),
            FileStorage::new(session_dir),
        );
        let restore = session
            .restore()
            .context("failed to restore persisted session")?;

        if let RestoreOutcome::Discarded { reason } = &restore {
            if !flags.quiet {
                if flags.verbose {
                    eprintln!("shelf: persisted session was discarded: {reason}");
                }
                eprintln!("shelf: please log in again");
            }
        }

        let categories = CategoryStore::with_seed_catalog(config.general.default_image_url.clone());

        Ok(Self {
            config,
            session,
            categories,
            restore,
        })
    }

    /// Gate a dashboard route on the current session.
    pub fn require_route(&self, route: &Route) -> anyhow::Result<()> {
        match guard(route, self.session.state()) {
            RouteDecision::Render(_) => Ok(()),
            RouteDecision::Redirect(_) | RouteDecision::Pending => {
                Err(AuthError::NotAuthenticated.into())
            }
        }
    }
}

fn resolve_session_dir(flags: &GlobalFlags, config: &ShelfConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &flags.session_dir {
        return Ok(dir.clone());
    }
    config
        .storage
        .resolved_session_dir()
        .context("could not determine a session directory; pass --session-dir")
}
