//! Wiring of adapters into the lifecycle service.
//!
//! Role commands run synchronously on the main thread. Notifications are
//! delivered by a worker on a small tokio runtime that lives as long as the
//! command; [`RoleRuntime::shutdown`] drains it before the process exits.

use std::sync::Arc;

use rolekeeper_adapters::{JsonFileRoleRepository, LoggingNotifier};
use rolekeeper_core::{
    application::{DispatchReport, NotificationDispatcher, RoleLifecycleService},
    domain::NameValidator,
};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub struct RoleRuntime {
    runtime: Runtime,
    service: RoleLifecycleService,
}

impl RoleRuntime {
    /// Build the runtime, the JSON store at `storage.path`, and the service.
    pub fn start(config: &AppConfig) -> CliResult<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(2)
            .thread_name("rolekeeper-notify")
            .build()
            .with_cli_context(|| "failed to start the notification runtime")?;

        debug!(store = %config.storage.path.display(), "Opening role store");
        let repository = Box::new(JsonFileRoleRepository::new(&config.storage.path));
        let dispatcher =
            NotificationDispatcher::start(Arc::new(LoggingNotifier::new()), runtime.handle());
        let service = RoleLifecycleService::new(
            repository,
            dispatcher,
            NameValidator::new(config.policy.clone()),
        );

        Ok(Self { runtime, service })
    }

    pub fn service(&self) -> &RoleLifecycleService {
        &self.service
    }

    /// Wait for queued notifications, then stop the runtime.
    pub fn shutdown(self) -> DispatchReport {
        let Self { runtime, service } = self;
        runtime.block_on(service.shutdown())
    }
}
