//! Integration tests for rolekeeper-core.
//!
//! Drives the public API end to end against a small in-test store, so the
//! lifecycle rules are checked without any adapter crate.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use rolekeeper_core::prelude::*;
use tokio::runtime::Handle;

#[derive(Default)]
struct VecStore {
    roles: Mutex<(i64, BTreeMap<i64, Role>)>,
}

impl RolePort for VecStore {
    fn save(&self, role: Role) -> Result<Role, RepositoryError> {
        let mut guard = self.roles.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let (next, roles) = &mut *guard;

        if roles
            .values()
            .any(|r| r.name() == role.name() && r.id() != role.id())
        {
            return Err(RepositoryError::Conflict {
                name: role.name().to_string(),
            });
        }

        let role = match role.id() {
            Some(_) => role,
            None => {
                *next += 1;
                role.assign_id(RoleId::new(*next).map_err(|e| RepositoryError::Corrupted {
                    reason: e.to_string(),
                })?)
            }
        };
        if let Some(id) = role.id() {
            roles.insert(id.get(), role.clone());
        }
        Ok(role)
    }

    fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RepositoryError> {
        Ok(self.roles.lock().unwrap().1.get(&id.get()).cloned())
    }

    fn find_by_name(&self, name: &RoleName) -> Result<Option<Role>, RepositoryError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .1
            .values()
            .find(|r| r.name() == name)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        Ok(self.roles.lock().unwrap().1.values().cloned().collect())
    }

    fn find_by_name_containing(&self, pattern: &str) -> Result<Vec<Role>, RepositoryError> {
        let needle = pattern.to_uppercase();
        Ok(self
            .roles
            .lock()
            .unwrap()
            .1
            .values()
            .filter(|r| r.name().as_str().contains(&needle))
            .cloned()
            .collect())
    }

    fn exists_by_name(&self, name: &RoleName) -> Result<bool, RepositoryError> {
        Ok(self.find_by_name(name)?.is_some())
    }

    fn delete_by_id(&self, id: RoleId) -> Result<bool, RepositoryError> {
        Ok(self.roles.lock().unwrap().1.remove(&id.get()).is_some())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.roles.lock().unwrap().1.len() as u64)
    }
}

#[derive(Default)]
struct CountingNotifier {
    events: Mutex<Vec<String>>,
}

impl NotificationPort for CountingNotifier {
    fn notify_role_created(&self, role: &Role) -> Result<(), NotificationError> {
        self.events.lock().unwrap().push(format!("created {}", role.name()));
        Ok(())
    }

    fn notify_role_updated(&self, role: &Role) -> Result<(), NotificationError> {
        self.events.lock().unwrap().push(format!("updated {}", role.name()));
        Ok(())
    }

    fn notify_role_deleted(&self, id: RoleId) -> Result<(), NotificationError> {
        self.events.lock().unwrap().push(format!("deleted {id}"));
        Ok(())
    }
}

fn service(notifier: Arc<CountingNotifier>) -> RoleLifecycleService {
    RoleLifecycleService::new(
        Box::new(VecStore::default()),
        NotificationDispatcher::start(notifier, &Handle::current()),
        NameValidator::default(),
    )
}

#[tokio::test]
async fn protected_admin_role_scenario() {
    let notifier = Arc::new(CountingNotifier::default());
    let svc = service(Arc::clone(&notifier));

    let admin = svc.create("admin ").unwrap();
    assert_eq!(admin.name().as_str(), "ADMIN");

    assert_eq!(
        svc.create("ADMIN"),
        Err(RoleError::AlreadyExists {
            name: "ADMIN".into()
        })
    );

    let id = admin.id().unwrap();
    assert_eq!(svc.get_by_id(id).unwrap(), admin);
    assert!(matches!(svc.delete(id), Err(RoleError::Forbidden { .. })));
    assert!(matches!(
        svc.update(id, "superuser"),
        Err(RoleError::Forbidden { .. })
    ));

    let report = svc.shutdown().await;
    assert_eq!(report.delivered, 1);
    assert_eq!(*notifier.events.lock().unwrap(), vec!["created ADMIN"]);
}

#[tokio::test]
async fn rename_then_delete_scenario() {
    let notifier = Arc::new(CountingNotifier::default());
    let svc = service(Arc::clone(&notifier));

    let analyst = svc.create("Analyst").unwrap();
    let id = analyst.id().unwrap();

    let renamed = svc.update(id, "  analyst team ").unwrap();
    assert_eq!(renamed.name().as_str(), "ANALYST TEAM");
    assert_eq!(renamed.id(), Some(id));
    assert_eq!(renamed.created_at(), analyst.created_at());

    assert_eq!(svc.count(), Ok(1));
    svc.delete(id).unwrap();
    assert_eq!(svc.count(), Ok(0));
    assert_eq!(
        svc.get_by_id(id),
        Err(RoleError::NotFound(RoleLookup::Id(id)))
    );

    svc.shutdown().await;
    assert_eq!(
        *notifier.events.lock().unwrap(),
        vec![
            "created ANALYST".to_string(),
            "updated ANALYST TEAM".to_string(),
            format!("deleted {id}"),
        ]
    );
}

#[tokio::test]
async fn spelling_variants_collide() {
    let svc = service(Arc::default());

    svc.create("ops team").unwrap();
    for variant in ["OPS TEAM", "  ops   team ", "Ops\tTeam"] {
        assert!(
            matches!(svc.create(variant), Err(RoleError::AlreadyExists { .. })),
            "{variant:?} should collide"
        );
    }
    assert_eq!(svc.exists("ops  TEAM"), Ok(true));
    assert_eq!(svc.get_by_name("ops team").unwrap().name().as_str(), "OPS TEAM");

    svc.shutdown().await;
}

#[tokio::test]
async fn search_and_list() {
    let svc = service(Arc::default());

    for name in ["ops", "devops", "qa"] {
        svc.create(name).unwrap();
    }

    assert_eq!(svc.list().unwrap().len(), 3);
    let hits: Vec<_> = svc
        .search_by_name("Ops")
        .unwrap()
        .into_iter()
        .map(|r| r.name().to_string())
        .collect();
    assert_eq!(hits, vec!["OPS", "DEVOPS"]);
    assert!(svc.search_by_name("nothing").unwrap().is_empty());

    svc.create("analyst team").unwrap();
    let spaced = svc.search_by_name("  Analyst    TEAM ").unwrap();
    assert_eq!(spaced.len(), 1);
    assert_eq!(spaced[0].name().as_str(), "ANALYST TEAM");
    assert!(matches!(
        svc.search_by_name(""),
        Err(RoleError::InvalidInput(ValidationError::BlankPattern))
    ));

    svc.shutdown().await;
}

#[tokio::test]
async fn custom_policy_is_honoured() {
    let policy = NamePolicy::permissive(10)
        .with_reserved_names(["nobody"])
        .with_protected_names(["owner"]);

    let svc = RoleLifecycleService::new(
        Box::new(VecStore::default()),
        NotificationDispatcher::start(Arc::new(CountingNotifier::default()), &Handle::current()),
        NameValidator::new(policy),
    );

    assert!(matches!(
        svc.create("Nobody"),
        Err(RoleError::InvalidInput(ValidationError::ReservedName { .. }))
    ));
    assert!(matches!(
        svc.create("elevenchars"),
        Err(RoleError::InvalidInput(ValidationError::TooLong { .. }))
    ));
    // The default reserved names are not part of a permissive policy.
    assert!(svc.create("system").is_ok());

    let owner = svc.create("owner").unwrap();
    assert!(matches!(
        svc.delete(owner.id().unwrap()),
        Err(RoleError::Forbidden { .. })
    ));

    svc.shutdown().await;
}
