use metrics_exporter_prometheus::PrometheusHandle;
use petition_ai::config::{StorageBackend, StorageConfig};
use petition_ai::workflows::petition::{
    ApplicationStore, JsonFileStore, MemoryStore, PetitionService, StoreError, StoredApplication,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Store chosen at startup from `APP_STORAGE`.
#[derive(Debug)]
pub(crate) enum ConfiguredStore {
    Memory(MemoryStore),
    File(JsonFileStore),
}

impl ConfiguredStore {
    pub(crate) fn from_config(config: &StorageConfig) -> Self {
        match config.backend {
            StorageBackend::Memory => Self::Memory(MemoryStore::default()),
            StorageBackend::File => Self::File(JsonFileStore::new(&config.state_dir)),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Memory(_) => "in-memory".to_string(),
            Self::File(store) => store.path().display().to_string(),
        }
    }
}

impl ApplicationStore for ConfiguredStore {
    fn load(&self) -> Result<Option<StoredApplication>, StoreError> {
        match self {
            Self::Memory(store) => store.load(),
            Self::File(store) => store.load(),
        }
    }

    fn save(&self, stored: &StoredApplication) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.save(stored),
            Self::File(store) => store.save(stored),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.clear(),
            Self::File(store) => store.clear(),
        }
    }
}

pub(crate) fn open_service(
    config: &StorageConfig,
) -> Result<PetitionService<ConfiguredStore>, StoreError> {
    PetitionService::open(Arc::new(ConfiguredStore::from_config(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use petition_ai::workflows::petition::{Criterion, PetitionApplication};

    #[test]
    fn file_backend_resumes_previous_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StorageConfig {
            backend: StorageBackend::File,
            state_dir: dir.path().to_path_buf(),
        };

        let service = open_service(&config).expect("empty store opens");
        service.mutate(|application| {
            application.set_draft(Criterion::Judging, true);
            true
        });

        let resumed = open_service(&config).expect("stored state opens");
        assert!(resumed.read(|application| application.criterion(Criterion::Judging).is_draft));
    }

    #[test]
    fn memory_backend_starts_empty() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            state_dir: ".petition".into(),
        };

        let service = open_service(&config).expect("memory store opens");
        assert_eq!(service.snapshot(), PetitionApplication::default());
        assert_eq!(
            ConfiguredStore::from_config(&config).describe(),
            "in-memory"
        );
    }
}
