use crate::domain::model::Foyer;
use crate::domain::ports::{FoyerRepository, Storage};
use crate::utils::error::{FoyerError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

pub const DEFAULT_FILE_NAME: &str = "foyers.json";

/// 資料檔的內容
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoyerTable {
    next_id: i64,
    foyers: Vec<Foyer>,
}

/// 透過 [`Storage`] 將整張表存成單一 JSON 檔的 repository
pub struct FileFoyerRepository<S: Storage> {
    storage: S,
    file_name: String,
    // 序列化每次「讀取-修改-寫回」
    lock: Mutex<()>,
}

impl<S: Storage> FileFoyerRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_file_name(storage, DEFAULT_FILE_NAME)
    }

    pub fn with_file_name(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<FoyerTable> {
        match self.storage.read_file(&self.file_name).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(FoyerError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} does not exist yet, starting empty", self.file_name);
                Ok(FoyerTable::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn store(&self, table: &FoyerTable) -> Result<()> {
        let data = serde_json::to_vec_pretty(table)?;
        self.storage.write_file(&self.file_name, &data).await
    }
}

#[async_trait]
impl<S: Storage> FoyerRepository for FileFoyerRepository<S> {
    async fn find_all(&self) -> Result<Vec<Foyer>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.foyers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Foyer>> {
        let _guard = self.lock.lock().await;
        let table = self.load().await?;
        Ok(table
            .foyers
            .into_iter()
            .find(|foyer| foyer.id_foyer() == Some(id)))
    }

    async fn save(&self, mut foyer: Foyer) -> Result<Foyer> {
        let _guard = self.lock.lock().await;
        let mut table = self.load().await?;

        match foyer.id_foyer() {
            Some(id) => {
                table.next_id = table.next_id.max(id);
                match table
                    .foyers
                    .iter_mut()
                    .find(|existing| existing.id_foyer() == Some(id))
                {
                    Some(existing) => *existing = foyer.clone(),
                    None => table.foyers.push(foyer.clone()),
                }
            }
            None => {
                table.next_id = table.next_id.checked_add(1).ok_or_else(|| {
                    FoyerError::PersistenceError {
                        message: "identifier sequence exhausted".to_string(),
                    }
                })?;
                foyer.assign_id(table.next_id);
                table.foyers.push(foyer.clone());
            }
        }

        self.store(&table).await?;
        tracing::debug!("Saved {} to {}", foyer, self.file_name);
        Ok(foyer)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let table = self.load().await?;
        Ok(table.foyers.iter().any(|foyer| foyer.id_foyer() == Some(id)))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut table = self.load().await?;

        let before = table.foyers.len();
        table.foyers.retain(|foyer| foyer.id_foyer() != Some(id));
        if table.foyers.len() == before {
            return Err(FoyerError::NotFound { id });
        }

        self.store(&table).await?;
        tracing::debug!("Deleted foyer {} from {}", id, self.file_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use tempfile::TempDir;

    fn named(name: &str) -> Foyer {
        let mut foyer = Foyer::new();
        foyer.set_nom_foyer(name);
        foyer
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileFoyerRepository::new(LocalStorage::new(temp_dir.path()));

        assert!(repository.find_all().await.unwrap().is_empty());
        assert!(!repository.exists_by_id(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileFoyerRepository::new(LocalStorage::new(temp_dir.path()));
        repository.save(named("Nord")).await.unwrap();
        repository.save(named("Sud")).await.unwrap();

        let reopened = FileFoyerRepository::new(LocalStorage::new(temp_dir.path()));
        let names: Vec<String> = reopened
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|foyer| foyer.nom_foyer().to_string())
            .collect();
        assert_eq!(names, vec!["Nord", "Sud"]);
        assert!(temp_dir.path().join(DEFAULT_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileFoyerRepository::new(LocalStorage::new(temp_dir.path()));
        let first = repository.save(named("A")).await.unwrap();
        repository.delete_by_id(first.id_foyer().unwrap()).await.unwrap();

        let second = repository.save(named("B")).await.unwrap();
        assert_eq!(second.id_foyer(), Some(2));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("custom.json"), b"not json").unwrap();
        let repository =
            FileFoyerRepository::with_file_name(LocalStorage::new(temp_dir.path()), "custom.json");

        let err = repository.find_all().await.unwrap_err();
        assert!(matches!(err, FoyerError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_exhausted_sequence_is_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        let repository = FileFoyerRepository::new(LocalStorage::new(temp_dir.path()));
        repository.save(Foyer::with_id(i64::MAX)).await.unwrap();

        let err = repository.save(named("overflow")).await.unwrap_err();
        assert!(matches!(err, FoyerError::PersistenceError { .. }));

        // 失敗時不寫回資料檔
        let stored = repository.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id_foyer(), Some(i64::MAX));
    }
}
