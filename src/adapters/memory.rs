use crate::domain::model::Foyer;
use crate::domain::ports::FoyerRepository;
use crate::utils::error::{FoyerError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Foyer>,
}

/// 以識別碼排序的記憶體 repository，clone 之後共用同一份資料
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoyerRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryFoyerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 預先載入紀錄；沒有識別碼的紀錄會依序指派
    pub fn with_foyers(foyers: impl IntoIterator<Item = Foyer>) -> Result<Self> {
        let mut table = Table::default();
        for foyer in foyers {
            Self::upsert(&mut table, foyer)?;
        }
        Ok(Self {
            table: Arc::new(RwLock::new(table)),
        })
    }

    fn upsert(table: &mut Table, mut foyer: Foyer) -> Result<Foyer> {
        let id = match foyer.id_foyer() {
            Some(id) => id,
            None => {
                let id = table.next_id.checked_add(1).ok_or_else(|| {
                    FoyerError::PersistenceError {
                        message: "identifier sequence exhausted".to_string(),
                    }
                })?;
                foyer.assign_id(id);
                id
            }
        };
        table.next_id = table.next_id.max(id);
        table.rows.insert(id, foyer.clone());
        Ok(foyer)
    }

    fn poisoned<T>(_: T) -> FoyerError {
        FoyerError::PersistenceError {
            message: "in-memory table lock poisoned".to_string(),
        }
    }
}

#[async_trait]
impl FoyerRepository for InMemoryFoyerRepository {
    async fn find_all(&self) -> Result<Vec<Foyer>> {
        let table = self.table.read().map_err(Self::poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Foyer>> {
        let table = self.table.read().map_err(Self::poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, foyer: Foyer) -> Result<Foyer> {
        let mut table = self.table.write().map_err(Self::poisoned)?;
        let saved = Self::upsert(&mut table, foyer)?;
        tracing::debug!("Saved {} in memory", saved);
        Ok(saved)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let table = self.table.read().map_err(Self::poisoned)?;
        Ok(table.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut table = self.table.write().map_err(Self::poisoned)?;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(FoyerError::NotFound { id })?;
        tracing::debug!("Deleted foyer {} from memory", id);
        Ok(())
    }
}
