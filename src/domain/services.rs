use crate::domain::model::Foyer;
use crate::domain::ports::FoyerRepository;
use crate::utils::error::{FoyerError, Result};
use async_trait::async_trait;

#[async_trait]
pub trait FoyerService: Send + Sync {
    async fn retrieve_all_foyers(&self) -> Result<Vec<Foyer>>;
    async fn retrieve_foyer(&self, id: i64) -> Result<Foyer>;
    /// `None` 代表呼叫端沒有提供 foyer（例如 JSON `null`）
    async fn add_foyer(&self, foyer: Option<Foyer>) -> Result<Foyer>;
    async fn modify_foyer(&self, foyer: Foyer) -> Result<Foyer>;
    async fn remove_foyer(&self, id: i64) -> Result<()>;
}

pub struct FoyerServiceImpl<R: FoyerRepository> {
    repository: R,
}

impl<R: FoyerRepository> FoyerServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: FoyerRepository> FoyerService for FoyerServiceImpl<R> {
    async fn retrieve_all_foyers(&self) -> Result<Vec<Foyer>> {
        let foyers = self.repository.find_all().await?;
        tracing::debug!("Retrieved {} foyers", foyers.len());
        Ok(foyers)
    }

    async fn retrieve_foyer(&self, id: i64) -> Result<Foyer> {
        tracing::debug!("Retrieving foyer {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(FoyerError::NotFound { id })
    }

    async fn add_foyer(&self, foyer: Option<Foyer>) -> Result<Foyer> {
        let Some(foyer) = foyer else {
            tracing::warn!("Rejected add request without a foyer");
            return Err(FoyerError::InvalidArgument {
                message: "foyer must not be null".to_string(),
            });
        };

        tracing::debug!("Adding {}", foyer);
        self.repository.save(foyer).await.inspect_err(|e| {
            tracing::warn!("Failed to add foyer: {}", e);
        })
    }

    async fn modify_foyer(&self, foyer: Foyer) -> Result<Foyer> {
        tracing::debug!("Modifying {}", foyer);
        self.repository.save(foyer).await.inspect_err(|e| {
            tracing::warn!("Failed to modify foyer: {}", e);
        })
    }

    async fn remove_foyer(&self, id: i64) -> Result<()> {
        tracing::debug!("Removing foyer {}", id);
        self.repository.delete_by_id(id).await.inspect_err(|e| {
            tracing::warn!("Failed to remove foyer {}: {}", id, e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockFoyerRepository;
    use mockall::predicate::eq;

    const FOYER_ID: i64 = 1;
    const FOYER_NAME: &str = "Main Foyer";
    const UPDATED_FOYER_NAME: &str = "Updated Foyer";
    const UPDATED_FOYER_CAPACITY: i64 = 400;

    fn foyer() -> Foyer {
        let mut foyer = Foyer::with_id(FOYER_ID);
        foyer.set_nom_foyer(FOYER_NAME);
        foyer.set_capacite_foyer(200);
        foyer
    }

    #[tokio::test]
    async fn retrieve_all_foyers_returns_foyers_list() {
        let mut repository = MockFoyerRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![foyer()]));

        let service = FoyerServiceImpl::new(repository);
        let foyers = service.retrieve_all_foyers().await.unwrap();

        assert_eq!(foyers.len(), 1);
        assert_eq!(foyers[0], foyer());
    }

    #[tokio::test]
    async fn retrieve_all_foyers_keeps_repository_order() {
        let mut second = Foyer::with_id(7);
        second.set_nom_foyer("Annexe");
        let reported = vec![second, foyer()];
        let expected = reported.clone();

        let mut repository = MockFoyerRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .returning(move || Ok(reported.clone()));

        let service = FoyerServiceImpl::new(repository);
        assert_eq!(service.retrieve_all_foyers().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn retrieve_foyer_returns_foyer_when_id_exists() {
        let mut repository = MockFoyerRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(FOYER_ID))
            .times(1)
            .returning(|_| Ok(Some(foyer())));

        let service = FoyerServiceImpl::new(repository);
        let result = service.retrieve_foyer(FOYER_ID).await.unwrap();

        assert_eq!(result.nom_foyer(), FOYER_NAME);
    }

    #[tokio::test]
    async fn retrieve_foyer_fails_with_not_found_when_absent() {
        let mut repository = MockFoyerRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let service = FoyerServiceImpl::new(repository);
        let err = service.retrieve_foyer(99).await.unwrap_err();

        assert!(matches!(err, FoyerError::NotFound { id: 99 }));
    }

    #[tokio::test]
    async fn add_foyer_saves_and_returns_foyer() {
        let mut repository = MockFoyerRepository::new();
        repository
            .expect_save()
            .with(eq(foyer()))
            .times(1)
            .returning(Ok);

        let service = FoyerServiceImpl::new(repository);
        let result = service.add_foyer(Some(foyer())).await.unwrap();

        assert_eq!(result.nom_foyer(), FOYER_NAME);
        assert_eq!(result, foyer());
    }

    #[tokio::test]
    async fn add_foyer_fails_when_foyer_is_null() {
        let mut repository = MockFoyerRepository::new();
        repository.expect_save().never();

        let service = FoyerServiceImpl::new(repository);
        let err = service.add_foyer(None).await.unwrap_err();

        assert!(matches!(err, FoyerError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn add_foyer_propagates_duplicate_name_rejection() {
        let mut duplicate = Foyer::new();
        duplicate.set_nom_foyer(FOYER_NAME);

        let mut repository = MockFoyerRepository::new();
        repository
            .expect_save()
            .with(eq(duplicate.clone()))
            .times(1)
            .returning(|_| {
                Err(FoyerError::PersistenceError {
                    message: "Foyer with this name already exists".to_string(),
                })
            });

        let service = FoyerServiceImpl::new(repository);
        let err = service.add_foyer(Some(duplicate)).await.unwrap_err();

        assert!(
            matches!(err, FoyerError::PersistenceError { ref message } if message == "Foyer with this name already exists")
        );
    }

    #[tokio::test]
    async fn modify_foyer_updates_and_returns_foyer() {
        let mut updated = foyer();
        updated.set_nom_foyer(UPDATED_FOYER_NAME);
        updated.set_capacite_foyer(UPDATED_FOYER_CAPACITY);

        let mut repository = MockFoyerRepository::new();
        repository
            .expect_save()
            .with(eq(updated.clone()))
            .times(1)
            .returning(Ok);

        let service = FoyerServiceImpl::new(repository);
        let result = service.modify_foyer(updated).await.unwrap();

        assert_eq!(result.nom_foyer(), UPDATED_FOYER_NAME);
        assert_eq!(result.capacite_foyer(), UPDATED_FOYER_CAPACITY);
    }

    #[tokio::test]
    async fn modify_foyer_propagates_failure_when_foyer_does_not_exist() {
        let mut repository = MockFoyerRepository::new();
        repository
            .expect_save()
            .times(1)
            .returning(|_| {
                Err(FoyerError::PersistenceError {
                    message: "Foyer not found".to_string(),
                })
            });

        let service = FoyerServiceImpl::new(repository);
        let err = service.modify_foyer(foyer()).await.unwrap_err();

        assert!(matches!(err, FoyerError::PersistenceError { .. }));
    }

    #[tokio::test]
    async fn remove_foyer_deletes_once_when_id_exists() {
        let mut repository = MockFoyerRepository::new();
        repository.expect_exists_by_id().never();
        repository
            .expect_delete_by_id()
            .with(eq(FOYER_ID))
            .times(1)
            .returning(|_| Ok(()));

        let service = FoyerServiceImpl::new(repository);
        service.remove_foyer(FOYER_ID).await.unwrap();
    }

    #[tokio::test]
    async fn remove_foyer_propagates_failure_when_id_does_not_exist() {
        let mut repository = MockFoyerRepository::new();
        repository
            .expect_delete_by_id()
            .with(eq(FOYER_ID))
            .times(1)
            .returning(|id| Err(FoyerError::NotFound { id }));

        let service = FoyerServiceImpl::new(repository);
        let err = service.remove_foyer(FOYER_ID).await.unwrap_err();

        assert!(matches!(err, FoyerError::NotFound { id: FOYER_ID }));
    }
}
