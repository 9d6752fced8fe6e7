use crate::domain::model::Foyer;
use crate::utils::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Foyer 的持久層契約。
///
/// `save` 同時負責新增與更新：沒有識別碼的紀錄會被指派新的識別碼。
/// `delete_by_id` 對不存在的識別碼回傳 `FoyerError::NotFound`。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FoyerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Foyer>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Foyer>>;
    async fn save(&self, foyer: Foyer) -> Result<Foyer>;
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
