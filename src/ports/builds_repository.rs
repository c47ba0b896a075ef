use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{BuildRecord, NewBuild};

/// Uniform contract over the submission store backends. Ordering of
/// `read_all` is unspecified; sorting is the gallery query's job.
#[async_trait]
pub trait BuildsRepository {
    type Error;

    /// Every dynamically persisted record.
    async fn read_all(&mut self) -> Result<Vec<BuildRecord>, Self::Error>;

    /// Assigns the next id across the union of seed and dynamic records,
    /// stamps the submission date, persists and returns the stored record.
    async fn append(
        &mut self,
        now: NaiveDate,
        new: NewBuild,
    ) -> Result<BuildRecord, Self::Error>;
}

/// The backend chosen at startup, behind one object.
pub type BoxedBuildsRepository = Box<dyn BuildsRepository<Error = anyhow::Error> + Send>;
