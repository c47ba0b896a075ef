use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{BuildId, BuildRecord, NewBuild};
use crate::ports;

/// The on-disk store is a single JSON document holding the whole list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildsDocument {
    pub builds: Vec<BuildRecord>,
}

/// Flat-file backend. Every append re-reads the document, pushes the new
/// record and overwrites the file; the caller is expected to hold the store
/// lock across that sequence, since two interleaved appends would lose one.
#[derive(Clone, Debug)]
pub struct FileBuildsRepository {
    path: PathBuf,
    seeds: Vec<BuildRecord>,
}

impl FileBuildsRepository {
    pub fn new(path: impl Into<PathBuf>, seeds: Vec<BuildRecord>) -> Self {
        Self {
            path: path.into(),
            seeds,
        }
    }

    async fn read_document(&self) -> anyhow::Result<BuildsDocument> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse {}", self.path.display()))
    }
}

#[async_trait]
impl ports::BuildsRepository for FileBuildsRepository {
    type Error = anyhow::Error;

    async fn read_all(&mut self) -> Result<Vec<BuildRecord>, Self::Error> {
        Ok(self.read_document().await?.builds)
    }

    async fn append(&mut self, now: NaiveDate, new: NewBuild) -> Result<BuildRecord, Self::Error> {
        let mut document = self.read_document().await?;

        let id = BuildId::next(
            document
                .builds
                .iter()
                .chain(self.seeds.iter())
                .map(|build| build.id),
        );
        let record = new.into_record(id, now);
        document.builds.push(record.clone());

        let raw = serde_json::to_string_pretty(&document).context("serialize builds")?;
        tokio::fs::write(&self.path, raw)
            .await
            .with_context(|| format!("write {}", self.path.display()))?;

        Ok(record)
    }
}
