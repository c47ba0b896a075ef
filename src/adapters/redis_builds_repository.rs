use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use redis::AsyncCommands;

use crate::entities::{BuildId, BuildRecord, NewBuild};
use crate::ports;

/// Key-value backend. Dynamic records live as one JSON array under a single
/// key; the seed set is only consulted for id generation and is never written
/// back. An absent key reads as an empty store.
#[derive(Clone)]
pub struct RedisBuildsRepository {
    client: redis::Client,
    key: String,
    seeds: Vec<BuildRecord>,
}

impl RedisBuildsRepository {
    pub fn new(
        url: &str,
        key: impl Into<String>,
        seeds: Vec<BuildRecord>,
    ) -> anyhow::Result<Self> {
        let client = redis::Client::open(url).context("open redis client")?;
        Ok(Self {
            client,
            key: key.into(),
            seeds,
        })
    }

    async fn connection(&self) -> anyhow::Result<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .context("connect to redis")
    }

    async fn read_entry(&self) -> anyhow::Result<Vec<BuildRecord>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn
            .get(&self.key)
            .await
            .with_context(|| format!("GET {}", self.key))?;
        match raw {
            Some(raw) => {
                serde_json::from_str(&raw).with_context(|| format!("parse entry {}", self.key))
            }
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl ports::BuildsRepository for RedisBuildsRepository {
    type Error = anyhow::Error;

    async fn read_all(&mut self) -> Result<Vec<BuildRecord>, Self::Error> {
        self.read_entry().await
    }

    async fn append(&mut self, now: NaiveDate, new: NewBuild) -> Result<BuildRecord, Self::Error> {
        let mut builds = self.read_entry().await?;

        let id = BuildId::next(
            builds
                .iter()
                .chain(self.seeds.iter())
                .map(|build| build.id),
        );
        let record = new.into_record(id, now);
        builds.push(record.clone());

        let raw = serde_json::to_string(&builds).context("serialize builds")?;
        let mut conn = self.connection().await?;
        let _: () = conn
            .set(&self.key, raw)
            .await
            .with_context(|| format!("SET {}", self.key))?;

        Ok(record)
    }
}
