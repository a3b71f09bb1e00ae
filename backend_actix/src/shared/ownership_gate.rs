// src/shared/ownership_gate.rs
//! Ordered ancestor checks that run before any forum mutation.
//!
//! A mutation on a reply is only meaningful while its thread and comment are
//! still there. `Lineage` walks the ancestors outermost first, stops on the
//! first one that is missing, and only then lets the mutation future run.
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Thread,
    Comment,
    Reply,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Thread => "Thread",
            Resource::Comment => "Comment",
            Resource::Reply => "Reply",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Resource::Thread => "THREAD",
            Resource::Comment => "COMMENT",
            Resource::Reply => "REPLY",
        }
    }

    /// Client-facing 404 message.
    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AvailabilityError {
    #[error("Resource not found or deleted")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GateError {
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Existence-and-not-deleted check. Implemented by every forum repository.
#[async_trait]
pub trait AvailabilityProbe: Send + Sync {
    fn resource(&self) -> Resource;

    async fn verify_availability(&self, id: Uuid) -> Result<(), AvailabilityError>;
}

#[derive(Default)]
pub struct Lineage<'a> {
    ancestors: Vec<(&'a dyn AvailabilityProbe, Uuid)>,
}

impl<'a> Lineage<'a> {
    pub fn new() -> Self {
        Self {
            ancestors: Vec::new(),
        }
    }

    /// Appends the next (inner) ancestor to check.
    pub fn then(mut self, probe: &'a dyn AvailabilityProbe, id: Uuid) -> Self {
        self.ancestors.push((probe, id));
        self
    }

    pub async fn verify(&self) -> Result<(), GateError> {
        for (probe, id) in &self.ancestors {
            let resource = probe.resource();
            probe
                .verify_availability(*id)
                .await
                .map_err(|e| match e {
                    AvailabilityError::NotFound => {
                        debug!(resource = resource.code(), %id, "Ancestor unavailable");
                        GateError::NotFound(resource)
                    }
                    AvailabilityError::DatabaseError(msg) => GateError::Infrastructure(msg),
                })?;
        }
        Ok(())
    }

    /// Runs `mutation` only after every ancestor has been verified. Futures
    /// are lazy, so a failed check means the mutation never touches storage.
    pub async fn guard<F, T, E>(&self, mutation: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<GateError>,
    {
        self.verify().await?;
        mutation.await
    }
}
