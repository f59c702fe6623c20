use crate::core::transport::HttpTransport;
use crate::domain::model::{Lead, Resource, ResourceKind, Writable};
use crate::utils::error::Result;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// CRUD access to one API collection. Every call is a single request; failures come back as
/// typed errors and presentation is left to the caller.
pub struct ResourceClient<R: Resource> {
    transport: Arc<HttpTransport>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }

    pub async fn get_all(&self) -> Result<Vec<R>> {
        self.transport.get(&[R::KIND.path()], &[]).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<R> {
        self.transport.get(&[R::KIND.path(), id], &[]).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<R> {
        let fallback = format!("Failed to update {}", R::KIND.singular());
        self.transport
            .put(&[R::KIND.path(), id], data, &fallback)
            .await
    }
}

impl<R: Writable> ResourceClient<R> {
    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<R> {
        let fallback = format!("Failed to create {}", R::KIND.singular());
        self.transport.post(&[R::KIND.path()], data, &fallback).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete(&[R::KIND.path(), id]).await
    }
}

impl ResourceClient<Lead> {
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<Lead>> {
        self.transport
            .get(&[Lead::KIND.path()], &[("status", status)])
            .await
    }
}
