//! Common test utilities for directory service testing.
//!
//! [`ScriptedTransport`] answers each logical endpoint with a canned reply
//! and records every call, so tests can assert both results and the order
//! of directory requests.

#![allow(dead_code)]

pub mod fixtures;

use graph_directory::error::{DirectoryResult, TransportError};
use graph_directory::transport::DirectoryTransport;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Route logs through `env_logger` for `RUST_LOG=debug cargo test`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Canned reply for one route.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16, String),
}

impl Reply {
    pub fn body(body: impl Into<String>) -> Self {
        Reply::Body(body.into())
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Reply::Status(status, message.into())
    }
}

#[derive(Debug, Default)]
struct Script {
    routes: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<(String, String)>>,
    echo_creates: AtomicBool,
}

/// In-memory transport with scripted replies.
///
/// Clones share routes and the call log. Unscripted routes fail with a 404
/// transport error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Script>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply for `route`, replacing any earlier one.
    pub fn with(self, route: impl Into<String>, reply: Reply) -> Self {
        self.script
            .routes
            .lock()
            .unwrap()
            .insert(route.into(), reply);
        self
    }

    /// Answer `create_user` and `create_group` with the request body.
    pub fn echo_creates(self) -> Self {
        self.script.echo_creates.store(true, Ordering::SeqCst);
        self
    }

    /// Routes called so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.script.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, route: &str) -> usize {
        self.calls().iter().filter(|call| *call == route).count()
    }

    /// Request body last sent to `route`.
    pub fn last_body(&self, route: &str) -> Option<String> {
        self.script
            .bodies
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, _)| r == route)
            .map(|(_, body)| body.clone())
    }

    async fn respond(&self, route: String, body: Option<String>) -> DirectoryResult<String> {
        // Let concurrent callers interleave.
        tokio::task::yield_now().await;

        self.script.calls.lock().unwrap().push(route.clone());
        if let Some(body) = &body {
            self.script
                .bodies
                .lock()
                .unwrap()
                .push((route.clone(), body.clone()));
            if route.starts_with("create_") && self.script.echo_creates.load(Ordering::SeqCst) {
                return Ok(body.clone());
            }
        }

        let reply = self.script.routes.lock().unwrap().get(&route).cloned();
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, message)) => Err(TransportError::new(status, message).into()),
            None => Err(TransportError::new(404, format!("No scripted reply for '{}'", route)).into()),
        }
    }
}

impl DirectoryTransport for ScriptedTransport {
    async fn list_users(&self, _query: Option<&str>) -> DirectoryResult<String> {
        self.respond("list_users".to_string(), None).await
    }

    async fn get_user(&self, object_id: &str) -> DirectoryResult<String> {
        self.respond(format!("get_user:{}", object_id), None).await
    }

    async fn find_users_by_sign_in_name(&self, sign_in_name: &str) -> DirectoryResult<String> {
        self.respond(format!("find_users_by_sign_in_name:{}", sign_in_name), None)
            .await
    }

    async fn get_user_member_of(&self, object_id: &str) -> DirectoryResult<String> {
        self.respond(format!("member_of:{}", object_id), None).await
    }

    async fn create_user(&self, body: String) -> DirectoryResult<String> {
        self.respond("create_user".to_string(), Some(body)).await
    }

    async fn update_user(&self, object_id: &str, body: String) -> DirectoryResult<String> {
        self.respond(format!("update_user:{}", object_id), Some(body))
            .await
    }

    async fn delete_user(&self, object_id: &str) -> DirectoryResult<String> {
        self.respond(format!("delete_user:{}", object_id), None).await
    }

    async fn list_groups(&self, _query: Option<&str>) -> DirectoryResult<String> {
        self.respond("list_groups".to_string(), None).await
    }

    async fn get_group(&self, object_id: &str) -> DirectoryResult<String> {
        self.respond(format!("get_group:{}", object_id), None).await
    }

    async fn get_group_members(&self, object_id: &str) -> DirectoryResult<String> {
        self.respond(format!("group_members:{}", object_id), None).await
    }

    async fn create_group(&self, body: String) -> DirectoryResult<String> {
        self.respond("create_group".to_string(), Some(body)).await
    }

    async fn update_group(&self, object_id: &str, body: String) -> DirectoryResult<String> {
        self.respond(format!("update_group:{}", object_id), Some(body))
            .await
    }

    async fn delete_group(&self, object_id: &str) -> DirectoryResult<String> {
        self.respond(format!("delete_group:{}", object_id), None).await
    }

    async fn add_group_member(&self, group_id: &str, member_id: &str) -> DirectoryResult<String> {
        self.respond(format!("add_group_member:{}:{}", group_id, member_id), None)
            .await
    }

    async fn remove_group_member(
        &self,
        group_id: &str,
        member_id: &str,
    ) -> DirectoryResult<String> {
        self.respond(
            format!("remove_group_member:{}:{}", group_id, member_id),
            None,
        )
        .await
    }

    async fn find_applications(&self, display_name_prefix: &str) -> DirectoryResult<String> {
        self.respond(format!("find_applications:{}", display_name_prefix), None)
            .await
    }

    async fn get_extension_properties(
        &self,
        application_object_id: &str,
    ) -> DirectoryResult<String> {
        self.respond(
            format!("extension_properties:{}", application_object_id),
            None,
        )
        .await
    }
}
