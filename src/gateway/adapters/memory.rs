//! In-memory backend double for workflow and service tests.
//!
//! Models the backend collections closely enough to exercise every screen:
//! list envelopes in a configurable shape, item CRUD, admin sign-in and
//! registration, and the assign-technician update. Individual calls can be
//! scripted to return canned responses or failures, and every call is
//! recorded for later inspection. Not suitable for production use.

use crate::gateway::{
    domain::{GatewayMethod, Resource, ResourcePath},
    ports::{GatewayError, GatewayResult, ResourceGateway},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

const ASSIGN_ACTION: &str = "assign-technician";

/// Shape used when answering collection reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListShape {
    /// A bare JSON array.
    #[default]
    Bare,
    /// `{ "<resource>": [...] }`.
    Keyed,
    /// `{ "data": [...] }`.
    Data,
}

/// A call observed by the in-memory gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Verb used.
    pub method: GatewayMethod,
    /// Logical path, e.g. `orders/O1/assign-technician`.
    pub path: String,
    /// Request body, when one was sent.
    pub body: Option<Value>,
}

/// Thread-safe in-memory backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceGateway {
    state: Arc<RwLock<InMemoryBackendState>>,
}

type ScriptKey = (GatewayMethod, String);

#[derive(Debug, Default)]
struct InMemoryBackendState {
    collections: HashMap<Resource, Vec<Value>>,
    list_shape: ListShape,
    scripted: HashMap<ScriptKey, VecDeque<GatewayResult<Value>>>,
    calls: Vec<RecordedCall>,
    sequence: u64,
}

impl InMemoryResourceGateway {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored items of a collection.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn seed(&self, resource: Resource, items: Vec<Value>) -> GatewayResult<()> {
        self.write()?.collections.insert(resource, items);
        Ok(())
    }

    /// Sets the envelope shape used for collection reads.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn set_list_shape(&self, shape: ListShape) -> GatewayResult<()> {
        self.write()?.list_shape = shape;
        Ok(())
    }

    /// Queues a canned response for the next matching call.
    ///
    /// Scripted responses are consumed in FIFO order and take precedence
    /// over the modelled backend behaviour.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn script(
        &self,
        method: GatewayMethod,
        path: &ResourcePath,
        response: GatewayResult<Value>,
    ) -> GatewayResult<()> {
        self.write()?
            .scripted
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
        Ok(())
    }

    /// Returns every recorded call in order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn calls(&self) -> GatewayResult<Vec<RecordedCall>> {
        Ok(self.read()?.calls.clone())
    }

    /// Forgets recorded calls.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn clear_calls(&self) -> GatewayResult<()> {
        self.write()?.calls.clear();
        Ok(())
    }

    /// Returns the stored items of a collection.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn collection(&self, resource: Resource) -> GatewayResult<Vec<Value>> {
        Ok(self
            .read()?
            .collections
            .get(&resource)
            .cloned()
            .unwrap_or_default())
    }

    fn read(&self) -> GatewayResult<RwLockReadGuard<'_, InMemoryBackendState>> {
        self.state.read().map_err(|err| lock_error(&err.to_string()))
    }

    fn write(&self) -> GatewayResult<RwLockWriteGuard<'_, InMemoryBackendState>> {
        self.state.write().map_err(|err| lock_error(&err.to_string()))
    }

    fn handle(
        &self,
        method: GatewayMethod,
        path: &ResourcePath,
        body: Option<&Value>,
    ) -> GatewayResult<Value> {
        let mut state = self.write()?;
        state.calls.push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        if let Some(response) = state
            .scripted
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front)
        {
            return response;
        }

        let empty = Value::Null;
        let payload = body.unwrap_or(&empty);
        match (method, path.resource(), path.segments()) {
            (GatewayMethod::Fetch, resource, []) => Ok(state.list_body(resource)),
            (GatewayMethod::Fetch, resource, [id]) => state
                .position(resource, id)
                .and_then(|index| state.items(resource).get(index).cloned())
                .ok_or_else(|| not_found(path, resource)),
            (GatewayMethod::Create, Resource::Admin, [action]) if action.as_str() == "login" => {
                state.login(path, payload)
            }
            (GatewayMethod::Create, Resource::Admin, [action]) if action.as_str() == "register" => {
                state.register(path, payload)
            }
            (GatewayMethod::Create, resource, []) => state.insert(path, resource, payload),
            (GatewayMethod::Update, Resource::Orders, [id, action])
                if action.as_str() == ASSIGN_ACTION =>
            {
                state.assign(path, id, payload)
            }
            (GatewayMethod::Update, resource, [id]) => state.merge(path, resource, id, payload),
            (GatewayMethod::Remove, resource, [id]) => state.delete(path, resource, id),
            (_, resource, _) => Err(not_found(path, resource)),
        }
    }
}

impl InMemoryBackendState {
    fn items(&self, resource: Resource) -> &[Value] {
        self.collections.get(&resource).map_or(&[], Vec::as_slice)
    }

    fn position(&self, resource: Resource, id: &str) -> Option<usize> {
        self.items(resource)
            .iter()
            .position(|item| id_of(item).as_deref() == Some(id))
    }

    fn item_mut(&mut self, resource: Resource, index: usize) -> Option<&mut Map<String, Value>> {
        self.collections
            .get_mut(&resource)
            .and_then(|items| items.get_mut(index))
            .and_then(Value::as_object_mut)
    }

    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    fn list_body(&self, resource: Resource) -> Value {
        let items = Value::Array(self.items(resource).to_vec());
        match self.list_shape {
            ListShape::Bare => items,
            ListShape::Keyed => json!({ resource.collection_key(): items }),
            ListShape::Data => json!({ "data": items }),
        }
    }

    fn insert(&mut self, path: &ResourcePath, resource: Resource, body: &Value) -> GatewayResult<Value> {
        let Some(fields) = body.as_object() else {
            return Err(bad_request(path, "request body must be an object"));
        };
        let mut item = fields.clone();
        if !item.contains_key("id") {
            let sequence = self.next_sequence();
            let id = match resource {
                Resource::Products => Value::from(sequence),
                _ => Value::String(format!("{}-{sequence}", resource.collection_key())),
            };
            item.insert("id".to_owned(), id);
        }
        let created = Value::Object(item);
        self.collections
            .entry(resource)
            .or_default()
            .push(created.clone());
        Ok(json!({ "message": "created", "data": created }))
    }

    fn merge(
        &mut self,
        path: &ResourcePath,
        resource: Resource,
        id: &str,
        body: &Value,
    ) -> GatewayResult<Value> {
        let Some(fields) = body.as_object() else {
            return Err(bad_request(path, "request body must be an object"));
        };
        let index = self
            .position(resource, id)
            .ok_or_else(|| not_found(path, resource))?;
        let item = self
            .item_mut(resource, index)
            .ok_or_else(|| not_found(path, resource))?;
        for (key, value) in fields {
            if key != "id" {
                item.insert(key.clone(), value.clone());
            }
        }
        let updated = Value::Object(item.clone());
        Ok(json!({ "message": "updated", "data": updated }))
    }

    fn delete(&mut self, path: &ResourcePath, resource: Resource, id: &str) -> GatewayResult<Value> {
        let index = self
            .position(resource, id)
            .ok_or_else(|| not_found(path, resource))?;
        if let Some(items) = self.collections.get_mut(&resource) {
            items.remove(index);
        }
        Ok(json!({ "message": "deleted" }))
    }

    fn assign(&mut self, path: &ResourcePath, order_id: &str, body: &Value) -> GatewayResult<Value> {
        let technician_id = body
            .get("technicianId")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| bad_request(path, "technicianId is required"))?
            .to_owned();

        let order_index = self
            .position(Resource::Orders, order_id)
            .ok_or_else(|| status(path, 404, "Order not found"))?;
        let technician_index = self
            .position(Resource::Technicians, &technician_id)
            .ok_or_else(|| status(path, 404, "Technician not found"))?;

        let technician = self
            .items(Resource::Technicians)
            .get(technician_index)
            .cloned()
            .unwrap_or_default();
        let is_available = technician.get("status").and_then(Value::as_str) == Some("AVAILABLE");
        let already_on_order =
            technician.get("assignedJobId").and_then(Value::as_str) == Some(order_id);
        if !is_available && !already_on_order {
            return Err(status(path, 409, "Technician is not available"));
        }

        let previous = self
            .items(Resource::Orders)
            .get(order_index)
            .and_then(|order| order.get("technicianId"))
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty() && *id != technician_id)
            .map(str::to_owned);
        if let Some(previous_id) = previous {
            if let Some(index) = self.position(Resource::Technicians, &previous_id) {
                if let Some(released) = self.item_mut(Resource::Technicians, index) {
                    released.insert("status".to_owned(), json!("AVAILABLE"));
                    released.insert("assignedJobId".to_owned(), Value::Null);
                }
            }
        }

        let assigned_at = self.next_sequence();
        if let Some(order) = self.item_mut(Resource::Orders, order_index) {
            order.insert("technicianId".to_owned(), json!(technician_id));
            order.insert("status".to_owned(), json!("ASSIGNED"));
            order.insert("assignedAt".to_owned(), json!(assigned_at));
        }
        if let Some(assigned) = self.item_mut(Resource::Technicians, technician_index) {
            assigned.insert("status".to_owned(), json!("ON_DUTY"));
            assigned.insert("assignedJobId".to_owned(), json!(order_id));
        }

        Ok(json!({
            "success": true,
            "message": "Technician assigned",
            "data": { "orderId": order_id, "technicianId": technician_id },
        }))
    }

    fn login(&self, path: &ResourcePath, body: &Value) -> GatewayResult<Value> {
        let email = body.get("email").and_then(Value::as_str);
        let password = body.get("password").and_then(Value::as_str);
        let admin = self.items(Resource::Admin).iter().find(|admin| {
            admin.get("email").and_then(Value::as_str) == email
                && admin.get("password").and_then(Value::as_str) == password
        });
        let Some(found) = admin else {
            return Err(status(path, 401, "Invalid email or password"));
        };
        let id = id_of(found).unwrap_or_default();
        Ok(json!({
            "message": "Login successful",
            "admin": {
                "id": id,
                "name": found.get("name").cloned().unwrap_or(Value::Null),
                "email": email,
            },
            "token": format!("token-{id}"),
        }))
    }

    fn register(&mut self, path: &ResourcePath, body: &Value) -> GatewayResult<Value> {
        let email = body
            .get("email")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or_else(|| bad_request(path, "email is required"))?
            .to_owned();
        let taken = self
            .items(Resource::Admin)
            .iter()
            .any(|admin| admin.get("email").and_then(Value::as_str) == Some(email.as_str()));
        if taken {
            return Err(status(path, 409, "Email already registered"));
        }

        let first = body.get("firstName").and_then(Value::as_str).unwrap_or_default();
        let last = body.get("lastName").and_then(Value::as_str).unwrap_or_default();
        let name = format!("{first} {last}").trim().to_owned();
        let id = format!("admin-{}", self.next_sequence());
        self.collections.entry(Resource::Admin).or_default().push(json!({
            "id": id,
            "name": name,
            "email": email,
            "password": body.get("password").cloned().unwrap_or(Value::Null),
        }));
        Ok(json!({
            "message": "Admin registered",
            "admin": { "id": id, "name": name, "email": email },
        }))
    }
}

#[async_trait]
impl ResourceGateway for InMemoryResourceGateway {
    async fn fetch(&self, path: &ResourcePath) -> GatewayResult<Value> {
        self.handle(GatewayMethod::Fetch, path, None)
    }

    async fn create(&self, path: &ResourcePath, body: &Value) -> GatewayResult<Value> {
        self.handle(GatewayMethod::Create, path, Some(body))
    }

    async fn update(&self, path: &ResourcePath, body: &Value) -> GatewayResult<Value> {
        self.handle(GatewayMethod::Update, path, Some(body))
    }

    async fn remove(&self, path: &ResourcePath) -> GatewayResult<Value> {
        self.handle(GatewayMethod::Remove, path, None)
    }
}

fn id_of(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn lock_error(message: &str) -> GatewayError {
    GatewayError::Transport {
        path: "in-memory".to_owned(),
        message: message.to_owned(),
    }
}

fn status(path: &ResourcePath, code: u16, message: &str) -> GatewayError {
    GatewayError::Status {
        path: path.to_string(),
        status: code,
        message: message.to_owned(),
    }
}

fn bad_request(path: &ResourcePath, message: &str) -> GatewayError {
    status(path, 400, message)
}

fn not_found(path: &ResourcePath, resource: Resource) -> GatewayError {
    status(path, 404, &format!("{resource} item not found"))
}
