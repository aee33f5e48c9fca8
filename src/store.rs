//! Observable snapshot cells
//!
//! A [`Store`] holds the last server snapshot for one resource scope. It is
//! only ever replaced wholesale; subscribers see each replacement through a
//! `tokio::sync::watch` receiver.

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::watch;

/// Shape of the snapshot a store starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreShape {
    /// Collection response, starts as `[]`
    List,
    /// One object per scope (an invoice for a period), starts as `{}`
    Singleton,
}

impl StoreShape {
    fn empty_value(&self) -> Value {
        match self {
            StoreShape::List => Value::Array(Vec::new()),
            StoreShape::Singleton => Value::Object(Map::new()),
        }
    }
}

#[derive(Clone)]
pub struct Store {
    name: &'static str,
    shape: StoreShape,
    tx: Arc<watch::Sender<Value>>,
}

impl Store {
    pub fn new(name: &'static str, shape: StoreShape) -> Self {
        let (tx, _rx) = watch::channel(shape.empty_value());
        Self {
            name,
            shape,
            tx: Arc::new(tx),
        }
    }

    pub fn list(name: &'static str) -> Self {
        Self::new(name, StoreShape::List)
    }

    pub fn singleton(name: &'static str) -> Self {
        Self::new(name, StoreShape::Singleton)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> StoreShape {
        self.shape
    }

    /// Clone of the current snapshot
    pub fn get(&self) -> Value {
        self.tx.borrow().clone()
    }

    /// True while `init` should still fetch
    ///
    /// List stores count the elements of the array, or of the `result` array
    /// of a `{success, message, result}` envelope; any other object holds no
    /// element. Singleton stores count keys.
    pub fn is_empty(&self) -> bool {
        match (self.shape, &*self.tx.borrow()) {
            (_, Value::Null) => true,
            (StoreShape::List, Value::Array(items)) => items.is_empty(),
            (StoreShape::List, Value::Object(map)) => match map.get("result") {
                Some(Value::Array(items)) => items.is_empty(),
                _ => true,
            },
            (StoreShape::List, _) => true,
            (StoreShape::Singleton, Value::Object(map)) => map.is_empty(),
            (StoreShape::Singleton, Value::Array(items)) => items.is_empty(),
            (StoreShape::Singleton, _) => false,
        }
    }

    pub fn set(&self, value: Value) {
        tracing::info!(store = self.name, "store replaced");
        self.tx.send_replace(value);
    }

    pub fn subscribe(&self) -> watch::Receiver<Value> {
        self.tx.subscribe()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("value", &*self.tx.borrow())
            .finish()
    }
}
