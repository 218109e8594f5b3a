//! Page props: immediate values, deferred producers and lazy producers.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// Props keyed by name. Key order is the evaluation order.
pub type Props = BTreeMap<String, Prop>;

/// A zero-argument producer, consumed when called.
pub struct Producer(Box<dyn FnOnce() -> Prop + Send>);

impl Producer {
    pub fn new<F, R>(producer: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: Into<Prop>,
    {
        Self(Box::new(move || producer().into()))
    }

    fn call(self) -> Prop {
        (self.0)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}

/// A prop value as handed to the negotiator.
///
/// `Deferred` producers always make it into the payload and run during the
/// final resolution pass. `Lazy` producers only run when a partial reload
/// asks for their key; otherwise the whole entry is dropped.
#[derive(Debug)]
pub enum Prop {
    Value(Value),
    Map(Props),
    List(Vec<Prop>),
    Deferred(Producer),
    Lazy(Producer),
}

impl Prop {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn deferred<F, R>(producer: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: Into<Prop>,
    {
        Self::Deferred(Producer::new(producer))
    }

    pub fn lazy<F, R>(producer: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: Into<Prop>,
    {
        Self::Lazy(Producer::new(producer))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Evaluate every producer in the tree and return the concrete value.
    ///
    /// A producer may return further producers; they are resolved too.
    /// Lazy props nested below the top level are evaluated like deferred
    /// ones, since filtering only looks at top-level keys.
    pub fn resolve(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Map(props) => Value::Object(resolve_props(props)),
            Self::List(items) => Value::Array(items.into_iter().map(Prop::resolve).collect()),
            Self::Deferred(producer) | Self::Lazy(producer) => producer.call().resolve(),
        }
    }
}

impl From<Value> for Prop {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Props> for Prop {
    fn from(props: Props) -> Self {
        Self::Map(props)
    }
}

impl From<Vec<Prop>> for Prop {
    fn from(items: Vec<Prop>) -> Self {
        Self::List(items)
    }
}

/// Resolve a whole props map in key order.
pub fn resolve_props(props: Props) -> Map<String, Value> {
    props
        .into_iter()
        .map(|(key, prop)| (key, prop.resolve()))
        .collect()
}

/// Merge explicit props over shared props. Explicit keys win.
pub fn merge_props(explicit: Props, shared: Props) -> Props {
    let mut merged = shared;
    merged.extend(explicit);
    merged
}

/// Props shared with every page rendered during one request.
///
/// One accumulator is created per request; it is never reused across
/// requests.
#[derive(Debug, Default)]
pub struct SharedProps {
    props: Props,
}

impl SharedProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share a single prop. A later share of the same key replaces it.
    pub fn share(&mut self, key: impl Into<String>, prop: impl Into<Prop>) {
        self.props.insert(key.into(), prop.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Hand the accumulated props over, leaving the accumulator empty.
    pub fn take(&mut self) -> Props {
        std::mem::take(&mut self.props)
    }
}
