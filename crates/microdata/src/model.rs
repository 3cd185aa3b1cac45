//! The microdata model: items, their properties and property values.
//!
//! [§ 5.2 Encoding microdata](https://html.spec.whatwg.org/multipage/microdata.html#encoding-microdata)
//!
//! Values are built append-only while a scope is walked and are read-only
//! once handed out. The serde representation is the JSON projection of
//! [§ 5.4.1 JSON](https://html.spec.whatwg.org/multipage/microdata.html#json):
//!
//! ```text
//! {"items":[{"type":[..],"properties":{"name":[..]},"id":".."}]}
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Property name to values, in order of first contribution.
pub type Properties = IndexMap<String, Vec<Value>>;

/// The top-level items found in one document, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Microdata {
    items: Vec<Item>,
}

impl Microdata {
    /// An empty result.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Top-level items in document order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Take ownership of the top-level items.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of top-level items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the document had no top-level items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read the JSON projection back into the model.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if `json` is not a valid projection.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<Item>> for Microdata {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl IntoIterator for Microdata {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Microdata {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// [§ 5.1.2 Items](https://html.spec.whatwg.org/multipage/microdata.html#items)
///
/// "Each item is represented by an element with an itemscope attribute."
///
/// Equality compares types, id and properties, including the order of
/// property names and of each value list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type", default)]
    types: Vec<String>,
    #[serde(default)]
    properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl Item {
    /// An item with no types, properties or id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item type. Duplicates are kept.
    pub fn add_type(&mut self, item_type: impl Into<String>) {
        self.types.push(item_type.into());
    }

    /// Set the global identifier. An empty string clears it.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.id = (!id.is_empty()).then_some(id);
    }

    /// Append `value` to the list for `name`, creating the list if needed.
    pub fn add_value(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        if let Some(values) = self.properties.get_mut(name) {
            values.push(value);
        } else {
            let _ = self.properties.insert(name.to_string(), vec![value]);
        }
    }

    /// Builder-style [`Item::add_type`].
    #[must_use]
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.add_type(item_type);
        self
    }

    /// Builder-style [`Item::set_id`].
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Builder-style [`Item::add_value`].
    #[must_use]
    pub fn with_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.add_value(name, value);
        self
    }

    /// Item types in source order.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Global identifier, already resolved to an absolute URL.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// All properties.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Values of one property, if the item has it.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&[Value]> {
        self.properties.get(name).map(Vec::as_slice)
    }

    /// Text values of one property, skipping nested items.
    pub fn texts<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.property(name)
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_text)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order, the model does not.
        self.types == other.types
            && self.id == other.id
            && self.properties.len() == other.properties.len()
            && self.properties.iter().eq(other.properties.iter())
    }
}

impl Eq for Item {}

/// [§ 5.1.4 Values](https://html.spec.whatwg.org/multipage/microdata.html#values)
///
/// A property value is either a string or a nested item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A string value, from an attribute or from text content.
    Text(String),
    /// A nested item, owned by this property slot alone.
    Item(Item),
}

impl Value {
    /// The string value, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Item(_) => None,
        }
    }

    /// The nested item, if this is one.
    #[must_use]
    pub const fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Text(_) => None,
            Self::Item(item) => Some(item),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}
