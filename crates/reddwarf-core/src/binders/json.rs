//! Shared JSON payload shaping

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::request::{HttpRequest, Payload};

/// `{"<key>": [...]}` with each item keeping its declared field order
struct KeyedArray<'a, T> {
    key: &'a str,
    items: Vec<&'a T>,
}

impl<T: Serialize> Serialize for KeyedArray<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.items)?;
        map.end()
    }
}

/// Bind `{"<key>": [item, ...]}` as the JSON payload of `request`
///
/// Items are serialized with their declared attributes in iteration order;
/// pass an ordered collection for a deterministic wire order. Any previous
/// payload is replaced and the content type becomes `application/json`.
pub fn bind_to_json_payload<'a, T, I>(request: HttpRequest, key: &str, items: I) -> Result<HttpRequest>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let body = KeyedArray {
        key,
        items: items.into_iter().collect(),
    };
    let payload = serde_json::to_string(&body)?;
    Ok(request.with_payload(Payload::json(payload)))
}
