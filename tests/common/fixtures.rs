//! Wire fixtures shaped like the two backends' JSON

use serde_json::{json, Value};

/// A demo API user; the `username` marks it read-only
pub fn demo_user_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": format!("user{}", id),
        "email": format!("user{}@april.biz", id),
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "address": {
            "street": "Kulas Light",
            "city": "Gwenborough",
            "zipcode": "92998-3874"
        },
        "company": { "name": "Romaguera-Crona" }
    })
}

/// A record store user, without `username`
pub fn local_user_json(id: Value, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": "local@example.com",
        "phone": "5551234567"
    })
}

pub fn demo_users(count: i64) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| demo_user_json(id, &format!("Demo User {}", id)))
            .collect(),
    )
}
