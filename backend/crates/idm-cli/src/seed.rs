//! Bulk registration of demo accounts.

use crate::Client;

use serde_json::{Value, json};

pub const DEFAULT_SEED_COUNT: u32 = 8;

/// Register `count` demo identities, one account each.
///
/// Account `i` (1-based) is `{prefix}{i}` and registers as `User_{i}` /
/// `user{i}@example.com`. A failed account is reported and seeding moves on.
/// Accounts are named by the `X-Account-Id` header, so seeding needs a server
/// running with authentication disabled.
pub async fn seed_accounts(client: &Client, count: u32, prefix: &str) -> Value {
    let mut registered = Vec::new();
    let mut failed = Vec::new();

    for i in 1..=count {
        let account = format!("{prefix}{i}");
        let name = format!("User_{i}");
        let email = format!("user{i}@example.com");

        match client.for_account(&account).register(&name, &email).await {
            Ok(_) => {
                eprintln!("Registered {} as {}", account, name);
                registered.push(account);
            }
            Err(e) => {
                eprintln!("Failed to register {}: {}", account, e);
                failed.push(json!({
                    "account": account,
                    "code": e.code(),
                    "error": e.to_string(),
                }));
            }
        }
    }

    json!({
        "registered": registered,
        "failed": failed,
    })
}
