//! Testing utilities for the installer workspace
//!
//! Shared fixtures: record builders and a populated installer state.

#![allow(missing_docs)]

use nw_state::{EntityId, EntityKind, InstallerState, NamedCollection, Record};
use serde_json::{json, Value};

/// Build a record from a JSON object literal
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture record must be a JSON object, got {other}"),
    }
}

/// Build a collection from `(id, name)` pairs
pub fn collection(name_field: &str, entries: &[(&str, &str)]) -> NamedCollection {
    let mut c = NamedCollection::new(name_field);
    for (id, name) in entries {
        let mut r = Record::new();
        r.insert(name_field.to_string(), Value::String((*name).to_string()));
        c.insert(EntityId::from(*id), r).unwrap();
    }
    c
}

/// Add a record owned by a chain
pub fn add_child(state: &mut InstallerState, kind: EntityKind, id: &str, name: &str, chain: &str) {
    let mut r = Record::new();
    r.insert(kind.name_field().to_string(), json!(name));
    r.insert("parent_id".to_string(), json!(chain));
    state.add(kind, EntityId::from(id), r).unwrap();
}

/// Two chains with sources, two channels, a user and a KMS config
///
/// | id      | kind       | name        | chain   |
/// |---------|------------|-------------|---------|
/// | chain_1 | Chain      | cosmos      |         |
/// | chain_2 | Chain      | polkadot    |         |
/// | node_1  | Node       | validator-1 | chain_1 |
/// | node_2  | Node       | validator-1 | chain_2 |
/// | repo_1  | Repository | panic       | chain_1 |
/// | sys_1   | System     | host-a      | chain_1 |
/// | dh_1    | DockerHub  | node-image  | chain_2 |
/// | kms_1   | Kms        | signer      | chain_1 |
/// | tg_1    | Channel    | telegram    |         |
/// | mail_1  | Channel    | email       |         |
/// | user_1  | User       | admin       |         |
pub fn sample_state() -> InstallerState {
    let mut state = InstallerState::new();

    state
        .add(
            EntityKind::Chain,
            "chain_1".into(),
            record(json!({"chain_name": "cosmos", "channels": ["tg_1", "mail_1"]})),
        )
        .unwrap();
    state
        .add(
            EntityKind::Chain,
            "chain_2".into(),
            record(json!({"chain_name": "polkadot", "channels": ["tg_1"]})),
        )
        .unwrap();

    add_child(&mut state, EntityKind::Node, "node_1", "validator-1", "chain_1");
    add_child(&mut state, EntityKind::Node, "node_2", "validator-1", "chain_2");
    add_child(&mut state, EntityKind::Repository, "repo_1", "panic", "chain_1");
    add_child(&mut state, EntityKind::System, "sys_1", "host-a", "chain_1");
    add_child(&mut state, EntityKind::DockerHub, "dh_1", "node-image", "chain_2");
    add_child(&mut state, EntityKind::Kms, "kms_1", "signer", "chain_1");

    state
        .add(EntityKind::Channel, "tg_1".into(), record(json!({"channel_name": "telegram"})))
        .unwrap();
    state
        .add(EntityKind::Channel, "mail_1".into(), record(json!({"channel_name": "email"})))
        .unwrap();
    state
        .add(EntityKind::User, "user_1".into(), record(json!({"username": "admin"})))
        .unwrap();

    state
}
