#![allow(dead_code)]

use folders::store::MemoryStore;
use folders::{Client, ClientBuilder, Folder};
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

pub const ORG_ID: Uuid = uuid::uuid!("3b9a868b-8cd9-4b6b-ba23-fd1e08f3e9fa");

pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn random_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn random_folders(org_id: Uuid, count: usize) -> Vec<Folder> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            Folder::new(Uuid::new_v4(), random_name(), org_id).with_deleted(rng.gen_bool(0.2))
        })
        .collect()
}

pub fn create_client(folders: Vec<Folder>) -> Client {
    ClientBuilder::default()
        .with_store(MemoryStore::new(folders))
        .build()
        .unwrap()
}
