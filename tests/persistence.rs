//! Round-trip tests for the persisted collections: everything built
//! through the public mutation operations must survive a restart.

use deskpad::cart::{CART_KEY, CartStore};
use deskpad::storage::FileStore;
use deskpad::todo::{TODOS_KEY, TodoStore};

#[test]
fn todo_collection_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut todos = TodoStore::load(FileStore::open(dir.path()).unwrap());
    todos.add("water the plants");
    todos.add("file taxes");
    let toggled_id = todos.items()[0].id.clone();
    todos.toggle(&toggled_id);

    let reloaded = TodoStore::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.items(), todos.items());
    assert_eq!(reloaded.items()[0].title, "file taxes");
    assert!(reloaded.items()[0].completed);
    assert!(!reloaded.items()[1].completed);
}

#[test]
fn cart_collection_survives_a_restart_in_order() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());
    cart.add("choco");
    cart.add("coffee");
    cart.add("coffee");
    cart.add("tea");
    cart.decrement("tea");

    let reloaded = CartStore::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.entries(), cart.entries());

    let ids: Vec<&str> = reloaded.entries().keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["choco", "coffee"]);
    assert_eq!(reloaded.quantity("coffee"), 2);
}

#[test]
fn removing_unknown_ids_still_persists_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();

    let mut todos = TodoStore::load(FileStore::open(dir.path()).unwrap());
    todos.add("only task");
    todos.remove("no-such-id");

    let reloaded = TodoStore::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.items().len(), 1);
}

#[test]
fn zero_quantity_snapshot_lines_are_dropped_on_load() {
    use deskpad::storage::KeyValueStore;

    // Well-formed JSON that breaks the quantity >= 1 invariant; it must
    // not survive the load, and mutations afterwards must stay safe.
    let dir = tempfile::tempdir().unwrap();
    let mut raw = FileStore::open(dir.path()).unwrap();
    raw.set(CART_KEY, r#"{"coffee":{"quantity":0},"tea":{"quantity":3}}"#)
        .unwrap();

    let mut cart = CartStore::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(cart.quantity("coffee"), 0);
    assert_eq!(cart.quantity("tea"), 3);

    cart.decrement("coffee");
    assert!(cart.entries().get("coffee").is_none());

    cart.add("coffee");
    assert_eq!(cart.quantity("coffee"), 1);
}

#[test]
fn malformed_slot_content_loads_as_empty() {
    use deskpad::storage::KeyValueStore;

    let dir = tempfile::tempdir().unwrap();
    let mut raw = FileStore::open(dir.path()).unwrap();
    raw.set(TODOS_KEY, "{definitely not json").unwrap();

    let todos = TodoStore::load(FileStore::open(dir.path()).unwrap());
    assert!(todos.items().is_empty());

    // The store stays usable after recovery.
    let mut todos = todos;
    todos.add("fresh start");
    let reloaded = TodoStore::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.items().len(), 1);
}
