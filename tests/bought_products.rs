//! Integration tests for the purchase query.

mod support;

use bought_products::{
    BoughtProductsError, BoughtProductsService, Client, GroceryList, GroceryListItem,
    InMemoryStore, Product, RecordStore, StoreError,
};
use rstest::rstest;
use support::{anna_and_bob, names, service, Capability, FlakyStore};

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(client, list)| (client.to_string(), list.to_string()))
        .collect()
}

#[test]
fn anna_before_bob() {
    let store = anna_and_bob();

    let rows = service(&store).get(Some(5)).unwrap();

    assert_eq!(names(&rows), pairs(&[("Anna", "Weekly"), ("Bob", "Monthly")]));
    assert!(rows.iter().all(|row| row.product == Product::new(5, "Milk")));
}

#[test]
fn missing_list_drops_the_row() {
    let store = InMemoryStore::new();
    store.insert(&Product::new(5, "Milk")).unwrap();
    store.insert(&GroceryListItem::new(100, 99, 5, 1)).unwrap();

    assert!(service(&store).get(Some(5)).unwrap().is_empty());
}

#[rstest]
#[case::absent(None)]
#[case::zero(Some(0))]
#[case::negative(Some(-1))]
#[case::very_negative(Some(i64::MIN))]
fn invalid_product_id_is_empty(#[case] product_id: Option<i64>) {
    let store = anna_and_bob();
    assert!(service(&store).get(product_id).unwrap().is_empty());
}

#[rstest]
#[case::never_bought(6)]
#[case::unknown_product(404)]
fn no_matching_items_is_empty(#[case] product_id: i64) {
    let store = anna_and_bob();
    assert!(service(&store).get(Some(product_id)).unwrap().is_empty());
}

#[rstest]
#[case::missing_list(GroceryListItem::new(200, 99, 5, 1))]
#[case::missing_client(GroceryListItem::new(200, 30, 5, 1))]
fn each_dangling_reference_removes_one_row(#[case] dangling: GroceryListItem) {
    let store = anna_and_bob();
    // list 30 points at a client that does not exist
    store.insert(&GroceryList::new(30, 77, "Orphaned")).unwrap();
    let before = service(&store).get(Some(5)).unwrap().len();

    store.insert(&dangling).unwrap();
    store.insert(&GroceryListItem::new(201, 20, 5, 1)).unwrap();

    // one valid row added, the dangling one contributes nothing
    assert_eq!(service(&store).get(Some(5)).unwrap().len(), before + 1);
}

#[test]
fn missing_product_drops_every_row() {
    let store = anna_and_bob();
    store.delete::<Product>(5).unwrap();

    assert!(service(&store).get(Some(5)).unwrap().is_empty());
}

#[test]
fn output_is_sorted_by_client_then_list() {
    let store = InMemoryStore::new();
    store.insert(&Product::new(1, "Eggs")).unwrap();

    let clients = ["Zoe", "Anna", "Mia", "anna", "Bob"];
    let lists = ["Weekly", "BBQ", "Monthly", "Weekly", "Camping"];
    let mut item_id = 1;
    for (client_id, client) in clients.iter().enumerate() {
        let client_id = client_id as i64 + 1;
        store.insert(&Client::new(client_id, client)).unwrap();
        for (offset, list) in lists.iter().enumerate() {
            let list_id = client_id * 100 + offset as i64;
            store.insert(&GroceryList::new(list_id, client_id, list)).unwrap();
            store
                .insert(&GroceryListItem::new(item_id, list_id, 1, 1))
                .unwrap();
            item_id += 1;
        }
    }

    let rows = service(&store).get(Some(1)).unwrap();
    assert_eq!(rows.len(), clients.len() * lists.len());

    for pair in rows.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.client.name <= b.client.name);
        if a.client.name == b.client.name {
            assert!(a.grocery_list.name <= b.grocery_list.name);
        }
    }
    assert_eq!(rows[0].client.name, "Anna");
    assert_eq!(rows[0].grocery_list.name, "BBQ");
    assert_eq!(rows.last().unwrap().client.name, "anna");
}

#[test]
fn equal_names_keep_store_order() {
    let store = anna_and_bob();
    // a second "Weekly" list for Anna, bought from after the first
    store.insert(&GroceryList::new(21, 2, "Weekly")).unwrap();
    store.insert(&GroceryListItem::new(102, 21, 5, 1)).unwrap();

    let rows = service(&store).get(Some(5)).unwrap();

    let weekly_ids: Vec<i64> = rows
        .iter()
        .filter(|row| row.grocery_list.name == "Weekly")
        .map(|row| row.grocery_list.id)
        .collect();
    assert_eq!(weekly_ids, vec![20, 21]);
}

#[test]
fn repeated_queries_agree() {
    let store = anna_and_bob();
    let service = service(&store);

    let first = service.get(Some(5)).unwrap();
    let second = service.get(Some(5)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn sees_store_changes_between_calls() {
    let store = anna_and_bob();
    let service = service(&store);
    assert_eq!(service.get(Some(6)).unwrap().len(), 0);

    store.insert(&GroceryListItem::new(300, 20, 6, 2)).unwrap();

    assert_eq!(
        names(&service.get(Some(6)).unwrap()),
        pairs(&[("Anna", "Weekly")])
    );
}

#[rstest]
#[case::items(Capability::Items)]
#[case::lists(Capability::Lists)]
#[case::clients(Capability::Clients)]
#[case::products(Capability::Products)]
fn unavailable_store_fails_the_whole_query(#[case] broken: Capability) {
    let store = anna_and_bob();
    let flaky = || FlakyStore::new(store.clone(), broken);
    let service = BoughtProductsService::new(flaky(), flaky(), flaky(), flaky());

    let err = service.get(Some(5)).unwrap_err();

    assert_eq!(
        err,
        BoughtProductsError::RepositoryUnavailable(StoreError::Unavailable(format!(
            "{:?} offline",
            broken
        )))
    );
}

#[test]
fn unavailable_store_is_not_touched_for_invalid_ids() {
    let store = anna_and_bob();
    let flaky = || FlakyStore::new(store.clone(), Capability::Items);
    let service = BoughtProductsService::new(flaky(), flaky(), flaky(), flaky());

    assert!(service.get(None).unwrap().is_empty());
}
