//! End-to-end behavior of a session against a scripted catalog.
//!
//! Time is paused: debounce timers fire only when the test sleeps past them or
//! every task is idle, which makes ordering deterministic.

use async_trait::async_trait;
use cocktaildb::app::{AppState, DetailStatus, SearchStatus};
use cocktaildb::catalog::{CatalogClient, RawPayload};
use cocktaildb::session::{Session, SessionHandle};
use cocktaildb::{start_with_client, CatalogError, Config, DetailState, SearchState};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

const DEBOUNCE: Duration = Duration::from_millis(300);

enum Reply {
    Body(Value),
    Unreadable,
}

/// Catalog stub that records every call and answers from a script.
///
/// Keys are `search:<term>` and `lookup:<id>`. Unscripted keys answer
/// `{"drinks": null}`. A gated key holds its reply until released.
#[derive(Default)]
struct StubCatalog {
    calls: Mutex<Vec<String>>,
    replies: Mutex<HashMap<String, Reply>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl StubCatalog {
    fn reply(&self, key: &str, reply: Reply) -> &Self {
        self.replies.lock().unwrap().insert(key.to_string(), reply);
        self
    }

    fn gate(&self, key: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::clone(&gate));
        gate
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, key: String) -> cocktaildb::Result<RawPayload> {
        self.calls.lock().unwrap().push(key.clone());

        let gate = self.gates.lock().unwrap().get(&key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match self.replies.lock().unwrap().get(&key) {
            Some(Reply::Body(body)) => Ok(RawPayload(body.clone())),
            Some(Reply::Unreadable) => Err(CatalogError::Decode(
                serde_json::from_str::<Value>("<html>bad gateway</html>").unwrap_err(),
            )),
            None => Ok(RawPayload(json!({ "drinks": null }))),
        }
    }
}

#[async_trait]
impl CatalogClient for StubCatalog {
    async fn search_by_name(&self, term: &str) -> cocktaildb::Result<RawPayload> {
        self.answer(format!("search:{term}")).await
    }

    async fn lookup_by_id(&self, id: &str) -> cocktaildb::Result<RawPayload> {
        self.answer(format!("lookup:{id}")).await
    }
}

fn drinks(records: &[(&str, &str)]) -> Reply {
    let records: Vec<Value> = records
        .iter()
        .map(|(id, name)| {
            json!({
                "idDrink": id,
                "strDrink": name,
                "strGlass": "Highball glass",
                "strAlcoholic": "Alcoholic",
                "strDrinkThumb": format!("https://example.test/{id}.jpg"),
            })
        })
        .collect();
    Reply::Body(json!({ "drinks": records }))
}

fn mojito(id: &str) -> Reply {
    Reply::Body(json!({
        "drinks": [{
            "idDrink": id,
            "strDrink": "Mojito",
            "strDrinkThumb": "https://example.com/mojito.jpg",
            "strAlcoholic": "Alcoholic",
            "strCategory": "Cocktail",
            "strGlass": "Highball glass",
            "strInstructions": "Muddle mint leaves with simple syrup and water.",
            "strIngredient1": "Light rum",
            "strIngredient2": "Fresh lime",
            "strIngredient3": "Sugar",
            "strIngredient4": "Mint",
            "strIngredient5": "Soda water",
            "strIngredient6": null,
        }]
    }))
}

fn spawn(stub: &Arc<StubCatalog>) -> SessionHandle {
    Session::spawn(AppState::new(DEBOUNCE), Arc::clone(stub) as Arc<dyn CatalogClient>)
}

async fn settled_search(handle: &SessionHandle, term: &str) -> SearchState {
    let mut rx = handle.search_state();
    let state = rx
        .wait_for(|s| s.term == term && s.status.is_terminal())
        .await
        .unwrap()
        .clone();
    state
}

async fn settled_detail(handle: &SessionHandle, identifier: &str) -> DetailState {
    let mut rx = handle.detail_state();
    let state = rx
        .wait_for(|s| s.identifier == identifier && s.status.is_terminal())
        .await
        .unwrap()
        .clone();
    state
}

/// Lets every runnable task finish before returning.
async fn quiesce() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn burst_of_keystrokes_sends_one_search_for_the_final_term() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("search:mojito", drinks(&[("11000", "Mojito")]));
    let handle = spawn(&stub);

    for term in ["m", "mo", "moj", "moji", "mojit", "mojito"] {
        handle.set_term(term).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    let state = settled_search(&handle, "mojito").await;
    assert_eq!(state.status, SearchStatus::Success);
    assert_eq!(state.results[0].name, "Mojito");
    assert_eq!(stub.calls(), vec!["search:mojito"]);
}

#[tokio::test(start_paused = true)]
async fn out_of_order_responses_end_on_the_latest_term() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("search:a", drinks(&[("1", "Aviation")]))
        .reply("search:b", drinks(&[("2", "Bramble")]));
    let gate_a = stub.gate("search:a");
    let gate_b = stub.gate("search:b");
    let handle = spawn(&stub);

    handle.set_term("a").unwrap();
    tokio::time::sleep(DEBOUNCE * 2).await;
    handle.set_term("b").unwrap();
    tokio::time::sleep(DEBOUNCE * 2).await;
    assert_eq!(stub.calls(), vec!["search:a", "search:b"]);

    gate_b.notify_one();
    let state = settled_search(&handle, "b").await;
    assert_eq!(state.results[0].name, "Bramble");

    gate_a.notify_one();
    quiesce().await;

    let state = handle.search_state().borrow().clone();
    assert_eq!(state.term, "b");
    assert_eq!(state.status, SearchStatus::Success);
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].name, "Bramble");
}

#[tokio::test(start_paused = true)]
async fn term_change_while_loading_shows_loading_for_the_new_term() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("search:gin", drinks(&[("1", "Gimlet")]));
    let gate = stub.gate("search:gin");
    let handle = spawn(&stub);

    handle.set_term("gin").unwrap();
    tokio::time::sleep(DEBOUNCE * 2).await;
    handle.set_term("gin fizz").unwrap();
    quiesce().await;

    let state = handle.search_state().borrow().clone();
    assert_eq!(state.term, "gin fizz");
    assert_eq!(state.status, SearchStatus::Loading);

    gate.notify_one();
    let state = settled_search(&handle, "gin fizz").await;
    assert_eq!(state.status, SearchStatus::Empty);
}

#[tokio::test(start_paused = true)]
async fn null_drinks_settle_as_empty() {
    let stub = Arc::new(StubCatalog::default());
    let handle = spawn(&stub);

    handle.set_term("zzzz").unwrap();
    let state = settled_search(&handle, "zzzz").await;

    assert_eq!(state.status, SearchStatus::Empty);
    assert!(state.results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_search_settles_as_error_without_stale_results() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("search:gin", drinks(&[("1", "Gimlet")]))
        .reply("search:rum", Reply::Unreadable);
    let handle = spawn(&stub);

    handle.set_term("gin").unwrap();
    settled_search(&handle, "gin").await;
    handle.set_term("rum").unwrap();
    let state = settled_search(&handle, "rum").await;

    assert_eq!(state.status, SearchStatus::Error);
    assert!(state.results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn repeating_the_settled_term_does_not_refetch() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("search:gin", drinks(&[("1", "Gimlet")]));
    let handle = spawn(&stub);

    handle.set_term("gin").unwrap();
    settled_search(&handle, "gin").await;
    handle.set_term("gin").unwrap();
    tokio::time::sleep(DEBOUNCE * 3).await;

    assert_eq!(stub.calls(), vec!["search:gin"]);
    assert_eq!(handle.search_state().borrow().status, SearchStatus::Success);
}

#[tokio::test(start_paused = true)]
async fn detail_lookup_finds_the_record() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("lookup:123", mojito("123"));
    let handle = spawn(&stub);

    handle.set_identifier("123").unwrap();
    let state = settled_detail(&handle, "123").await;

    assert_eq!(state.status, DetailStatus::Found);
    let detail = state.detail.unwrap();
    assert_eq!(detail.name, "Mojito");
    assert_eq!(
        detail.ingredients,
        vec!["Light rum", "Fresh lime", "Sugar", "Mint", "Soda water"]
    );
    assert_eq!(stub.calls(), vec!["lookup:123"]);
}

#[tokio::test(start_paused = true)]
async fn failed_or_missing_lookup_is_not_found() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("lookup:500", Reply::Unreadable);
    let handle = spawn(&stub);

    handle.set_identifier("500").unwrap();
    let failed = settled_detail(&handle, "500").await;
    assert_eq!(failed.status, DetailStatus::NotFound);
    assert!(failed.detail.is_none());

    handle.set_identifier("0").unwrap();
    let missing = settled_detail(&handle, "0").await;
    assert_eq!(missing.status, DetailStatus::NotFound);
    assert!(missing.detail.is_none());
}

#[tokio::test(start_paused = true)]
async fn identifier_change_mid_flight_keeps_the_second_lookup() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("lookup:111", mojito("111"))
        .reply("lookup:222", mojito("222"));
    let gate_first = stub.gate("lookup:111");
    let gate_second = stub.gate("lookup:222");
    let handle = spawn(&stub);

    handle.set_identifier("111").unwrap();
    handle.set_identifier("222").unwrap();
    quiesce().await;
    assert_eq!(stub.calls(), vec!["lookup:111", "lookup:222"]);

    gate_second.notify_one();
    let state = settled_detail(&handle, "222").await;
    assert_eq!(state.status, DetailStatus::Found);

    gate_first.notify_one();
    quiesce().await;

    let state = handle.detail_state().borrow().clone();
    assert_eq!(state.identifier, "222");
    assert_eq!(state.detail.map(|d| d.id), Some("222".to_string()));
}

#[tokio::test(start_paused = true)]
async fn start_searches_the_initial_term() {
    let stub = Arc::new(StubCatalog::default());
    stub.reply("search:a", drinks(&[("1", "A1"), ("2", "ABC")]));
    let config = Config::default();

    let handle = start_with_client(&config, Arc::clone(&stub) as Arc<dyn CatalogClient>).unwrap();
    let state = settled_search(&handle, "a").await;

    assert_eq!(state.status, SearchStatus::Success);
    assert_eq!(state.results.len(), 2);
    assert_eq!(stub.calls(), vec!["search:a"]);
}
