//! User API calls against a mock server

mod common;

use std::collections::BTreeSet;

use common::{INSTANCE, TOKEN, ZONE, api_path, client_for};
use pretty_assertions::assert_eq;
use reddwarf_client::ClientError;
use reddwarf_core::params::ParamBag;
use reddwarf_core::{Database, User};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn databases(names: &[&str]) -> BTreeSet<Database> {
    names.iter().map(|n| Database::named(*n).unwrap()).collect()
}

fn three_users() -> BTreeSet<User> {
    [
        ("dbuser1", databases(&["databaseA"])),
        ("dbuser2", databases(&["databaseB", "databaseC"])),
        ("dbuser3", databases(&["databaseD"])),
    ]
    .into_iter()
    .map(|(name, dbs)| {
        User::builder()
            .name(name)
            .password("password")
            .databases(dbs)
            .build()
            .unwrap()
    })
    .collect()
}

async fn mock_create_simple(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users"))))
        .and(header("X-Auth-Token", TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "users": [{"name": "dbuser1", "password": "password", "databases": [{"name": "databaseA"}]}]
        })))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_user_simple() {
    let server = MockServer::start().await;
    mock_create_simple(&server, 202).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let created = api
        .create_simple(INSTANCE, "dbuser1", Some("password"), "databaseA")
        .await
        .unwrap();
    assert!(created);
}

#[tokio::test]
async fn test_create_user_simple_fail() {
    let server = MockServer::start().await;
    mock_create_simple(&server, 404).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let created = api
        .create_simple(INSTANCE, "dbuser1", Some("password"), "databaseA")
        .await
        .unwrap();
    assert!(!created);
}

async fn mock_create_bulk(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users"))))
        .and(body_json(json!({
            "users": [
                {"name": "dbuser1", "password": "password", "databases": [{"name": "databaseA"}]},
                {"name": "dbuser2", "password": "password", "databases": [{"name": "databaseB"}, {"name": "databaseC"}]},
                {"name": "dbuser3", "password": "password", "databases": [{"name": "databaseD"}]}
            ]
        })))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_users() {
    let server = MockServer::start().await;
    mock_create_bulk(&server, 202).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.create(INSTANCE, &three_users()).await.unwrap());
}

#[tokio::test]
async fn test_create_users_fail() {
    let server = MockServer::start().await;
    mock_create_bulk(&server, 404).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(!api.create(INSTANCE, &three_users()).await.unwrap());
}

#[tokio::test]
async fn test_create_users_from_params() {
    let server = MockServer::start().await;
    mock_create_bulk(&server, 202).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let bag = ParamBag::new().with("users", three_users());
    assert!(api.create_from_params(INSTANCE, &bag).await.unwrap());
}

#[tokio::test]
async fn test_create_from_incomplete_params_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let bag = ParamBag::new().with("name", "dbuser1");
    let err = api.create_from_params(INSTANCE, &bag).await.unwrap_err();
    assert!(matches!(err, ClientError::Core(_)));
}

async fn mock_grant(server: &MockServer, body: serde_json::Value, status: u16) {
    Mock::given(method("PUT"))
        .and(path(api_path(&format!(
            "/instances/{INSTANCE}/users/dbuser1/databases"
        ))))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_grant_user_simple() {
    let server = MockServer::start().await;
    mock_grant(&server, json!({"databases": [{"name": "databaseZ"}]}), 202).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.grant(INSTANCE, "dbuser1", "databaseZ").await.unwrap());
}

#[tokio::test]
async fn test_grant_user_simple_fail() {
    let server = MockServer::start().await;
    mock_grant(&server, json!({"databases": [{"name": "databaseZ"}]}), 404).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(!api.grant(INSTANCE, "dbuser1", "databaseZ").await.unwrap());
}

#[tokio::test]
async fn test_grant_user() {
    let server = MockServer::start().await;
    mock_grant(
        &server,
        json!({"databases": [{"name": "databaseC"}, {"name": "databaseD"}]}),
        202,
    )
    .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let granted = api
        .grant_many(INSTANCE, "dbuser1", &databases(&["databaseD", "databaseC"]))
        .await
        .unwrap();
    assert!(granted);
}

#[tokio::test]
async fn test_grant_user_from_params() {
    let server = MockServer::start().await;
    mock_grant(&server, json!({"databases": [{"name": "databaseZ"}]}), 202).await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let bag = ParamBag::new()
        .with("databaseName", "databaseZ")
        .with("databases", databases(&["ignored"]));
    assert!(api.grant_from_params(INSTANCE, "dbuser1", &bag).await.unwrap());
}

#[tokio::test]
async fn test_revoke_user() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path(&format!(
            "/instances/{INSTANCE}/users/dbuser1/databases/databaseA"
        ))))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.revoke(INSTANCE, "dbuser1", "databaseA").await.unwrap());
    // nothing mounted for databaseB, so the mock server answers 404
    assert!(!api.revoke(INSTANCE, "dbuser1", "databaseB").await.unwrap());
}

#[tokio::test]
async fn test_delete_user() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users/dbuser1"))))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.delete(INSTANCE, "dbuser1").await.unwrap());
}

#[tokio::test]
async fn test_delete_user_fail() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users/dbuser1"))))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(!api.delete(INSTANCE, "dbuser1").await.unwrap());
}

#[tokio::test]
async fn test_user_names_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users/db%20user"))))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.delete(INSTANCE, "db user").await.unwrap());
}

fn user_list() -> serde_json::Value {
    json!({
        "users": [
            {"name": "dbuser1", "databases": []},
            {"name": "dbuser2", "databases": [{"name": "databaseB"}, {"name": "databaseC"}]},
            {"name": "dbuser3", "databases": [{"name": "databaseD"}]},
            {"name": "dbuser4", "databases": [{"name": "databaseE"}]}
        ]
    })
}

#[tokio::test]
async fn test_list_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users"))))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_list()))
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let users = api.list(INSTANCE).await.unwrap();

    assert_eq!(users.len(), 4);
    assert_eq!(users[0].name(), "dbuser1");
    assert!(users[0].databases().is_empty());
    assert!(users[0].password().is_none());
    assert_eq!(users[1].databases(), &databases(&["databaseB", "databaseC"]));
}

#[tokio::test]
async fn test_list_users_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users"))))
        .respond_with(ResponseTemplate::new(404).set_body_json(user_list()))
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.list(INSTANCE).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users"))))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let err = api.list(INSTANCE).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

fn access_list() -> serde_json::Value {
    json!({"databases": [{"name": "databaseA"}, {"name": "databaseB"}]})
}

#[tokio::test]
async fn test_user_get_database_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path(&format!(
            "/instances/{INSTANCE}/users/dbuser1/databases"
        ))))
        .respond_with(ResponseTemplate::new(200).set_body_json(access_list()))
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let databases = api.get_database_list(INSTANCE, "dbuser1").await.unwrap();
    assert_eq!(databases.len(), 2);
    assert_eq!(databases[0].name(), "databaseA");
}

#[tokio::test]
async fn test_user_get_database_list_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path(&format!(
            "/instances/{INSTANCE}/users/dbuser1/databases"
        ))))
        .respond_with(ResponseTemplate::new(404).set_body_json(access_list()))
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.get_database_list(INSTANCE, "dbuser1").await.unwrap().is_empty());
}

fn user_get() -> serde_json::Value {
    json!({
        "user": {
            "name": "exampleuser",
            "databases": [{"name": "databaseA"}, {"name": "databaseB"}]
        }
    })
}

#[tokio::test]
async fn test_get_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users/exampleuser"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_get()))
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    let user = api.get(INSTANCE, "exampleuser").await.unwrap().unwrap();
    assert_eq!(user.name(), "exampleuser");
    assert_eq!(user.databases().len(), 2);
    assert_eq!(user.databases().iter().next().unwrap().name(), "databaseA");
}

#[tokio::test]
async fn test_get_user_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path(&format!("/instances/{INSTANCE}/users/exampleuser"))))
        .respond_with(ResponseTemplate::new(404).set_body_json(user_get()))
        .mount(&server)
        .await;

    let api = client_for(&server).user_api_for_zone(ZONE).unwrap();
    assert!(api.get(INSTANCE, "exampleuser").await.unwrap().is_none());
}
