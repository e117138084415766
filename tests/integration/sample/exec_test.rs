use sample_bridge_lib::{BridgeConfig, ExecRequest, PluginManager, PluginStatus};
use serde_json::json;

use super::test_utils::{manager, request};

#[tokio::test]
async fn hello_world_round_trip() {
    let result = manager().exec(request("hello", vec![json!("World")])).await;
    assert_eq!(result.status(), PluginStatus::Ok);
    assert_eq!(result.message(), "Hello World");
}

#[tokio::test]
async fn hello_empty_name() {
    let result = manager().exec(request("hello", vec![json!("")])).await;
    assert!(result.is_ok());
    assert_eq!(result.message(), "Hello ");
}

#[tokio::test]
async fn goodbye_is_invalid_action() {
    let result = manager().exec(request("goodbye", vec![json!("World")])).await;
    assert_eq!(result.status(), PluginStatus::InvalidAction);
    assert!(result.message().is_null());
}

#[tokio::test]
async fn hello_without_args_reports_json_exception() {
    let result = manager().exec(request("hello", vec![])).await;
    assert_eq!(result.status(), PluginStatus::JsonException);
    assert_eq!(result.message(), "JSONArray[0] not found.");
}

#[tokio::test]
async fn hello_with_number_reports_json_exception() {
    let result = manager().exec(request("hello", vec![json!(42)])).await;
    assert_eq!(result.status(), PluginStatus::JsonException);
    let message = result.message().as_str().unwrap_or_default();
    assert!(message.contains("not a string"));
}

#[tokio::test]
async fn unknown_service_is_class_not_found() {
    let mut req = request("hello", vec![json!("World")]);
    req.service = "Nope".to_string();
    let result = manager().exec(req).await;
    assert_eq!(result.status(), PluginStatus::ClassNotFoundException);
}

#[tokio::test]
async fn request_decoded_from_webview_json() {
    let req: ExecRequest = serde_json::from_value(json!({
        "service": "Sample",
        "action": "hello",
        "args": ["Bridge"],
        "callback_id": "Sample1"
    }))
    .unwrap();
    let result = manager().exec(req).await;
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "status": 1, "message": "Hello Bridge" })
    );
}

#[tokio::test]
async fn configured_service_name_routes_calls() {
    let config = BridgeConfig::from_json(r#"{ "service": "Greeter" }"#).unwrap();
    let manager = PluginManager::from_config(&config);
    let mut req = request("hello", vec![json!("Ada")]);
    req.service = "Greeter".to_string();
    assert_eq!(manager.exec(req).await.message(), "Hello Ada");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_are_independent() {
    let manager = manager();
    let handles: Vec<_> = (0..32)
        .map(|i| {
            let manager = manager.clone();
            tokio::spawn(async move {
                let name = format!("caller-{i}");
                let result = manager.exec(request("hello", vec![json!(name.clone())])).await;
                (name, result)
            })
        })
        .collect();

    for handle in handles {
        let (name, result) = handle.await.unwrap();
        assert!(result.is_ok());
        assert_eq!(result.message().as_str(), Some(format!("Hello {name}").as_str()));
    }
}
