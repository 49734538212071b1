use super::*;
use crate::net::api::ApiRequest;
use async_trait::async_trait;
use futures::executor::block_on;
use std::cell::RefCell;

#[derive(Default)]
struct EchoTransport {
    sent: RefCell<Vec<ApiRequest>>,
}

#[async_trait(?Send)]
impl HttpTransport for EchoTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        self.sent.borrow_mut().push(request);
        Ok(r#"{"success":true}"#.to_owned())
    }
}

impl EchoTransport {
    fn only(&self) -> ApiRequest {
        let sent = self.sent.borrow();
        assert_eq!(sent.len(), 1);
        sent[0].clone()
    }
}

#[test]
fn delete_appliance_endpoint_formats_expected_path() {
    assert_eq!(delete_appliance_endpoint(42), "/api/delete_appliance/42");
}

#[test]
fn add_appliance_posts_appliance_body() {
    let transport = EchoTransport::default();
    let appliance = json!({ "name": "Dryer", "power_kw": 3.0, "duration_hours": 1.0 });
    let reply = block_on(add_appliance(&transport, &appliance)).unwrap();
    assert_eq!(reply, json!({ "success": true }));
    let sent = transport.only();
    assert_eq!(sent.url, ADD_APPLIANCE_ENDPOINT);
    assert_eq!(sent.method, Method::Post);
    let raw = sent.body.unwrap();
    assert_eq!(serde_json::from_str::<Value>(&raw).unwrap(), appliance);
}

#[test]
fn delete_appliance_sends_delete_without_body() {
    let transport = EchoTransport::default();
    block_on(delete_appliance(&transport, 3)).unwrap();
    let sent = transport.only();
    assert_eq!(sent.url, "/api/delete_appliance/3");
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.body, None);
}

#[test]
fn optimize_schedule_wraps_ids_and_constraints() {
    let transport = EchoTransport::default();
    let constraints = json!({ "start_after": 22 });
    let reply = optimize_schedule(&transport, &[1, 3], &constraints);
    block_on(reply).unwrap();
    let sent = transport.only();
    assert_eq!(sent.url, OPTIMIZE_ENDPOINT);
    let raw = sent.body.unwrap();
    let body: Value = serde_json::from_str(&raw).unwrap();
    let expected = json!({ "appliances": [1, 3], "constraints": { "start_after": 22 } });
    assert_eq!(body, expected);
}

#[test]
fn calculate_savings_posts_schedule() {
    let transport = EchoTransport::default();
    let schedule = json!({ "schedule": [{ "id": 1, "start_hour": 2 }] });
    block_on(calculate_savings(&transport, &schedule)).unwrap();
    assert_eq!(transport.only().url, CALCULATE_SAVINGS_ENDPOINT);
}
