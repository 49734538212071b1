use super::*;
use futures::executor::block_on;
use serde_json::json;
use std::cell::RefCell;

struct StubTransport {
    response: Result<String, String>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl StubTransport {
    fn replying(body: &str) -> Self {
        Self {
            response: Ok(body.to_owned()),
            sent: RefCell::default(),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_owned()),
            sent: RefCell::default(),
        }
    }

    fn last(&self) -> ApiRequest {
        self.sent.borrow().last().cloned().unwrap()
    }
}

#[async_trait(?Send)]
impl HttpTransport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        self.sent.borrow_mut().push(request);
        self.response.clone().map_err(ApiError::Network)
    }
}

fn call(
    transport: &StubTransport,
    url: &str,
    method: Method,
    data: Option<&Value>,
) -> Result<Value, ApiError> {
    block_on(api_call(transport, url, method, data))
}

#[test]
fn get_without_data_sends_no_body() {
    let transport = StubTransport::replying(r#"{"ok":true}"#);
    let result = call(&transport, "/api/tariffs", Method::default(), None);
    assert_eq!(result.unwrap(), json!({ "ok": true }));
    let expected = ApiRequest {
        url: "/api/tariffs".to_owned(),
        method: Method::Get,
        body: None,
    };
    assert_eq!(transport.last(), expected);
}

#[test]
fn post_serializes_data_as_json_body() {
    let transport = StubTransport::replying("[1,2]");
    let data = json!({ "name": "Heater", "power_kw": 1.5 });
    let result = call(&transport, "/api/add_appliance", Method::Post, Some(&data));
    assert_eq!(result.unwrap(), json!([1, 2]));
    let sent = transport.last();
    assert_eq!(sent.method, Method::Post);
    let raw = sent.body.unwrap();
    let body: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(body, data);
}

#[test]
fn falsy_data_is_not_sent() {
    for data in [json!(null), json!(false), json!(0), json!("")] {
        let request = ApiRequest::new("/x", Method::Post, Some(&data)).unwrap();
        assert_eq!(request.body, None, "{data} should not produce a body");
    }
    let empty = json!([]);
    let request = ApiRequest::new("/x", Method::Post, Some(&empty)).unwrap();
    assert_eq!(request.body.as_deref(), Some("[]"));
}

#[test]
fn network_failure_reaches_the_caller() {
    let transport = StubTransport::failing("connection refused");
    let result = call(&transport, "/api/optimize", Method::Post, None);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn invalid_json_response_reaches_the_caller() {
    let transport = StubTransport::replying("<html>500</html>");
    let result = call(&transport, "/api/optimize", Method::Get, None);
    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn method_parses_case_insensitively() {
    assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
    assert_eq!(" Post ".parse::<Method>().unwrap(), Method::Post);
    assert_eq!(Method::Patch.to_string(), "PATCH");
}

#[test]
fn head_and_options_are_supported_methods() {
    assert_eq!("HEAD".parse::<Method>().unwrap(), Method::Head);
    assert_eq!("options".parse::<Method>().unwrap(), Method::Options);
    assert_eq!(Method::Options.as_str(), "OPTIONS");
}

#[test]
fn unknown_method_names_are_rejected() {
    let err = "TRACE".parse::<Method>().unwrap_err();
    assert_eq!(err.to_string(), "unsupported HTTP method: TRACE");
}

#[test]
fn truthiness_follows_javascript() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(0.0)));
    assert!(is_truthy(&json!(-1)));
    assert!(is_truthy(&json!("0")));
    assert!(is_truthy(&json!({})));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_transport_fails_outside_browser() {
    let reply = api_call(&FetchTransport, "/api/optimize", Method::Get, None);
    let err = block_on(reply).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
