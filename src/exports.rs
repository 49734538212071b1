//! The `window.appUtils` namespace used by the page templates.
//!
//! Each entry is a JS function wrapping the Rust helper of the same purpose,
//! with the defaults page scripts rely on (`method = "GET"`, `type =
//! "success"`, `minute = 0`, `min = 0`, `max = Infinity`). Values cross the
//! boundary as JSON text so `storage` and `apiCall` accept any serializable
//! JS value.
//!
//! Argument handling is plain Rust over [`Arg`]; only the `JsValue` glue
//! needs the browser.

#[cfg(test)]
#[path = "exports_test.rs"]
mod exports_test;

#[cfg(feature = "hydrate")]
use js_sys::{JSON, Object, Promise, Reflect};
#[cfg(feature = "hydrate")]
use serde_json::Value;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::future_to_promise;

#[cfg(feature = "hydrate")]
use crate::dom::loading::{hide_loading, show_loading};
#[cfg(any(test, feature = "hydrate"))]
use crate::dom::toast::ToastKind;
#[cfg(feature = "hydrate")]
use crate::dom::toast::show_toast;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::{ApiError, Method};
#[cfg(feature = "hydrate")]
use crate::net::api::{FetchTransport, api_call};
#[cfg(feature = "hydrate")]
use crate::util::format::format_currency;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::format::{NumberRange, format_time, parse_float, validate_number};
#[cfg(feature = "hydrate")]
use crate::util::storage::JsonStorage;

/// A JS argument, reduced to the shapes the helpers read.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq)]
enum Arg {
    /// `undefined`: the caller left the argument out.
    Missing,
    Number(f64),
    Text(String),
    Other,
}

#[cfg(any(test, feature = "hydrate"))]
impl Arg {
    /// Read as a number the way `parseFloat` would.
    fn number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_float(s),
            Self::Missing | Self::Other => f64::NAN,
        }
    }

    /// The number, or `default` when the argument was left out.
    fn number_or(&self, default: f64) -> f64 {
        match self {
            Self::Missing => default,
            _ => self.number(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn int_or(&self, default: i32) -> i32 {
        self.number_or(f64::from(default)) as i32
    }
}

#[cfg(feature = "hydrate")]
impl From<&JsValue> for Arg {
    fn from(value: &JsValue) -> Self {
        if value.is_undefined() {
            Self::Missing
        } else if let Some(n) = value.as_f64() {
            Self::Number(n)
        } else if let Some(s) = value.as_string() {
            Self::Text(s)
        } else {
            Self::Other
        }
    }
}

/// The request method for `apiCall`: `GET` when none is given. An unknown
/// name is logged like any other failed call before it is rejected.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_method(name: Option<&str>) -> Result<Method, ApiError> {
    let Some(name) = name else {
        return Ok(Method::Get);
    };
    name.parse()
        .inspect_err(|e| leptos::logging::error!("API call failed: {e}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn toast_kind(name: Option<&str>) -> ToastKind {
    name.map_or_else(ToastKind::default, ToastKind::from_name)
}

#[cfg(any(test, feature = "hydrate"))]
fn time_args(hour: &Arg, minute: &Arg) -> String {
    format_time(hour.int_or(0), minute.int_or(0))
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_args(value: &Arg, min: &Arg, max: &Arg) -> bool {
    let defaults = NumberRange::default();
    let range = NumberRange::new(min.number_or(defaults.min), max.number_or(defaults.max));
    validate_number(value.number(), range)
}

#[cfg(feature = "hydrate")]
fn js_to_json(value: &JsValue) -> Result<Option<Value>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    // Functions and symbols stringify to `undefined`.
    let Some(text) = JSON::stringify(value)?.as_string() else {
        return Ok(None);
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| js_error(&e.to_string()))
}

#[cfg(feature = "hydrate")]
fn json_to_js(value: &Value) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| js_error(&e.to_string()))?;
    JSON::parse(&text)
}

#[cfg(feature = "hydrate")]
fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

#[cfg(feature = "hydrate")]
fn set_property(target: &Object, name: &str, value: &JsValue) -> Result<(), JsValue> {
    let key = JsValue::from_str(name);
    Reflect::set(target, &key, value).map(|_| ())
}

#[cfg(feature = "hydrate")]
fn api_call_export(url: String, method: JsValue, data: JsValue) -> Promise {
    future_to_promise(async move {
        let method = resolve_method(method.as_string().as_deref())
            .map_err(|e| js_error(&e.to_string()))?;
        let data = js_to_json(&data)?;
        let value = api_call(&FetchTransport, &url, method, data.as_ref())
            .await
            .map_err(|e| js_error(&e.to_string()))?;
        json_to_js(&value)
    })
}

#[cfg(feature = "hydrate")]
fn storage_object() -> Result<Object, JsValue> {
    let storage = Object::new();

    let set = Closure::<dyn Fn(String, JsValue)>::new(|key: String, value: JsValue| {
        let value = js_to_json(&value).map(|v| v.unwrap_or(Value::Null));
        match value {
            Ok(value) => JsonStorage::local().set(&key, &value),
            Err(e) => leptos::logging::error!("Storage error: {e:?}"),
        }
    });
    set_property(&storage, "set", set.as_ref())?;
    set.forget();

    let get = Closure::<dyn Fn(String) -> JsValue>::new(|key: String| {
        JsonStorage::local()
            .get::<Value>(&key)
            .and_then(|value| json_to_js(&value).ok())
            .unwrap_or(JsValue::NULL)
    });
    set_property(&storage, "get", get.as_ref())?;
    get.forget();

    let remove = Closure::<dyn Fn(String)>::new(|key: String| JsonStorage::local().remove(&key));
    set_property(&storage, "remove", remove.as_ref())?;
    remove.forget();

    Ok(storage)
}

/// Build the `appUtils` object and attach it to `window`.
///
/// # Errors
///
/// Returns the JS error if there is no window or a property cannot be set.
#[cfg(feature = "hydrate")]
pub fn install_app_utils() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let utils = Object::new();

    let api = Closure::<dyn Fn(String, JsValue, JsValue) -> Promise>::new(api_call_export);
    set_property(&utils, "apiCall", api.as_ref())?;
    api.forget();

    let show = Closure::<dyn Fn(JsValue)>::new(|element: JsValue| {
        if let Ok(element) = element.dyn_into::<web_sys::Element>() {
            show_loading(&element);
        }
    });
    set_property(&utils, "showLoading", show.as_ref())?;
    show.forget();

    let hide = Closure::<dyn Fn(JsValue)>::new(|element: JsValue| {
        if let Ok(element) = element.dyn_into::<web_sys::Element>() {
            hide_loading(&element);
        }
    });
    set_property(&utils, "hideLoading", hide.as_ref())?;
    hide.forget();

    let toast = Closure::<dyn Fn(String, JsValue)>::new(|message: String, kind: JsValue| {
        show_toast(&message, toast_kind(kind.as_string().as_deref()));
    });
    set_property(&utils, "showToast", toast.as_ref())?;
    toast.forget();

    let currency = Closure::<dyn Fn(JsValue) -> String>::new(|amount: JsValue| {
        let amount = Arg::from(&amount);
        format_currency(amount.number())
    });
    set_property(&utils, "formatCurrency", currency.as_ref())?;
    currency.forget();

    let time = Closure::<dyn Fn(JsValue, JsValue) -> String>::new(
        |hour: JsValue, minute: JsValue| {
            let (hour, minute) = (Arg::from(&hour), Arg::from(&minute));
            time_args(&hour, &minute)
        },
    );
    set_property(&utils, "formatTime", time.as_ref())?;
    time.forget();

    let validate = Closure::<dyn Fn(JsValue, JsValue, JsValue) -> bool>::new(
        |value: JsValue, min: JsValue, max: JsValue| {
            let value = Arg::from(&value);
            validate_args(&value, &Arg::from(&min), &Arg::from(&max))
        },
    );
    set_property(&utils, "validateNumber", validate.as_ref())?;
    validate.forget();

    set_property(&utils, "storage", &storage_object()?)?;

    set_property(&window, "appUtils", &utils)
}
