use crate::dto::ChartDataBundle;
use crate::error::DashboardError;
use crate::host::DashboardApi;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub const CHART_DATA_URL: &str = "/api/chart-data";
pub const REQUEST_DATA_URL: &str = "/api/request-data";

pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn js_error(value: JsValue) -> DashboardError {
    DashboardError::Js(describe(&value))
}

async fn send(method: &str, url: &str) -> Result<Response, DashboardError> {
    let window = web_sys::window().ok_or(DashboardError::Unavailable("window"))?;

    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    let init = RequestInit::new();
    init.set_method(method);
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| DashboardError::Network(describe(&e)))?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(DashboardError::Status(response.status()));
    }
    Ok(response)
}

async fn read_json(response: &Response) -> Result<JsValue, DashboardError> {
    let promise = response.json().map_err(js_error)?;
    JsFuture::from(promise)
        .await
        .map_err(|e| DashboardError::Decode(describe(&e)))
}

pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, DashboardError> {
    let response = send("GET", url).await?;
    let value = read_json(&response).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| DashboardError::Decode(e.to_string()))
}

/// Same-origin client for the dashboard endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl DashboardApi for HttpApi {
    async fn fetch_chart_data(&self) -> Result<ChartDataBundle, DashboardError> {
        get_json(CHART_DATA_URL).await
    }

    async fn request_data(&self) -> Result<(), DashboardError> {
        let response = send("POST", REQUEST_DATA_URL).await?;
        read_json(&response).await.map(|_| ())
    }
}
