//! Browser entry point: Chart.js bindings, DOM-backed implementations of the
//! host traits, and the event wiring done once the module loads.

use crate::bridge::HttpApi;
use crate::chart_config::{ChartConfig, ChartData};
use crate::controller::Dashboard;
use crate::dto::ChartDataUpdate;
use crate::host::{ButtonControl, ChartBackend, ChartHandle, Page, Sleep};
use crate::reveal::{self, Crossing, RevealSurface, RevealTracker};
use crate::scroll;
use crate::submit::{self, SubmitOutcome};
use crate::tooltip::{self, TooltipContext, TooltipFormat};
use js_sys::{Array, Object, Promise, Reflect};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    console, Document, Element, Event, HtmlButtonElement, HtmlCanvasElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

const SUBMIT_BUTTON_ID: &str = "requestDataBtn";
const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

type JsCallback = Closure<dyn Fn(JsValue) -> JsValue>;
type DashboardSlot = Rc<RefCell<Option<Dashboard<WebChartBackend>>>>;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, setter, js_class = "Chart")]
    fn set_data(this: &JsChart, data: &JsValue);

    #[wasm_bindgen(method, js_class = "Chart")]
    fn update(this: &JsChart, mode: &str);

    #[wasm_bindgen(method, js_class = "Chart")]
    fn resize(this: &JsChart);

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &JsChart);
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

/// Sets `value` at `path` below `root`, creating intermediate objects.
fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), JsValue> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| JsValue::from_str("empty option path"))?;

    let mut target = root.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let mut next = Reflect::get(&target, &key)?;
        if next.is_undefined() || next.is_null() {
            next = Object::new().into();
            Reflect::set(&target, &key, &next)?;
        }
        target = next;
    }
    Reflect::set(&target, &JsValue::from_str(last), value)?;
    Ok(())
}

fn log_error(context: &str, err: &JsValue) {
    console::error_2(&JsValue::from_str(context), err);
}

fn tooltip_callback(format: TooltipFormat) -> JsCallback {
    Closure::new(move |ctx: JsValue| {
        let label = get(&ctx, "label").as_string().unwrap_or_default();
        let parsed = get(&ctx, "parsed");
        let value = match format.value_axis() {
            Some(axis) => get(&parsed, axis.key()).as_f64(),
            None => parsed.as_f64(),
        }
        .unwrap_or(0.0);
        let dataset: Vec<f64> = get(&get(&ctx, "dataset"), "data")
            .dyn_into::<Array>()
            .map(|values| values.iter().filter_map(|v| v.as_f64()).collect())
            .unwrap_or_default();

        let text = format.render(&TooltipContext {
            label: &label,
            value,
            dataset: &dataset,
        });
        JsValue::from_str(&text)
    })
}

fn abs_tick_callback() -> JsCallback {
    Closure::new(|value: JsValue| JsValue::from_f64(tooltip::abs_tick(value.as_f64().unwrap_or(0.0))))
}

pub struct WebChart {
    chart: JsChart,
    canvas: HtmlCanvasElement,
    _callbacks: Vec<JsCallback>,
}

impl WebChart {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl ChartHandle for WebChart {
    fn set_data(&mut self, data: &ChartData) {
        match to_js(data) {
            Ok(value) => self.chart.set_data(&value),
            Err(err) => log_error("failed to convert chart data", &err),
        }
    }

    fn update(&mut self) {
        self.chart.update("active");
    }

    fn resize(&self) {
        self.chart.resize();
    }
}

impl Drop for WebChart {
    fn drop(&mut self) {
        self.chart.destroy();
    }
}

pub struct WebChartBackend {
    document: Document,
}

impl WebChartBackend {
    fn build(&self, canvas: HtmlCanvasElement, config: &ChartConfig) -> Result<WebChart, JsValue> {
        let js_config = to_js(config)?;
        let mut callbacks = Vec::new();

        let label = tooltip_callback(config.callbacks.tooltip);
        set_path(
            &js_config,
            &["options", "plugins", "tooltip", "callbacks", "label"],
            label.as_ref(),
        )?;
        callbacks.push(label);

        if let Some(axis) = config.callbacks.abs_ticks {
            let ticks = abs_tick_callback();
            set_path(
                &js_config,
                &["options", "scales", axis.key(), "ticks", "callback"],
                ticks.as_ref(),
            )?;
            callbacks.push(ticks);
        }

        let chart = JsChart::new(&canvas, &js_config)?;
        Ok(WebChart {
            chart,
            canvas,
            _callbacks: callbacks,
        })
    }
}

impl ChartBackend for WebChartBackend {
    type Chart = WebChart;

    fn create(&self, mount_id: &str, config: &ChartConfig) -> Option<WebChart> {
        let canvas = self
            .document
            .get_element_by_id(mount_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;

        match self.build(canvas, config) {
            Ok(chart) => Some(chart),
            Err(err) => {
                log_error(&format!("failed to render {mount_id}"), &err);
                None
            }
        }
    }
}

struct WebPage {
    document: Document,
}

impl Page for WebPage {
    fn show_error(&self, message: &str) {
        let Ok(Some(container)) = self.document.query_selector(".container") else {
            return;
        };
        let Ok(banner) = self.document.create_element("div") else {
            return;
        };
        banner.set_class_name("error");
        banner.set_inner_html(&format!(
            r#"<i class="fas fa-exclamation-triangle"></i> {message}"#
        ));
        let _ = container.insert_before(&banner, container.first_child().as_ref());
    }
}

#[derive(Clone)]
struct WebButton(HtmlButtonElement);

impl ButtonControl for WebButton {
    fn label(&self) -> String {
        self.0.inner_html()
    }

    fn set_label(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }

    fn set_background(&self, color: Option<&str>) {
        let style = self.0.style();
        let _ = match color {
            Some(color) => style.set_property("background-color", color),
            None => style.remove_property("background-color").map(|_| ()),
        };
    }
}

struct TimeoutSleep;

impl Sleep for TimeoutSleep {
    async fn sleep(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
            }
        });
        let _ = JsFuture::from(promise).await;
    }
}

struct ObservedElements {
    observer: IntersectionObserver,
    elements: Rc<Vec<Element>>,
}

impl RevealSurface for ObservedElements {
    fn mark_revealed(&self, index: usize) {
        if let Some(el) = self.elements.get(index) {
            let _ = el.class_list().add_1(reveal::REVEAL_CLASS);
        }
    }

    fn unobserve(&self, index: usize) {
        if let Some(el) = self.elements.get(index) {
            self.observer.unobserve(el);
        }
    }
}

fn attach_reveal(document: &Document) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(reveal::REVEAL_SELECTOR)?;
    let elements: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    for (index, el) in elements.iter().enumerate() {
        el.set_attribute(REVEAL_INDEX_ATTR, &index.to_string())?;
    }

    let elements = Rc::new(elements);
    let tracker = RefCell::new(RevealTracker::new(elements.len()));
    let observed = elements.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let crossings: Vec<Crossing> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let index = entry.target().get_attribute(REVEAL_INDEX_ATTR)?.parse().ok()?;
                    Some(Crossing {
                        index,
                        intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            let surface = ObservedElements {
                observer,
                elements: observed.clone(),
            };
            tracker.borrow_mut().apply(crossings, &surface);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal::REVEAL_THRESHOLD));
    options.set_root_margin(reveal::REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in elements.iter() {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

fn attach_submit_button(document: &Document) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(SUBMIT_BUTTON_ID) else {
        return Ok(());
    };
    let button = WebButton(element.dyn_into::<HtmlButtonElement>()?);
    let target = button.0.clone();

    let on_click = Closure::<dyn FnMut()>::new(move || {
        let button = button.clone();
        spawn_local(async move {
            if let SubmitOutcome::Failed(err) =
                submit::handle_data_request(&HttpApi, &button, &TimeoutSleep).await
            {
                console::error_1(&format!("Error submitting data request: {err}").into());
            }
        });
    });
    target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn attach_chart_hover(dashboard: &Dashboard<WebChartBackend>) {
    for (_, chart) in dashboard.charts() {
        let canvas = chart.canvas().clone();
        let target = canvas.clone();
        let on_move = Closure::<dyn FnMut()>::new(move || {
            let _ = target.style().set_property("cursor", "pointer");
        });
        if canvas
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .is_ok()
        {
            on_move.forget();
        }
    }
}

fn attach_resize(window: &Window, slot: DashboardSlot) -> Result<(), JsValue> {
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(dashboard) = slot.borrow().as_ref() {
            dashboard.handle_resize();
        }
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn attach_anchor_scroll(document: &Document) -> Result<(), JsValue> {
    let doc = document.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(el) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let href = el.get_attribute("href");
        let Some(selector) = scroll::anchor_target(&el.tag_name(), href.as_deref()) else {
            return;
        };
        event.prevent_default();
        if let Ok(Some(target)) = doc.query_selector(selector) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

async fn init(document: Document, slot: DashboardSlot) {
    let page = WebPage {
        document: document.clone(),
    };
    let backend = WebChartBackend { document };

    match Dashboard::load(backend, &HttpApi, &page).await {
        Ok(dashboard) => {
            attach_chart_hover(&dashboard);
            *slot.borrow_mut() = Some(dashboard);
        }
        Err(err) => console::error_1(&format!("Error initializing dashboard: {err}").into()),
    }
}

/// `window.surveyDashboard.updateCharts(bundle)` for poking at live charts
/// from the developer console.
fn expose_console_handle(window: &Window, slot: DashboardSlot) -> Result<(), JsValue> {
    let update_charts = Closure::<dyn Fn(JsValue) -> Result<(), JsValue>>::new(move |value: JsValue| {
        let update: ChartDataUpdate = serde_wasm_bindgen::from_value(value)?;
        if let Some(dashboard) = slot.borrow_mut().as_mut() {
            dashboard.update_charts(&update);
        }
        Ok(())
    });

    let handle = Object::new();
    Reflect::set(&handle, &JsValue::from_str("updateCharts"), update_charts.as_ref())?;
    Reflect::set(window, &JsValue::from_str("surveyDashboard"), &handle)?;
    update_charts.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document not available"))?;

    let slot: DashboardSlot = Rc::default();
    attach_resize(&window, slot.clone())?;
    attach_anchor_scroll(&document)?;
    expose_console_handle(&window, slot.clone())?;

    if let Err(err) = attach_submit_button(&document) {
        log_error("request button", &err);
    }
    if let Err(err) = attach_reveal(&document) {
        log_error("fade-in observer", &err);
    } else if let Some(root) = document.document_element() {
        root.class_list().add_1(reveal::REVEAL_READY_CLASS)?;
    }

    spawn_local(init(document, slot));
    Ok(())
}
