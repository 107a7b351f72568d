use crate::chart_config::{ChartConfig, ChartData};
use crate::dto::ChartDataBundle;
use crate::error::DashboardError;
use crate::host::{ButtonControl, ChartBackend, ChartHandle, DashboardApi, Page, Sleep};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
pub struct ChartLog {
    pub created: Vec<(String, ChartConfig)>,
    pub updates: Vec<(String, ChartData)>,
    pub resizes: Vec<String>,
    pub destroyed: Vec<String>,
}

pub struct FakeChart {
    mount: String,
    pending: Option<ChartData>,
    log: Rc<RefCell<ChartLog>>,
}

impl ChartHandle for FakeChart {
    fn set_data(&mut self, data: &ChartData) {
        self.pending = Some(data.clone());
    }

    fn update(&mut self) {
        if let Some(data) = self.pending.take() {
            self.log.borrow_mut().updates.push((self.mount.clone(), data));
        }
    }

    fn resize(&self) {
        self.log.borrow_mut().resizes.push(self.mount.clone());
    }
}

impl Drop for FakeChart {
    fn drop(&mut self) {
        if let Ok(mut log) = self.log.try_borrow_mut() {
            log.destroyed.push(self.mount.clone());
        }
    }
}

pub struct FakeBackend {
    pub mounts: BTreeSet<String>,
    pub log: Rc<RefCell<ChartLog>>,
}

impl FakeBackend {
    pub fn with_mounts(mounts: &[&str]) -> Self {
        Self {
            mounts: mounts.iter().map(|m| m.to_string()).collect(),
            log: Rc::default(),
        }
    }
}

impl ChartBackend for FakeBackend {
    type Chart = FakeChart;

    fn create(&self, mount_id: &str, config: &ChartConfig) -> Option<FakeChart> {
        if !self.mounts.contains(mount_id) {
            return None;
        }
        self.log
            .borrow_mut()
            .created
            .push((mount_id.to_string(), config.clone()));
        Some(FakeChart {
            mount: mount_id.to_string(),
            pending: None,
            log: self.log.clone(),
        })
    }
}

#[derive(Default)]
pub struct FakePage {
    pub errors: RefCell<Vec<String>>,
}

impl Page for FakePage {
    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub chart_data: RefCell<Option<Result<ChartDataBundle, DashboardError>>>,
    pub submit_result: RefCell<Option<Result<(), DashboardError>>>,
    /// When set, the next submit waits for this channel instead of
    /// answering immediately.
    pub submit_gate: RefCell<Option<oneshot::Receiver<Result<(), DashboardError>>>>,
    pub submit_calls: Cell<usize>,
}

impl DashboardApi for FakeApi {
    async fn fetch_chart_data(&self) -> Result<ChartDataBundle, DashboardError> {
        self.chart_data
            .borrow_mut()
            .take()
            .unwrap_or(Err(DashboardError::Network("no response queued".into())))
    }

    async fn request_data(&self) -> Result<(), DashboardError> {
        self.submit_calls.set(self.submit_calls.get() + 1);
        let gate = self.submit_gate.borrow_mut().take();
        if let Some(gate) = gate {
            return gate
                .await
                .unwrap_or(Err(DashboardError::Network("gate dropped".into())));
        }
        self.submit_result.borrow_mut().take().unwrap_or(Ok(()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonSnapshot {
    pub label: String,
    pub disabled: bool,
    pub background: Option<String>,
}

#[derive(Clone)]
pub struct FakeButton {
    pub state: Rc<RefCell<ButtonSnapshot>>,
}

impl FakeButton {
    pub fn new(label: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ButtonSnapshot {
                label: label.to_string(),
                disabled: false,
                background: None,
            })),
        }
    }

    pub fn snapshot(&self) -> ButtonSnapshot {
        self.state.borrow().clone()
    }
}

impl ButtonControl for FakeButton {
    fn label(&self) -> String {
        self.state.borrow().label.clone()
    }

    fn set_label(&self, html: &str) {
        self.state.borrow_mut().label = html.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn set_background(&self, color: Option<&str>) {
        self.state.borrow_mut().background = color.map(ToString::to_string);
    }
}

/// Records each sleep together with the button state at that moment.
pub struct FakeSleep {
    pub button: FakeButton,
    pub sleeps: RefCell<Vec<(Duration, ButtonSnapshot)>>,
}

impl FakeSleep {
    pub fn watching(button: &FakeButton) -> Self {
        Self {
            button: button.clone(),
            sleeps: RefCell::default(),
        }
    }
}

impl Sleep for FakeSleep {
    async fn sleep(&self, duration: Duration) {
        self.sleeps
            .borrow_mut()
            .push((duration, self.button.snapshot()));
    }
}
