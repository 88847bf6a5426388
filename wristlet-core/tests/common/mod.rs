//! Fake board shared by the integration tests
//!
//! Every fake keeps its state behind an `Rc` so a test can script inputs
//! and inspect outputs while the watch owns the driver.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use heapless::Vec as HVec;
use wristlet_core::config::{NetworkConfig, WatchConfig};
use wristlet_core::traits::{
    AxisReading, BatteryMonitor, Bitmap, ButtonEvent, ButtonInput, Color, IndicatorLight,
    LocalTime, MotionSensor, NetworkName, PanelDriver, PanelError, Radio, RadioError,
    RealTimeClock, Rgb, SensorError, StepCounter, SystemClock, MAX_NETWORKS,
};
use wristlet_core::{Board, Devices, Watch};

/// 2024-06-03 14:04:55 UTC
pub const JUNE_3RD_1404_55: u64 = 1_717_423_495;

#[derive(Debug, Clone, PartialEq)]
pub enum PanelOp {
    Init,
    Clear,
    Text { x: i32, y: i32, size: u8, text: String },
    Line(i32, i32, i32, i32),
    Rect(i32, i32, u32, u32),
    Bitmap { x: i32, y: i32, width: u32, height: u32 },
    Flush,
}

#[derive(Default)]
pub struct PanelLog {
    pub ops: Vec<PanelOp>,
    pub fail_init: bool,
    /// Every flush reports a bus error
    pub fail_flush: bool,
    cursor: (i32, i32),
    size: u8,
}

impl PanelLog {
    /// Operations since the last clear
    pub fn frame(&self) -> &[PanelOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == PanelOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }

    /// Concatenated text of the current frame
    pub fn frame_text(&self) -> String {
        self.frame()
            .iter()
            .filter_map(|op| match op {
                PanelOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: impl Fn(&PanelOp) -> bool) -> usize {
        self.ops.iter().filter(|op| wanted(op)).count()
    }
}

pub struct FakePanel(pub Rc<RefCell<PanelLog>>);

impl PanelDriver for FakePanel {
    fn init(&mut self) -> Result<(), PanelError> {
        let mut log = self.0.borrow_mut();
        log.ops.push(PanelOp::Init);
        if log.fail_init {
            Err(PanelError::InitFailed)
        } else {
            Ok(())
        }
    }

    fn clear(&mut self) {
        self.0.borrow_mut().ops.push(PanelOp::Clear);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.0.borrow_mut().cursor = (x, y);
    }

    fn set_text_size(&mut self, size: u8) {
        self.0.borrow_mut().size = size;
    }

    fn set_text_color(&mut self, _fg: Color, _bg: Color) {}

    fn set_text_wrap(&mut self, _wrap: bool) {}

    fn print(&mut self, text: &str) {
        let mut log = self.0.borrow_mut();
        let (x, y) = log.cursor;
        let size = log.size;
        log.ops.push(PanelOp::Text {
            x,
            y,
            size,
            text: text.into(),
        });
        log.cursor.0 += text.len() as i32 * 6 * size.max(1) as i32;
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, _color: Color) {
        self.0.borrow_mut().ops.push(PanelOp::Line(x0, y0, x1, y1));
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, _color: Color) {
        self.0.borrow_mut().ops.push(PanelOp::Rect(x, y, width, height));
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, _fg: Color, _bg: Color) {
        self.0.borrow_mut().ops.push(PanelOp::Bitmap {
            x,
            y,
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    fn flush(&mut self) -> Result<(), PanelError> {
        let mut log = self.0.borrow_mut();
        log.ops.push(PanelOp::Flush);
        if log.fail_flush {
            Err(PanelError::Bus)
        } else {
            Ok(())
        }
    }

    fn size(&self) -> (u32, u32) {
        (128, 64)
    }
}

#[derive(Default)]
pub struct RadioState {
    /// Association succeeds on this `is_connected` call (1-based)
    pub connect_on_check: Option<u32>,
    pub checks: u32,
    pub joins: u32,
    pub networks: Vec<&'static str>,
    pub scans: u32,
}

pub struct FakeRadio(pub Rc<RefCell<RadioState>>);

impl Radio for FakeRadio {
    fn begin(&mut self, _ssid: &str, _password: &str) -> Result<(), RadioError> {
        let mut state = self.0.borrow_mut();
        state.joins += 1;
        state.checks = 0;
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        let mut state = self.0.borrow_mut();
        state.checks += 1;
        matches!(state.connect_on_check, Some(n) if state.checks >= n)
    }

    fn scan_networks(&mut self) -> Result<HVec<NetworkName, MAX_NETWORKS>, RadioError> {
        let mut state = self.0.borrow_mut();
        state.scans += 1;
        Ok(state
            .networks
            .iter()
            .filter_map(|name| NetworkName::try_from(*name).ok())
            .collect())
    }
}

pub struct RtcState {
    pub now: u64,
    pub requests: u32,
}

pub struct FakeRtc(pub Rc<RefCell<RtcState>>);

impl RealTimeClock for FakeRtc {
    fn request_network_time(&mut self, _server: &str, _timezone: &str) {
        self.0.borrow_mut().requests += 1;
    }

    fn now(&self) -> u64 {
        self.0.borrow().now
    }

    fn local_time(&self, timestamp: u64) -> LocalTime {
        utc(timestamp)
    }
}

/// Civil UTC time from a Unix timestamp
pub fn utc(timestamp: u64) -> LocalTime {
    let days = (timestamp / 86_400) as i64;
    let secs = timestamp % 86_400;

    // Days to civil date, proleptic Gregorian
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };

    LocalTime {
        year: year as u16,
        month: month as u8,
        day: day as u8,
        hour: (secs / 3_600) as u8,
        minute: (secs % 3_600 / 60) as u8,
        second: (secs % 60) as u8,
    }
}

#[derive(Default)]
pub struct LightState {
    pub pending: Rgb,
    pub brightness: u8,
    pub shown: Vec<Rgb>,
}

impl LightState {
    pub fn current(&self) -> Option<Rgb> {
        self.shown.last().copied()
    }
}

pub struct FakeLight(pub Rc<RefCell<LightState>>);

impl IndicatorLight for FakeLight {
    fn set_color(&mut self, color: Rgb) {
        self.0.borrow_mut().pending = color;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.0.borrow_mut().brightness = brightness;
    }

    fn show(&mut self) {
        let mut state = self.0.borrow_mut();
        let color = state.pending;
        state.shown.push(color);
    }
}

#[derive(Default)]
pub struct SensorState {
    pub fail_init: bool,
    pub reading: AxisReading,
    pub steps: Option<u32>,
    pub reads: u32,
}

pub struct FakeSensor(pub Rc<RefCell<SensorState>>);

impl MotionSensor for FakeSensor {
    fn init(&mut self) -> Result<(), SensorError> {
        if self.0.borrow().fail_init {
            Err(SensorError::NotDetected)
        } else {
            Ok(())
        }
    }

    fn read_raw_x(&mut self) -> f32 {
        let mut state = self.0.borrow_mut();
        state.reads += 1;
        state.reading.x
    }

    fn read_raw_y(&mut self) -> f32 {
        self.0.borrow().reading.y
    }

    fn read_raw_z(&mut self) -> f32 {
        self.0.borrow().reading.z
    }
}

impl StepCounter for FakeSensor {
    fn read_step_count(&mut self) -> Result<u32, SensorError> {
        self.0.borrow().steps.ok_or(SensorError::Bus)
    }
}

pub struct FakeBattery(pub Rc<Cell<u16>>);

impl BatteryMonitor for FakeBattery {
    fn read_raw(&mut self) -> u16 {
        self.0.get()
    }
}

/// Fires each scripted event once the clock reaches its time
pub struct ScriptedButton(pub Rc<RefCell<VecDeque<(u64, ButtonEvent)>>>);

impl ButtonInput for ScriptedButton {
    fn poll(&mut self, now_ms: u64) -> Option<ButtonEvent> {
        let mut script = self.0.borrow_mut();
        match script.front() {
            Some(&(at, event)) if at <= now_ms => {
                script.pop_front();
                Some(event)
            }
            _ => None,
        }
    }
}

/// Time only moves when the watch delays
pub struct FakeClock(pub Rc<Cell<u64>>);

impl SystemClock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.set(self.0.get() + ms as u64);
    }
}

pub struct TestBoard;

impl Board for TestBoard {
    type Panel = FakePanel;
    type Radio = FakeRadio;
    type Rtc = FakeRtc;
    type Light = FakeLight;
    type Sensor = FakeSensor;
    type Battery = FakeBattery;
    type Button = ScriptedButton;
    type Clock = FakeClock;
}

/// Handles onto the state of every fake
#[derive(Clone)]
pub struct Fakes {
    pub panel: Rc<RefCell<PanelLog>>,
    pub radio: Rc<RefCell<RadioState>>,
    pub rtc: Rc<RefCell<RtcState>>,
    pub light: Rc<RefCell<LightState>>,
    pub sensor: Rc<RefCell<SensorState>>,
    pub battery: Rc<Cell<u16>>,
    pub button: Rc<RefCell<VecDeque<(u64, ButtonEvent)>>>,
    pub clock: Rc<Cell<u64>>,
}

impl Fakes {
    /// A healthy board: radio joins at once, network time already set
    pub fn healthy() -> Self {
        Self {
            panel: Rc::new(RefCell::new(PanelLog::default())),
            radio: Rc::new(RefCell::new(RadioState {
                connect_on_check: Some(1),
                ..RadioState::default()
            })),
            rtc: Rc::new(RefCell::new(RtcState {
                now: JUNE_3RD_1404_55,
                requests: 0,
            })),
            light: Rc::new(RefCell::new(LightState::default())),
            sensor: Rc::new(RefCell::new(SensorState {
                steps: Some(120),
                ..SensorState::default()
            })),
            battery: Rc::new(Cell::new(3_000)),
            button: Rc::new(RefCell::new(VecDeque::new())),
            clock: Rc::new(Cell::new(0)),
        }
    }

    pub fn now(&self) -> u64 {
        self.clock.get()
    }

    /// Queue a button event at an absolute time
    pub fn press_at(&self, at_ms: u64, event: ButtonEvent) {
        self.button.borrow_mut().push_back((at_ms, event));
    }

    /// Queue a short press for the next poll
    pub fn press(&self) {
        self.press_at(self.now(), ButtonEvent::Press);
    }

    /// Queue a long press for the next poll
    pub fn long_press(&self) {
        self.press_at(self.now(), ButtonEvent::LongPress);
    }

    pub fn devices(&self) -> Devices<TestBoard> {
        Devices {
            panel: FakePanel(self.panel.clone()),
            radio: FakeRadio(self.radio.clone()),
            rtc: FakeRtc(self.rtc.clone()),
            light: FakeLight(self.light.clone()),
            sensor: FakeSensor(self.sensor.clone()),
            battery: FakeBattery(self.battery.clone()),
            button: ScriptedButton(self.button.clone()),
            clock: FakeClock(self.clock.clone()),
        }
    }
}

pub fn config() -> WatchConfig {
    WatchConfig {
        network: NetworkConfig::default()
            .with_credentials("home", "secret")
            .unwrap(),
        ..WatchConfig::default()
    }
}

pub fn watch(fakes: &Fakes) -> Watch<TestBoard> {
    watch_with(fakes, config())
}

pub fn watch_with(fakes: &Fakes, config: WatchConfig) -> Watch<TestBoard> {
    Watch::new(fakes.devices(), config).unwrap()
}

/// Boot and sync a healthy watch so it shows the clock
pub fn watch_on_clock(fakes: &Fakes) -> Watch<TestBoard> {
    let mut watch = watch(fakes);
    watch.tick(); // boot
    watch.tick(); // sync
    watch.tick(); // first clock render
    watch
}
