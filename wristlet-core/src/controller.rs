//! Watch controller
//!
//! Owns every driver handle and the current [`Mode`]. Each call to
//! [`Watch::tick`] performs one unit of work for the current mode (one
//! frame, one wait, one sync attempt), turns what it observed into an
//! [`Event`], and feeds it to the state machine. Entering a mode draws its
//! screen and sets the indicator light.

use crate::config::{ConfigError, WatchConfig};
use crate::input::{InputCoordinator, TimeoutWindow, WaitOutcome};
use crate::light;
use crate::motion::MotionSmoother;
use crate::network;
use crate::render::{self, ClockFace};
use crate::state::{ErrorKind, Event, MenuPage, Mode};
use crate::traits::{
    BatteryMonitor, ButtonEvent, ButtonInput, IndicatorLight, MotionSensor, PanelDriver,
    PanelError, Radio, RealTimeClock, Rgb, StepCounter, SystemClock,
};

const GYRO_INIT_MSG: &str = "Initializing gyro..";
const CONNECTING_MSG: &str = "Connecting to WiFi...";
const GETTING_TIME_MSG: &str = "Getting time...";

/// Length of one self-destruct count
const COUNTDOWN_STEP_MS: u64 = 1_000;

/// The set of driver types a board provides
pub trait Board {
    type Panel: PanelDriver;
    type Radio: Radio;
    type Rtc: RealTimeClock;
    type Light: IndicatorLight;
    type Sensor: MotionSensor + StepCounter;
    type Battery: BatteryMonitor;
    type Button: ButtonInput;
    type Clock: SystemClock;
}

/// Driver handles handed to the controller
pub struct Devices<B: Board> {
    pub panel: B::Panel,
    pub radio: B::Radio,
    pub rtc: B::Rtc,
    pub light: B::Light,
    pub sensor: B::Sensor,
    pub battery: B::Battery,
    pub button: B::Button,
    pub clock: B::Clock,
}

/// The watch
pub struct Watch<B: Board> {
    panel: B::Panel,
    radio: B::Radio,
    rtc: B::Rtc,
    light: B::Light,
    sensor: B::Sensor,
    battery: B::Battery,
    input: InputCoordinator<B::Button, B::Clock>,
    config: WatchConfig,
    mode: Mode,
    smoother: MotionSmoother,
    /// Pending re-sync; only consumed from the clock
    resync: Option<TimeoutWindow>,
    /// Idle, countdown or display window of the current mode
    mode_window: Option<TimeoutWindow>,
    /// Last face drawn, `None` forces a redraw
    clock_face: Option<ClockFace>,
    synced_once: bool,
    last_steps: u32,
}

impl<B: Board> Watch<B> {
    /// Create the controller in [`Mode::Booting`]
    ///
    /// Nothing touches the hardware until the first [`Watch::tick`].
    pub fn new(devices: Devices<B>, config: WatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            panel: devices.panel,
            radio: devices.radio,
            rtc: devices.rtc,
            light: devices.light,
            sensor: devices.sensor,
            battery: devices.battery,
            input: InputCoordinator::new(
                devices.button,
                devices.clock,
                config.ui.poll_interval_ms,
            ),
            smoother: MotionSmoother::new(config.motion.angle_modifier),
            config,
            mode: Mode::Booting,
            resync: None,
            mode_window: None,
            clock_face: None,
            synced_once: false,
            last_steps: 0,
        })
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn panel(&self) -> &B::Panel {
        &self.panel
    }

    pub fn light(&self) -> &B::Light {
        &self.light
    }

    /// Tick forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// Perform one unit of work for the current mode
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Booting => self.boot(),
            Mode::SyncingTime => self.sync(),
            Mode::Clock => self.clock_tick(),
            Mode::MenuBrowsing(page) => self.menu_tick(page),
            Mode::WifiScanning => self.scanner_tick(),
            Mode::GyroAnimating => self.gyro_tick(),
            Mode::SelfDestructCounting(_) => self.countdown_tick(),
            Mode::SelfDestructDone => self.done_tick(),
            Mode::Error(_) => self.input.delay_ms(self.config.ui.poll_interval_ms),
        }
    }

    /// Feed an event to the state machine and enter the resulting mode
    pub fn dispatch(&mut self, event: Event) {
        let previous = self.mode;
        let next = previous.transition(event);
        if next == previous {
            return;
        }

        debug!("Mode {} -> {}", previous, next);
        self.mode = next;
        self.enter();
    }

    /// Give back the driver handles
    pub fn release(self) -> Devices<B> {
        let (button, clock) = self.input.release();
        Devices {
            panel: self.panel,
            radio: self.radio,
            rtc: self.rtc,
            light: self.light,
            sensor: self.sensor,
            battery: self.battery,
            button,
            clock,
        }
    }

    fn enter(&mut self) {
        self.mode_window = None;

        match self.mode {
            Mode::Booting | Mode::SyncingTime => {}
            Mode::Clock => {
                light::show(&mut self.light, Rgb::OFF);
                self.clock_face = None;
            }
            Mode::MenuBrowsing(page) => {
                report(render::draw_menu_page(&mut self.panel, page));
                light::show(&mut self.light, light::menu_color(page));
                let timeout = self.config.ui.menu_timeout_ms as u64;
                self.mode_window = Some(self.input.start_window(timeout));
            }
            Mode::WifiScanning => {
                light::show(&mut self.light, light::menu_color(MenuPage::WifiScanner.index()));
                self.scan();
            }
            Mode::GyroAnimating => {
                light::show(&mut self.light, light::menu_color(MenuPage::GyroAnimation.index()));
                self.smoother.reset();
            }
            Mode::SelfDestructCounting(remaining) => {
                self.mode_window = Some(self.input.start_window(COUNTDOWN_STEP_MS));
                report(render::draw_countdown(&mut self.panel, remaining));
                light::blink_red(&mut self.light, &mut self.input);
            }
            Mode::SelfDestructDone => {
                report(render::draw_self_destruct_done(&mut self.panel));
                light::show(&mut self.light, Rgb::OFF);
                let duration = self.config.ui.done_display_ms as u64;
                self.mode_window = Some(self.input.start_window(duration));
            }
            Mode::Error(kind) => {
                warn!("Error: {}", kind.message());
                report(render::draw_error(&mut self.panel, kind));
                light::show(&mut self.light, light::RED);
            }
        }
    }

    fn boot(&mut self) {
        info!("Booting");
        self.light.set_brightness(light::BOOT_BRIGHTNESS);
        light::show(&mut self.light, Rgb::OFF);

        if self.panel.init().is_err() {
            self.dispatch(Event::Failure(ErrorKind::PanelInit));
            return;
        }

        report(render::draw_loading(&mut self.panel, GYRO_INIT_MSG));
        if self.sensor.init().is_err() {
            self.dispatch(Event::Failure(ErrorKind::SensorInit));
            return;
        }

        self.dispatch(Event::BootComplete);
    }

    fn sync(&mut self) {
        match self.try_sync() {
            Ok(()) => {
                self.synced_once = true;
                let interval_ms = self.config.network.resync_interval_s as u64 * 1_000;
                self.resync = Some(self.input.start_window(interval_ms));
                self.dispatch(Event::TimeSynced);
            }
            Err(kind) => self.dispatch(Event::Failure(kind)),
        }
    }

    fn try_sync(&mut self) -> Result<(), ErrorKind> {
        let net = &self.config.network;

        if self.synced_once {
            report(render::draw_sync_indicator(&mut self.panel));
        } else {
            report(render::draw_loading(&mut self.panel, CONNECTING_MSG));
        }

        network::connect(
            &mut self.radio,
            &mut self.input,
            &net.ssid,
            &net.password,
            net.connect_timeout_s,
        )?;

        if !self.synced_once {
            report(render::draw_loading(&mut self.panel, GETTING_TIME_MSG));
        }

        network::sync_clock(
            &mut self.rtc,
            &mut self.input,
            &net.ntp_server,
            &net.timezone,
            net.time_sync_timeout_s,
        )
    }

    fn clock_tick(&mut self) {
        if let Some(window) = self.resync {
            if self.input.elapsed(&window) {
                self.resync = None;
                self.dispatch(Event::ResyncDue);
                return;
            }
        }

        let face = self.read_clock_face();
        if self.clock_face != Some(face) {
            report(render::draw_clock(&mut self.panel, &face));
            self.clock_face = Some(face);
        }

        if let Some(ButtonEvent::Press) = self.input.sleep(self.config.ui.poll_interval_ms) {
            self.dispatch(Event::ButtonPressed);
        }
    }

    fn read_clock_face(&mut self) -> ClockFace {
        let timestamp = self.rtc.now() + self.config.network.rtc_offset_s as u64;
        let time = self.rtc.local_time(timestamp);

        match self.sensor.read_step_count() {
            Ok(steps) => self.last_steps = steps,
            Err(e) => warn!("Step count read failed: {}", e),
        }

        let battery = self.battery.read_raw();

        ClockFace {
            hour: time.hour,
            minute: time.minute,
            day: time.day,
            month: time.month,
            steps: self.last_steps,
            low_battery: battery <= self.config.power.low_battery_threshold,
        }
    }

    fn menu_tick(&mut self, page: u8) {
        let window = match self.mode_window {
            Some(window) => window,
            None => self.input.start_window(self.config.ui.menu_timeout_ms as u64),
        };

        match self.input.wait(&window) {
            WaitOutcome::Pressed(ButtonEvent::Press) => self.dispatch(Event::ButtonPressed),
            WaitOutcome::Pressed(ButtonEvent::LongPress) => {
                info!("Selected {}", MenuPage::from_index(page).label());
                self.dispatch(Event::ButtonHeld);
            }
            WaitOutcome::TimedOut => {
                self.mode_window = None;
                self.dispatch(Event::MenuTimeout);
            }
        }
    }

    fn scan(&mut self) {
        report(render::draw_scanning(&mut self.panel));

        let networks = match self.radio.scan_networks() {
            Ok(networks) => networks,
            Err(e) => {
                warn!("Scan failed: {}", e);
                Default::default()
            }
        };
        info!("Found {} networks", networks.len());

        let input = &mut self.input;
        let delay = self.config.ui.scan_line_delay_ms;
        report(render::draw_network_list(&mut self.panel, &networks, || {
            input.delay_ms(delay)
        }));
    }

    fn scanner_tick(&mut self) {
        if let Some(ButtonEvent::Press) = self.input.sleep(self.config.ui.poll_interval_ms) {
            self.dispatch(Event::ButtonPressed);
        }
    }

    fn gyro_tick(&mut self) {
        let reading = self.sensor.read_raw();
        let angles = self.smoother.update(reading);
        report(render::draw_cube(&mut self.panel, angles));

        if let Some(ButtonEvent::Press) = self.input.sleep(self.config.ui.frame_delay_ms) {
            self.dispatch(Event::ButtonPressed);
        }
    }

    fn countdown_tick(&mut self) {
        let window = match self.mode_window {
            Some(window) => window,
            None => self.input.start_window(COUNTDOWN_STEP_MS),
        };

        // Presses do not stop the countdown
        if self.input.wait(&window) == WaitOutcome::TimedOut {
            self.mode_window = None;
            self.dispatch(Event::CountdownTick);
        } else {
            self.mode_window = Some(window);
        }
    }

    fn done_tick(&mut self) {
        let window = match self.mode_window {
            Some(window) => window,
            None => self.input.start_window(self.config.ui.done_display_ms as u64),
        };

        match self.input.wait(&window) {
            WaitOutcome::Pressed(ButtonEvent::Press) => self.dispatch(Event::ButtonPressed),
            WaitOutcome::Pressed(ButtonEvent::LongPress) => self.mode_window = Some(window),
            WaitOutcome::TimedOut => {
                self.mode_window = None;
                self.dispatch(Event::DisplayElapsed);
            }
        }
    }
}

/// Drawing failures are transient; the next render retries
fn report(result: Result<(), PanelError>) {
    if let Err(e) = result {
        warn!("Panel update failed: {}", e);
    }
}
