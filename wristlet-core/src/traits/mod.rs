//! Hardware abstraction traits
//!
//! These traits define the interface between the watch logic and the
//! board-specific drivers. Each driver handle is owned by exactly one
//! component for the controller's lifetime.

pub mod indicator;
pub mod input;
pub mod panel;
pub mod radio;
pub mod rtc;
pub mod sensor;

pub use indicator::{IndicatorLight, Rgb};
pub use input::{ButtonEvent, ButtonInput, SystemClock};
pub use panel::{Bitmap, Color, PanelDriver, PanelError, PanelExt};
pub use radio::{NetworkName, Radio, RadioError, MAX_NETWORKS, MAX_SSID_LEN};
pub use rtc::{LocalTime, RealTimeClock};
pub use sensor::{AxisReading, BatteryMonitor, MotionSensor, SensorError, StepCounter};
