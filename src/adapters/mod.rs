//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements             | Connects to                  |
//! |--------------|------------------------|------------------------------|
//! | `hardware`   | ActuatorPort           | LED GPIO, servo PWM          |
//! |              | ClockPort              | host monotonic clock         |
//! | `log_sink`   | EventSink, TraceSink   | `log` facade (serial console)|
//! | `json_sink`  | EventSink, TraceSink   | JSON lines on any `Write`    |
//! | `logger`     | `log::Log`             | stderr with uptime stamps    |
//! | `time`       | ClockPort              | `std::time::Instant`         |

pub mod hardware;
pub mod json_sink;
pub mod log_sink;
pub mod logger;
pub mod time;
