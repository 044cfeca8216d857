//! Inbound commands to the application service.
//!
//! These represent input from the outside world (serial console, IR
//! receiver) that the [`AppService`](super::service::AppService)
//! interprets and acts upon.

/// Commands that input adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// A menu key typed on the serial console (`'0'`–`'3'` select a mode).
    SerialKey(char),

    /// A raw code decoded by the IR receiver.
    IrCode(u32),

    /// Serial positioner: move the servo to an absolute angle.
    SetAngle(i32),

    /// Refill the demo array with random values.
    FillArray,

    /// Run the traced sort over the demo array.
    SortArray,

    /// Print the service-mode status report.
    ShowStatus,

    /// Print the main menu.
    ShowMenu,
}
