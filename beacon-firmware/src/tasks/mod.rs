//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shared engine and
//! signals in [`crate::channels`].

pub mod row_monitor;
pub mod serial_rx;
pub mod serial_tx;

pub use row_monitor::row_monitor_task;
pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
