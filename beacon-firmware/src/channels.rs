//! Shared engine and inter-task signals
//!
//! The RX task feeds the engine and the TX task drains it. Both go through
//! a blocking mutex, so engine access never spans an `.await`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use beacon_core::DeviceParams;
use beacon_protocol::ProtocolEngine;

/// Engine type driven by the firmware
pub type BeaconEngine = ProtocolEngine<DeviceParams>;

/// The one protocol engine, installed by `main` before tasks start
static ENGINE: Mutex<CriticalSectionRawMutex, RefCell<Option<BeaconEngine>>> =
    Mutex::new(RefCell::new(None));

/// Signal that the engine has output waiting for the transmitter
pub static TX_PENDING: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Install the engine
pub fn install_engine(engine: BeaconEngine) {
    ENGINE.lock(|cell| *cell.borrow_mut() = Some(engine));
}

/// Run `f` with exclusive access to the engine
///
/// Returns `None` if no engine has been installed yet.
pub fn with_engine<R>(f: impl FnOnce(&mut BeaconEngine) -> R) -> Option<R> {
    ENGINE.lock(|cell| cell.borrow_mut().as_mut().map(f))
}
