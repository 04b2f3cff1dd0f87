//! Hardware Abstraction Layer for the memo appliance.
//!
//! Capability traits only: the ring driver, audio codec, storage, and
//! clock are external collaborators the core calls, never reimplemented
//! here. Business logic stays in the core modules, HAL is just I/O.
//!
//! [`sim`] provides in-memory implementations for the host binary and
//! the integration tests.

pub mod audio;
pub mod clock;
pub mod ring;
pub mod sim;
pub mod storage;

pub use audio::{AudioDevice, Clip, DeviceError, RecordHandle};
pub use clock::{Clock, SystemClock};
pub use ring::{IndicatorRing, STATUS_PIXEL};
pub use storage::{Storage, StorageError};
