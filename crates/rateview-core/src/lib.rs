//! Deferred presentation values.
//!
//! A timestamp shown to a user has two legitimate renderings: the raw text,
//! which is safe to produce anywhere (static rendering, ahead-of-time
//! generation, a process with no idea what time it is), and a relative
//! phrase such as "3 hours ago", which needs the live clock. [`present`]
//! picks between them from a [`RenderEnvironment`]; [`Observer`] keeps one
//! value across the one-way NON_INTERACTIVE -> INTERACTIVE transition.
//!
//! ```
//! use rateview_core::{ManualClock, Presenter, RenderEnvironment};
//! use std::sync::Arc;
//!
//! let clock = Arc::new(ManualClock::at_rfc3339("2024-05-01T13:00:00Z").unwrap());
//! let presenter = Presenter::new(clock);
//!
//! let raw = "2024-05-01T12:00:00Z";
//! assert_eq!(presenter.present(raw, RenderEnvironment::NonInteractive), raw);
//! assert_eq!(presenter.present(raw, RenderEnvironment::Interactive), "1 hour ago");
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod observer;
pub mod parse;
pub mod present;
pub mod relative;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, DisplayConfig, LogConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use observer::{Listener, Observer, observe};
pub use parse::{parse_reference_time, parse_timestamp};
pub use present::{Presenter, present};
pub use relative::{format_elapsed, format_relative};

pub use rateview_types::*;
