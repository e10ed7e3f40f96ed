//! Linux idle probe, backed by the X11 screensaver extension.

use super::IdleProbe;
use crate::errors::{AppError, AppResult};
use std::time::Duration;
use x11rb::connection::Connection;
use x11rb::protocol::screensaver;
use x11rb::protocol::xproto::Window;
use x11rb::rust_connection::RustConnection;

pub struct X11IdleProbe {
    conn: RustConnection,
    root: Window,
}

impl X11IdleProbe {
    /// Connect to the X server once; the connection is reused for every sample.
    pub fn connect() -> AppResult<Self> {
        let (conn, screen_num) = x11rb::connect(None)
            .map_err(|e| AppError::Probe(format!("cannot connect to X server: {}", e)))?;
        let root = conn.setup().roots[screen_num].root;

        Ok(Self { conn, root })
    }
}

impl IdleProbe for X11IdleProbe {
    fn sample(&self) -> AppResult<Duration> {
        let info = screensaver::query_info(&self.conn, self.root)
            .map_err(|e| AppError::Probe(format!("screensaver query failed: {}", e)))?
            .reply()
            .map_err(|e| AppError::Probe(format!("screensaver reply failed: {}", e)))?;

        Ok(Duration::from_millis(u64::from(info.ms_since_user_input)))
    }
}
