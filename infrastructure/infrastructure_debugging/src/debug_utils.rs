//! Debug Utilities Module
//!
//! Runtime diagnostics switches and the logging subscriber for the big
//! number engine.
//!
//! The engine emits `tracing` events at operation boundaries (`trace!` per
//! call, `debug!` per failure). Nothing is printed until a subscriber is
//! installed with [`DebugUtils::init`]. Two process-wide switches control it:
//! - *enabled*: install a `tracing-subscriber` formatter writing to stderr
//! - *verbose*: additionally raise the engine crates to `trace` level
//!
//! The subscriber's filter is reloadable, so flipping either switch after
//! installation takes effect on the next event.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use thiserror::Error;
use tracing::{debug, Subscriber};
use tracing_subscriber::{layer::Layer, reload, reload::Handle, EnvFilter};

/// Global debug state
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static VERBOSE_DEBUG: AtomicBool = AtomicBool::new(false);
static SUBSCRIBER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Base directive of the last applied configuration
static BASE_FILTER: Mutex<String> = Mutex::new(String::new());
/// Filter handle of the subscriber installed by this crate
static FILTER_HANDLE: OnceLock<Box<dyn ReloadHandle + Send + Sync>> = OnceLock::new();

// Hides the formatter type the handle is tied to
trait ReloadHandle {
    fn reload(&self, new_filter: EnvFilter) -> Result<(), reload::Error>;
}

impl<L, S> ReloadHandle for Handle<L, S>
where
    L: From<EnvFilter> + Layer<S> + 'static,
    S: Subscriber,
{
    fn reload(&self, new_filter: EnvFilter) -> Result<(), reload::Error> {
        Handle::reload(self, new_filter)
    }
}

/// Environment variable that enables diagnostics
pub const ENV_DEBUG: &str = "BIGNUM_DEBUG";
/// Environment variable that enables verbose diagnostics
pub const ENV_VERBOSE: &str = "BIGNUM_VERBOSE";
/// Environment variable holding an `EnvFilter` directive
pub const ENV_FILTER: &str = "BIGNUM_LOG";

/// Crates raised to `trace` in verbose mode
const ENGINE_TARGETS: [&str; 2] = ["usecases_bifs", "infrastructure_bif_dispatcher"];

/// Diagnostics configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Install a log subscriber
    pub enabled: bool,
    /// Trace every engine operation
    pub verbose: bool,
    /// Base `EnvFilter` directive, e.g. `"info"` or `"usecases_bifs=debug"`
    pub filter: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            verbose: false,
            filter: "info".to_string(),
        }
    }
}

impl DebugConfig {
    /// Read the configuration from `BIGNUM_DEBUG`, `BIGNUM_VERBOSE` and
    /// `BIGNUM_LOG`
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_DEBUG) {
            config.enabled = parse_flag(&value);
        }
        if let Some(value) = lookup(ENV_VERBOSE) {
            config.verbose = parse_flag(&value);
        }
        if let Some(filter) = lookup(ENV_FILTER) {
            let filter = filter.trim();
            if !filter.is_empty() {
                config.filter = filter.to_string();
            }
        }
        config
    }

    /// The filter directive the subscriber is built from
    pub fn directive(&self) -> String {
        if !self.verbose {
            return self.filter.clone();
        }
        let mut directive = self.filter.clone();
        for target in ENGINE_TARGETS {
            directive.push_str(&format!(",{}=trace", target));
        }
        directive
    }

    /// Parse the directive into a filter
    ///
    /// # Errors
    /// * `DebugError::InvalidFilter` - If the directive does not parse
    pub fn env_filter(&self) -> Result<EnvFilter, DebugError> {
        let directive = self.directive();
        EnvFilter::try_new(&directive).map_err(|e| DebugError::InvalidFilter {
            directive,
            reason: e.to_string(),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Debug utilities
pub struct DebugUtils;

impl DebugUtils {
    /// Apply `config` and install the log subscriber if it is enabled
    ///
    /// The subscriber is process-global and installed at most once; later
    /// calls update the switches and the base filter of the installed
    /// subscriber. Returns whether this call installed it.
    ///
    /// # Errors
    /// * `DebugError::InvalidFilter` - If the configured filter does not parse
    pub fn init(config: &DebugConfig) -> Result<bool, DebugError> {
        // Validate before touching any global state
        let filter = config.env_filter()?;

        *BASE_FILTER.lock().unwrap_or_else(PoisonError::into_inner) = config.filter.clone();
        DEBUG_ENABLED.store(config.enabled, Ordering::Release);
        VERBOSE_DEBUG.store(config.verbose, Ordering::Release);
        if Self::is_installed() {
            Self::refresh();
            return Ok(false);
        }
        if !config.enabled {
            return Ok(false);
        }

        let builder = tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_filter_reloading();
        let handle = builder.reload_handle();
        let subscriber = builder.finish();
        SUBSCRIBER_INSTALLED.store(true, Ordering::Release);
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // Another subscriber was installed by the embedding program
            return Ok(false);
        }
        let _ = FILTER_HANDLE.set(Box::new(handle));
        debug!(directive = %config.directive(), "bignum diagnostics enabled");
        Ok(true)
    }

    /// Whether a global subscriber is in place
    pub fn is_installed() -> bool {
        SUBSCRIBER_INSTALLED.load(Ordering::Acquire)
    }

    /// Enable debug output
    pub fn enable() {
        DEBUG_ENABLED.store(true, Ordering::Release);
        Self::refresh();
    }

    /// Disable debug output
    pub fn disable() {
        DEBUG_ENABLED.store(false, Ordering::Release);
        Self::refresh();
    }

    /// Check if debug output is enabled
    pub fn is_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Acquire)
    }

    /// Enable verbose debug output
    pub fn enable_verbose() {
        VERBOSE_DEBUG.store(true, Ordering::Release);
        Self::refresh();
    }

    /// Disable verbose debug output
    pub fn disable_verbose() {
        VERBOSE_DEBUG.store(false, Ordering::Release);
        Self::refresh();
    }

    /// Check if verbose debug is enabled
    pub fn is_verbose() -> bool {
        VERBOSE_DEBUG.load(Ordering::Acquire)
    }

    /// The filter the switches currently select
    ///
    /// Disabled diagnostics filter out every event.
    pub fn active_directive() -> String {
        if !Self::is_enabled() {
            return "off".to_string();
        }
        let base = BASE_FILTER.lock().unwrap_or_else(PoisonError::into_inner).clone();
        let config = DebugConfig {
            enabled: true,
            verbose: Self::is_verbose(),
            filter: if base.is_empty() { DebugConfig::default().filter } else { base },
        };
        config.directive()
    }

    /// Push the switches into the installed subscriber's filter
    fn refresh() {
        let Some(handle) = FILTER_HANDLE.get() else {
            return;
        };
        // The base directive was validated by `init`
        if let Err(e) = handle.reload(EnvFilter::new(Self::active_directive())) {
            eprintln!("bignum diagnostics: filter reload failed: {}", e);
        }
    }
}

/// Diagnostics setup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugError {
    /// Filter directive could not be parsed
    #[error("invalid log filter {directive:?}: {reason}")]
    InvalidFilter { directive: String, reason: String },
}
