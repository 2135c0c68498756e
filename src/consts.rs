pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying fetch results back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // SELECTION CONFIGURATION
    // =============================================================================

    /// User selected before the user list arrives, and kept when it is empty.
    pub const FALLBACK_USER_ID: i64 = 1;

    /// Position in the user list picked as the initial selection.
    /// The second entry is selected, not the first.
    pub const INITIAL_USER_INDEX: usize = 1;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timeouts
    pub mod network {
        use std::time::Duration;

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Terminal UI timing
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the dashboard appears.
        pub const SPLASH_DURATION_MS: u64 = 2000;

        /// Key event polling interval, which is also the redraw interval.
        pub const POLL_INTERVAL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
