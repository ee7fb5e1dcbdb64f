pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard client,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events from worker tasks
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of buffered data updates (refresh and search results)
    pub const UPDATE_QUEUE_SIZE: usize = 32;

    /// Maximum number of buffered keystroke snapshots for the search worker
    pub const QUERY_QUEUE_SIZE: usize = 64;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Dashboard polling configuration
    pub mod refresh {
        /// Interval between dashboard snapshot fetches (milliseconds)
        pub const INTERVAL_MS: u64 = 5_000;

        /// Lower bound accepted for a user-supplied interval (milliseconds)
        pub const MIN_INTERVAL_MS: u64 = 250;
    }

    /// Search-as-you-type configuration
    pub mod search {
        use std::time::Duration;

        /// Quiet period after the last keystroke before a search fires (milliseconds)
        pub const DEBOUNCE_MS: u64 = 300;

        /// Queries with fewer characters (after trimming) clear the results instead
        pub const MIN_QUERY_CHARS: usize = 2;

        pub const fn debounce() -> Duration {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }

    // =============================================================================
    // CHART CONFIGURATION
    // =============================================================================

    pub mod charts {
        /// Fixed display offset applied to day strings (UTC+8)
        pub const TIMEZONE_OFFSET_HOURS: i32 = 8;

        /// Number of calendar days covered by the activity heatmap
        pub const HEATMAP_DAYS: usize = 30;

        /// Number of hour rows in the activity heatmap
        pub const HOURS_PER_DAY: usize = 24;

        /// Axis labels longer than this are cut and suffixed with "..."
        pub const LABEL_MAX_CHARS: usize = 15;

        /// Label used when a ranked record carries no title or name
        pub const UNKNOWN_LABEL: &str = "Unknown";
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 5;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
