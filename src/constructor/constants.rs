/// Maximum number of ingredient codes accepted in one request.
pub const DEFAULT_MAX_GROUPS: usize = 12;

/// Maximum number of dishes a single request may produce.
pub const DEFAULT_MAX_DISHES: usize = 100_000;

/// Maximum number of partial selections one request may visit.
pub const DEFAULT_MAX_STEPS: usize = 5_000_000;

/// Message returned to clients when a request fails inside the service.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate combinations";
