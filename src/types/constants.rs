/// Significance level used when a configuration does not set one
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Trials per configuration used when a configuration does not set one
pub const DEFAULT_REPETITIONS: usize = 500;

/// Smallest group size with positive within-group degrees of freedom
pub const MIN_GROUP_SIZE: usize = 2;

/// Largest group size a configuration may request
pub const MAX_GROUP_SIZE: usize = 10_000_000;

/// Smallest number of groups a variance comparison can be made on
pub const MIN_GROUPS: usize = 2;
