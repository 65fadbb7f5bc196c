//! Simulation configuration.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a valid
//! configuration file when the `serde` feature is enabled.

/// How a name that does not match any stop is treated when it appears in an
/// add-taxi, add-passenger, or route command.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopPolicy {
    /// Register a new stop under that name.
    #[default]
    CreateIfAbsent,
    /// Fail the command with `FleetError::UnknownStop`.
    RequireExisting,
}

/// What happens to a passenger created with the same current and
/// destination stop.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DegenerateTripPolicy {
    /// Refuse to create the passenger (`FleetError::DegenerateTrip`).
    #[default]
    Reject,
    /// Record the passenger as already delivered.  It never waits at a stop
    /// and never occupies a seat.
    Deliver,
}

impl StopPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            StopPolicy::CreateIfAbsent  => "create_if_absent",
            StopPolicy::RequireExisting => "require_existing",
        }
    }
}

impl DegenerateTripPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DegenerateTripPolicy::Reject  => "reject",
            DegenerateTripPolicy::Deliver => "deliver",
        }
    }
}

/// Top-level simulation configuration.
///
/// Loaded from a JSON file by the harness and handed to the directory at
/// construction.  The directory copies what it needs; changing a config value
/// after construction has no effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FleetConfig {
    /// Unknown-stop handling for commands that name stops.
    pub stop_policy: StopPolicy,

    /// Handling of passengers whose origin equals their destination.
    pub degenerate_trip: DegenerateTripPolicy,

    /// Seat count the harness offers when the operator leaves capacity blank.
    pub default_capacity: u32,

    /// Master seed for the scenario generator.  The same seed always
    /// produces the same command list.
    pub seed: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            stop_policy:      StopPolicy::default(),
            degenerate_trip:  DegenerateTripPolicy::default(),
            default_capacity: 4,
            seed:             42,
        }
    }
}

impl FleetConfig {
    /// `true` when unknown stop names should be registered on first use.
    #[inline]
    pub fn creates_stops(&self) -> bool {
        self.stop_policy == StopPolicy::CreateIfAbsent
    }
}
