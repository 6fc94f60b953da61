//! Fleet and constraint defaults merged into every export.

use super::request::{ChargingStation, Constraints};

/// Where the exported charging station list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StationSource {
    /// The fixed descriptor in [`ExportDefaults::charging_station`].
    #[default]
    Fixed,
    /// One descriptor per station node, using its port count and the
    /// default charging rate.
    FromGraph,
}

/// Static values the graph does not carry.
///
/// # Examples
///
/// ```
/// use u_evrp::export::{ExportDefaults, StationSource};
///
/// let d = ExportDefaults::default()
///     .with_vehicle_capacity(150.0)
///     .with_station_source(StationSource::FromGraph);
/// assert_eq!(d.vehicle_capacity(), 150.0);
/// assert_eq!(d.battery_capacity(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaults {
    vehicle_capacity: f64,
    battery_capacity: f64,
    initial_battery: f64,
    charging_station: ChargingStation,
    constraints: Constraints,
    station_source: StationSource,
    include_overlay_edges: bool,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            vehicle_capacity: 100.0,
            battery_capacity: 200.0,
            initial_battery: 200.0,
            charging_station: ChargingStation {
                id: "station-1".into(),
                charging_rate: 50.0,
                max_ports: 2,
            },
            constraints: Constraints {
                min_battery_threshold: 0.15,
                time_limit: 8.0,
                energy_consumption_rate: 0.1,
            },
            station_source: StationSource::Fixed,
            include_overlay_edges: true,
        }
    }
}

impl ExportDefaults {
    /// Sets the load capacity of every vehicle.
    pub fn with_vehicle_capacity(mut self, capacity: f64) -> Self {
        self.vehicle_capacity = capacity;
        self
    }

    /// Sets battery capacity and initial charge of every vehicle.
    pub fn with_battery(mut self, capacity: f64, initial: f64) -> Self {
        self.battery_capacity = capacity;
        self.initial_battery = initial;
        self
    }

    /// Sets the fixed charging station descriptor.
    pub fn with_charging_station(mut self, station: ChargingStation) -> Self {
        self.charging_station = station;
        self
    }

    /// Sets the constraints block.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Chooses where charging stations come from.
    pub fn with_station_source(mut self, source: StationSource) -> Self {
        self.station_source = source;
        self
    }

    /// Leaves `vehicle-*` overlay edges out of the exported edge list.
    pub fn without_overlay_edges(mut self) -> Self {
        self.include_overlay_edges = false;
        self
    }

    /// Vehicle load capacity.
    pub fn vehicle_capacity(&self) -> f64 {
        self.vehicle_capacity
    }

    /// Vehicle battery capacity.
    pub fn battery_capacity(&self) -> f64 {
        self.battery_capacity
    }

    /// Vehicle charge at departure.
    pub fn initial_battery(&self) -> f64 {
        self.initial_battery
    }

    /// Fixed charging station descriptor.
    pub fn charging_station(&self) -> &ChargingStation {
        &self.charging_station
    }

    /// Constraints block.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Charging station source.
    pub fn station_source(&self) -> StationSource {
        self.station_source
    }

    /// Whether overlay edges are exported.
    pub fn include_overlay_edges(&self) -> bool {
        self.include_overlay_edges
    }
}
