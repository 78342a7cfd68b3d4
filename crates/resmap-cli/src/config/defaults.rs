use resmap::core::models::surface::SurfaceMetric;
use resmap::engine::distance::DistanceMode;

/// Values used when neither the config file nor the command line sets them.
pub struct DefaultsConfig {
    pub mode: DistanceMode,
    pub sweep_start: u32,
    pub sweep_end: u32,
    pub surface_metric: SurfaceMetric,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mode: DistanceMode::Atom,
            sweep_start: 1,
            sweep_end: 10,
            surface_metric: SurfaceMetric::Absolute,
        }
    }
}
