use super::distance::DistanceMode;
use super::selection::ResidueSelection;
use crate::core::models::surface::SurfaceMetric;
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid threshold range {start}..={end}: start must not exceed end")]
    InvalidRange { start: u32, end: u32 },
    #[error("Contact threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceConfig {
    /// Residues of the first structure, the rows of the contact map.
    pub selection_a: ResidueSelection,
    /// Residues of the second structure, the columns of the contact map.
    pub selection_b: ResidueSelection,
    pub mode: DistanceMode,
    /// Retention threshold of the single contact map; `None` keeps every distance.
    pub contact_threshold: Option<f64>,
    pub sweep_range: RangeInclusive<u32>,
    /// Correlate interface counts with the surface areas attached to the selected
    /// residues, compared by this metric.
    pub surface_metric: Option<SurfaceMetric>,
}

#[derive(Default)]
pub struct InterfaceConfigBuilder {
    selection_a: Option<ResidueSelection>,
    selection_b: Option<ResidueSelection>,
    mode: Option<DistanceMode>,
    contact_threshold: Option<f64>,
    sweep_start: Option<u32>,
    sweep_end: Option<u32>,
    surface_metric: Option<SurfaceMetric>,
}

impl InterfaceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection_a(mut self, selection: ResidueSelection) -> Self {
        self.selection_a = Some(selection);
        self
    }
    pub fn selection_b(mut self, selection: ResidueSelection) -> Self {
        self.selection_b = Some(selection);
        self
    }
    pub fn mode(mut self, mode: DistanceMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn contact_threshold(mut self, threshold: Option<f64>) -> Self {
        self.contact_threshold = threshold;
        self
    }
    pub fn sweep_start(mut self, start: u32) -> Self {
        self.sweep_start = Some(start);
        self
    }
    pub fn sweep_end(mut self, end: u32) -> Self {
        self.sweep_end = Some(end);
        self
    }
    pub fn surface_metric(mut self, metric: SurfaceMetric) -> Self {
        self.surface_metric = Some(metric);
        self
    }

    pub fn build(self) -> Result<InterfaceConfig, ConfigError> {
        let start = self
            .sweep_start
            .ok_or(ConfigError::MissingParameter("sweep_start"))?;
        let end = self
            .sweep_end
            .ok_or(ConfigError::MissingParameter("sweep_end"))?;
        if start > end {
            return Err(ConfigError::InvalidRange { start, end });
        }
        if let Some(threshold) = self.contact_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(ConfigError::InvalidThreshold(threshold));
            }
        }

        Ok(InterfaceConfig {
            selection_a: self
                .selection_a
                .ok_or(ConfigError::MissingParameter("selection_a"))?,
            selection_b: self
                .selection_b
                .ok_or(ConfigError::MissingParameter("selection_b"))?,
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
            contact_threshold: self.contact_threshold,
            sweep_range: start..=end,
            surface_metric: self.surface_metric,
        })
    }
}
