#![forbid(unsafe_code)]

//! Grid configuration surface.
//!
//! [`GridConfig`] is the persisted, host-owned state of a dynamic grid. The
//! host's inspector and serializer read and write it freely, so nothing
//! here trusts its contents: [`GridConfig::sanitized`] clamps every field
//! into the range the layout stages assume, and the engine only ever works
//! on sanitized copies.
//!
//! # Invariants (after `sanitized()`)
//!
//! 1. `rows >= 1` and `columns >= 1`.
//! 2. Both `fixed_ratio` components are `> 0` (non-positive becomes 1), and
//!    [`GridConfig::aspect`] is finite and `> 0`.
//! 3. `spacing` and `padding` components are finite and `>= 0`.
//! 4. Sanitizing is idempotent.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Malformed JSON | `from_json` input not a config document | `ConfigError::Parse` |
//! | Unknown enum name | `FromStr` on preset / fit type / ratio | `ConfigError::UnknownVariant` |
//! | NaN / infinity | numeric field set programmatically | `validate()` reports `ConfigError::NonFinite`; `sanitized()` clamps |
//! | Non-positive counts | `rows`/`columns` `<= 0` | clamped to 1, never an error |

use std::fmt;
use std::str::FromStr;

use gridfit_core::{Sides, Size, Vec2, non_negative};
use serde::{Deserialize, Serialize};

/// Named bundles of policy settings for common layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Use the configuration exactly as set.
    #[default]
    #[serde(alias = "Custom")]
    Custom,
    /// One column, one row per child.
    VerticalList,
    /// One row, one column per child.
    HorizontalList,
    /// Square item tiles in a fixed number of columns.
    #[serde(alias = "item_grid_v")]
    ItemGridVertical,
}

/// Which axis is held fixed and which is derived from the child count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitType {
    /// Balanced grid, both dimensions fill the container.
    #[default]
    #[serde(alias = "UNIFORM")]
    Uniform,
    /// Balanced grid, width fills, height follows from content.
    #[serde(alias = "WIDTH")]
    Width,
    /// Balanced grid, height fills, width follows from content.
    #[serde(alias = "HEIGHT")]
    Height,
    /// `rows` is an input; `columns` is derived.
    #[serde(alias = "FIXEDROWS")]
    FixedRows,
    /// `columns` is an input; `rows` is derived.
    #[serde(alias = "FIXEDCOLUMNS")]
    FixedColumns,
}

/// How a cell's width and height relate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildRatio {
    /// 1:1 cells.
    #[serde(alias = "Square")]
    Square,
    /// Cells keep `fixed_ratio`.
    #[default]
    #[serde(alias = "Fixed")]
    Fixed,
    /// Cells fill their slot on both axes.
    #[serde(alias = "Free")]
    Free,
}

/// Errors from configuration ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The document could not be deserialized.
    Parse(String),
    /// An enum name was not recognized.
    UnknownVariant { kind: &'static str, value: String },
    /// A numeric field holds NaN or an infinity.
    NonFinite { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::UnknownVariant { kind, value } => write!(f, "unknown {kind}: '{value}'"),
            Self::NonFinite { field } => write!(f, "field '{field}' is not finite"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Lowercase and drop `_`, `-` and spaces so `FIXED_ROWS`, `FixedRows` and
/// `fixed-rows` all compare equal.
fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "custom" => Ok(Self::Custom),
            "verticallist" => Ok(Self::VerticalList),
            "horizontallist" => Ok(Self::HorizontalList),
            "itemgridvertical" | "itemgridv" => Ok(Self::ItemGridVertical),
            _ => Err(ConfigError::UnknownVariant {
                kind: "preset",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for FitType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "uniform" => Ok(Self::Uniform),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "fixedrows" => Ok(Self::FixedRows),
            "fixedcolumns" => Ok(Self::FixedColumns),
            _ => Err(ConfigError::UnknownVariant {
                kind: "fit type",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for ChildRatio {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "square" => Ok(Self::Square),
            "fixed" => Ok(Self::Fixed),
            "free" => Ok(Self::Free),
            _ => Err(ConfigError::UnknownVariant {
                kind: "child ratio",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Custom => "custom",
            Self::VerticalList => "vertical_list",
            Self::HorizontalList => "horizontal_list",
            Self::ItemGridVertical => "item_grid_vertical",
        })
    }
}

impl fmt::Display for FitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uniform => "uniform",
            Self::Width => "width",
            Self::Height => "height",
            Self::FixedRows => "fixed_rows",
            Self::FixedColumns => "fixed_columns",
        })
    }
}

impl fmt::Display for ChildRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Square => "square",
            Self::Fixed => "fixed",
            Self::Free => "free",
        })
    }
}

/// Persisted configuration of one dynamic grid.
///
/// `rows`, `columns`, `fit_x`, `fit_y` and `cell_size` double as outputs:
/// the engine writes the values it used back here at the end of each pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub preset: Preset,
    pub fit_type: FitType,
    pub child_ratio: ChildRatio,
    /// Width:height aspect used by [`ChildRatio::Fixed`].
    pub fixed_ratio: Size,
    pub rows: i32,
    pub columns: i32,
    pub fit_x: bool,
    pub fit_y: bool,
    /// Horizontal (`x`) and vertical (`y`) gap between cells.
    pub spacing: Vec2,
    pub padding: Sides,
    /// Cell size committed by the last pass.
    pub cell_size: Size,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Custom,
            fit_type: FitType::Uniform,
            child_ratio: ChildRatio::Fixed,
            fixed_ratio: Size::new(4.0, 1.0),
            rows: 1,
            columns: 1,
            fit_x: false,
            fit_y: false,
            spacing: Vec2::ZERO,
            padding: Sides::ZERO,
            cell_size: Size::ZERO,
        }
    }
}

impl GridConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    #[must_use]
    pub fn fit_type(mut self, fit_type: FitType) -> Self {
        self.fit_type = fit_type;
        self
    }

    #[must_use]
    pub fn child_ratio(mut self, child_ratio: ChildRatio) -> Self {
        self.child_ratio = child_ratio;
        self
    }

    /// Set the width:height aspect for [`ChildRatio::Fixed`].
    #[must_use]
    pub fn fixed_ratio(mut self, width: f32, height: f32) -> Self {
        self.fixed_ratio = Size::new(width, height);
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn columns(mut self, columns: i32) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn fit(mut self, fit_x: bool, fit_y: bool) -> Self {
        self.fit_x = fit_x;
        self.fit_y = fit_y;
        self
    }

    #[must_use]
    pub fn spacing(mut self, x: f32, y: f32) -> Self {
        self.spacing = Vec2::new(x, y);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// Parse a (possibly partial) JSON document. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject NaN and infinities. Finite out-of-range values are accepted
    /// here and clamped by [`sanitized`](Self::sanitized).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("fixed_ratio.width", self.fixed_ratio.width),
            ("fixed_ratio.height", self.fixed_ratio.height),
            ("spacing.x", self.spacing.x),
            ("spacing.y", self.spacing.y),
            ("padding.left", self.padding.left),
            ("padding.right", self.padding.right),
            ("padding.top", self.padding.top),
            ("padding.bottom", self.padding.bottom),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some(&(field, _)) => Err(ConfigError::NonFinite { field }),
            None => Ok(()),
        }
    }

    /// Copy with every field clamped into its valid range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        out.rows = self.rows.max(1);
        out.columns = self.columns.max(1);
        out.fixed_ratio = Size::new(
            positive_or_one(self.fixed_ratio.width),
            positive_or_one(self.fixed_ratio.height),
        );
        out.spacing = Vec2::new(
            finite_non_negative(self.spacing.x),
            finite_non_negative(self.spacing.y),
        );
        out.padding = Sides::new(
            finite_non_negative(self.padding.left),
            finite_non_negative(self.padding.right),
            finite_non_negative(self.padding.top),
            finite_non_negative(self.padding.bottom),
        );

        #[cfg(feature = "tracing")]
        {
            if out != *self {
                tracing::debug!(
                    rows = self.rows,
                    columns = self.columns,
                    fixed_ratio_w = self.fixed_ratio.width,
                    fixed_ratio_h = self.fixed_ratio.height,
                    "grid config sanitized"
                );
            }
        }

        out
    }

    /// Width divided by height of the sanitized `fixed_ratio`.
    ///
    /// Falls back to 1 when the quotient over- or underflows.
    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        let ratio = positive_or_one(self.fixed_ratio.width) / positive_or_one(self.fixed_ratio.height);
        positive_or_one(ratio)
    }
}

#[inline]
fn positive_or_one(v: f32) -> f32 {
    if v > 0.0 && v.is_finite() { v } else { 1.0 }
}

#[inline]
fn finite_non_negative(v: f32) -> f32 {
    if v.is_finite() { non_negative(v) } else { 0.0 }
}
